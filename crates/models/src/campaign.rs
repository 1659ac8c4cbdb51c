use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::resource::ApiResource;
use crate::validate::{self, FieldSpec, Rule, LETTERS_AND_PUNCT, LETTERS_ONLY, LETTERS_PUNCT_PARENS};

pub const STATUSES: &[&str] = &["pending", "ongoing", "finished"];

/// A player character participating in a campaign, referenced by name
/// only (no link to the character service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerCharacter {
    #[serde(rename = "characterName")]
    pub character_name: String,
}

/// A campaign: party roster plus a `MM-DD-YYYY` date range and quest log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Campaign {
    pub title: String,
    pub description: String,
    pub dm: String,
    pub status: String,
    pub pc: Vec<PlayerCharacter>,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub ql: String,
}

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Campaign title",
        rules: &[
            Rule::NotEmpty("Campaign title is required."),
            Rule::Matches(&LETTERS_ONLY, "Campaign title must contain only letters."),
        ],
    },
    FieldSpec {
        name: "description",
        label: "Description",
        rules: &[
            Rule::NotEmpty("Description is required."),
            Rule::MaxLen(250, "Description must be no longer than 250 characters."),
            Rule::Matches(
                &LETTERS_AND_PUNCT,
                "Description must contain only letters, spaces, and common punctuation.",
            ),
        ],
    },
    FieldSpec {
        name: "dm",
        label: "Dungeon Master",
        rules: &[
            Rule::NotEmpty("Dungeon Master is required."),
            Rule::MaxLen(200, "Dungeon Master must be no longer than 200 characters."),
            Rule::Matches(
                &LETTERS_AND_PUNCT,
                "Dungeon Master must contain only letters, spaces, and common punctuation.",
            ),
        ],
    },
    FieldSpec {
        name: "status",
        label: "Status",
        rules: &[
            Rule::NotEmpty("Status is required."),
            Rule::OneOf(STATUSES, "Status must be one of pending, ongoing or finished."),
        ],
    },
    FieldSpec {
        name: "pc",
        label: "Player Characters",
        rules: &[
            Rule::NotEmpty("Player Characters is required."),
            Rule::MinEntries(2, "Player Characters must always have two or more selections."),
        ],
    },
    FieldSpec {
        name: "startDate",
        label: "Start Date",
        rules: &[
            Rule::NotEmpty("Start Date is required."),
            Rule::Date("Invalid start date format. Use MM-DD-YYYY."),
        ],
    },
    FieldSpec {
        name: "endDate",
        label: "End Date",
        rules: &[
            Rule::NotEmpty("End Date is required."),
            Rule::Date("Invalid end date format. Use MM-DD-YYYY."),
        ],
    },
    FieldSpec {
        name: "ql",
        label: "Quest Log",
        rules: &[
            Rule::NotEmpty("Quest Log is required."),
            Rule::Matches(
                &LETTERS_PUNCT_PARENS,
                "Quest Log must contain only letters, spaces, commas, periods, and parentheses.",
            ),
        ],
    },
];

impl ApiResource for Campaign {
    const NAME: &'static str = "campaign";
    const TITLE: &'static str = "Campaign";
    const COLLECTION: &'static str = "campaigns";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn validate_payload(payload: &Map<String, Value>) -> Result<(), ModelError> {
        validate::validate_fields(payload, Self::fields())?;
        let start = payload.get("startDate").and_then(Value::as_str).and_then(validate::parse_date);
        let end = payload.get("endDate").and_then(Value::as_str).and_then(validate::parse_date);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(ModelError::Validation(
                    "End Date cannot be earlier than Start Date.".into(),
                ));
            }
        }
        Ok(())
    }

    /// The wire `pc` field accepts a comma-separated string or an array of
    /// names; stored form is always a list of `{characterName}` entries.
    fn normalize(mut payload: Map<String, Value>) -> Map<String, Value> {
        if let Some(pc) = payload.remove("pc") {
            let entries: Vec<Value> = match pc {
                Value::String(names) => names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| json!({ "characterName": name }))
                    .collect(),
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(name) => json!({ "characterName": name.trim() }),
                        other => other,
                    })
                    .collect(),
                other => vec![other],
            };
            payload.insert("pc".into(), Value::Array(entries));
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> Map<String, Value> {
        json!({
            "title": "Ravenloft",
            "description": "A gothic horror campaign in Barovia.",
            "dm": "Matthew",
            "status": "ongoing",
            "pc": "Mordai, Vex",
            "startDate": "01-10-2024",
            "endDate": "06-20-2024",
            "ql": "Escape the mists (chapter one)"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn comma_separated_roster_becomes_entries() {
        let campaign = Campaign::from_payload(&valid_payload()).unwrap();
        assert_eq!(
            campaign.pc,
            vec![
                PlayerCharacter { character_name: "Mordai".into() },
                PlayerCharacter { character_name: "Vex".into() },
            ]
        );
    }

    #[test]
    fn array_roster_is_accepted() {
        let mut payload = valid_payload();
        payload.insert("pc".into(), json!(["Mordai", "Vex", "Pike"]));
        let campaign = Campaign::from_payload(&payload).unwrap();
        assert_eq!(campaign.pc.len(), 3);
    }

    #[test]
    fn single_player_roster_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("pc".into(), json!("Mordai"));
        let err = Campaign::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Player Characters must always have two or more selections.");
    }

    #[test]
    fn end_date_before_start_date_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("endDate".into(), json!("01-01-2024"));
        let err = Campaign::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "End Date cannot be earlier than Start Date.");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("status".into(), json!("paused"));
        let err = Campaign::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Status must be one of pending, ongoing or finished.");
    }

    #[test]
    fn title_with_digits_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("title".into(), json!("Ravenloft2"));
        let err = Campaign::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Campaign title must contain only letters.");
    }

    #[test]
    fn stored_form_uses_wire_names() {
        let campaign = Campaign::from_payload(&valid_payload()).unwrap();
        let value = serde_json::to_value(&campaign).unwrap();
        assert!(value.get("startDate").is_some());
        assert_eq!(value["pc"][0]["characterName"], "Mordai");
    }
}

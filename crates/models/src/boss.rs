use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resource::ApiResource;
use crate::validate::{FieldSpec, Rule, PICTURE_URL};

/// A boss stat block: challenge rating, defenses and abilities kept as
/// free-form display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Boss {
    pub named: String,
    pub typed: String,
    pub picture: String,
    pub cr: String,
    pub hp: String,
    pub ac: String,
    pub resistances: String,
    pub immunities: String,
    pub abilities: String,
}

static FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "named", label: "Name", rules: &[Rule::NotEmpty("Name must not be empty")] },
    FieldSpec { name: "typed", label: "Type", rules: &[Rule::NotEmpty("Type must not be empty")] },
    FieldSpec {
        name: "picture",
        label: "Picture",
        rules: &[
            Rule::MinLen(5, "Picture URL is too short"),
            Rule::Matches(&PICTURE_URL, "Picture must be a valid URL."),
        ],
    },
    FieldSpec {
        name: "cr",
        label: "Challenge Rating",
        rules: &[Rule::NotEmpty("Challenge Rating must not be empty")],
    },
    FieldSpec { name: "hp", label: "Hit points", rules: &[Rule::NotEmpty("Hit points must not be empty")] },
    FieldSpec { name: "ac", label: "Armor Class", rules: &[Rule::NotEmpty("Armor Class must not be empty")] },
    FieldSpec {
        name: "resistances",
        label: "Resistances",
        rules: &[Rule::NotEmpty("Resistances must not be empty")],
    },
    FieldSpec {
        name: "immunities",
        label: "Immunities",
        rules: &[Rule::NotEmpty("Immunities must not be empty")],
    },
    FieldSpec {
        name: "abilities",
        label: "Abilities",
        rules: &[Rule::NotEmpty("Abilities must not be empty")],
    },
];

impl ApiResource for Boss {
    const NAME: &'static str = "boss";
    const TITLE: &'static str = "Boss";
    const COLLECTION: &'static str = "bosses";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn valid_payload() -> Map<String, Value> {
        json!({
            "named": "Strahd von Zarovich",
            "typed": "Undead",
            "picture": "https://example.com/strahd.png",
            "cr": "15",
            "hp": "144",
            "ac": "16",
            "resistances": "necrotic",
            "immunities": "charm",
            "abilities": "Legendary Resistance"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn valid_boss_decodes() {
        let boss = Boss::from_payload(&valid_payload()).unwrap();
        assert_eq!(boss.named, "Strahd von Zarovich");
        assert_eq!(boss.cr, "15");
    }

    #[test]
    fn bad_picture_url_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("picture".into(), json!("just-text-no-url"));
        let err = Boss::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Picture must be a valid URL.");
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let mut payload = valid_payload();
        payload.insert("extra".into(), json!("ignored"));
        let boss = Boss::from_payload(&payload).unwrap();
        let round_trip = serde_json::to_value(&boss).unwrap();
        assert!(round_trip.get("extra").is_none());
    }
}

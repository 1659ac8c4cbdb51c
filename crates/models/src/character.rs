use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resource::ApiResource;
use crate::validate::{FieldSpec, Rule};

/// A player character sheet header. `level` stays a string on the wire but
/// must parse as an integer of at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Character {
    #[serde(rename = "characterName")]
    pub character_name: String,
    pub race: String,
    #[serde(rename = "className")]
    pub class_name: String,
    pub alignment: String,
    pub level: String,
    pub background: String,
    #[serde(rename = "playerName")]
    pub player_name: String,
}

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "characterName",
        label: "Character name",
        rules: &[
            Rule::NotEmpty("Character name is required."),
            Rule::NoDigits("Character name cannot contain numbers."),
            Rule::MaxLen(50, "Character name must be 50 characters or fewer."),
        ],
    },
    FieldSpec {
        name: "race",
        label: "Race description",
        rules: &[
            Rule::NotEmpty("Race description is required."),
            Rule::NoDigits("Race description cannot contain numbers."),
            Rule::MaxLen(50, "Race description must be 50 characters or fewer."),
        ],
    },
    FieldSpec {
        name: "className",
        label: "Class name",
        rules: &[
            Rule::NotEmpty("Class name is required."),
            Rule::NoDigits("Class name cannot contain numbers."),
            Rule::MaxLen(50, "Class name must be 50 characters or fewer."),
        ],
    },
    FieldSpec {
        name: "alignment",
        label: "Alignment",
        rules: &[Rule::NotEmpty("Alignment is required.")],
    },
    FieldSpec {
        name: "level",
        label: "Level",
        rules: &[
            Rule::NotEmpty("Level is required."),
            Rule::IntAtLeast(1, "Level must be a number.", "Level must be 1 or higher."),
        ],
    },
    FieldSpec {
        name: "background",
        label: "Background description",
        rules: &[
            Rule::NotEmpty("Background description is required."),
            Rule::NoDigits("Background description cannot contain numbers."),
            Rule::MaxLen(200, "Background description must be no longer than 200 characters."),
        ],
    },
    FieldSpec {
        name: "playerName",
        label: "Player name",
        rules: &[
            Rule::NotEmpty("Player name is required."),
            Rule::NoDigits("Player name cannot contain numbers."),
            Rule::MaxLen(50, "Player name must be 50 characters or fewer."),
        ],
    },
];

impl ApiResource for Character {
    const NAME: &'static str = "character";
    const TITLE: &'static str = "Character";
    const COLLECTION: &'static str = "characters";

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
            "characterName": "Mordai",
            "race": "Tiefling",
            "className": "Warlock",
            "alignment": "Chaotic Neutral",
            "level": "5",
            "background": "Charlatan",
            "playerName": "Sam"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn valid_character_decodes() {
        let character = Character::from_payload(&valid_payload()).unwrap();
        assert_eq!(character.character_name, "Mordai");
        assert_eq!(character.level, "5");
    }

    #[test]
    fn non_numeric_level_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("level".into(), json!("abc"));
        let err = Character::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Level must be a number.");
    }

    #[test]
    fn level_zero_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("level".into(), json!("0"));
        let err = Character::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Level must be 1 or higher.");
    }

    #[test]
    fn name_with_digits_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("characterName".into(), json!("Mordai 2"));
        let err = Character::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Character name cannot contain numbers.");
    }
}

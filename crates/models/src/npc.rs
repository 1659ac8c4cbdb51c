use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resource::ApiResource;
use crate::validate::{FieldSpec, Rule, PICTURE_URL};

/// A non-player character: role, portrait and roleplay notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Npc {
    pub named: String,
    pub role: String,
    pub picture: String,
    pub personality: String,
    pub inventory: String,
    pub likes: String,
    pub money: String,
    pub backstory: String,
}

static FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "named", label: "Name", rules: &[Rule::NotEmpty("Name must not be empty")] },
    FieldSpec { name: "role", label: "Role", rules: &[Rule::NotEmpty("Role must not be empty")] },
    FieldSpec {
        name: "picture",
        label: "Picture",
        rules: &[
            Rule::MinLen(5, "Picture URL is too short"),
            Rule::Matches(&PICTURE_URL, "Picture must be a valid URL."),
        ],
    },
    FieldSpec {
        name: "personality",
        label: "Personality",
        rules: &[Rule::NotEmpty("Personality must not be empty")],
    },
    FieldSpec {
        name: "inventory",
        label: "Inventory",
        rules: &[Rule::NotEmpty("Inventory must not be empty")],
    },
    FieldSpec { name: "likes", label: "Likes", rules: &[Rule::NotEmpty("Likes must not be empty")] },
    FieldSpec { name: "money", label: "Money", rules: &[Rule::NotEmpty("Money must not be empty")] },
    FieldSpec {
        name: "backstory",
        label: "Backstory",
        rules: &[Rule::NotEmpty("Backstory must not be empty")],
    },
];

impl ApiResource for Npc {
    const NAME: &'static str = "npc";
    const TITLE: &'static str = "Npc";
    const COLLECTION: &'static str = "npcs";

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
            "named": "Barkeep Joren",
            "role": "Merchant",
            "picture": "https://example.com/joren.png",
            "personality": "Gruff but fair",
            "inventory": "Ale, rumors",
            "likes": "Gold",
            "money": "35 gp",
            "backstory": "Retired adventurer running the Gilded Flagon"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn valid_npc_decodes() {
        let npc = Npc::from_payload(&valid_payload()).unwrap();
        assert_eq!(npc.named, "Barkeep Joren");
        assert_eq!(npc.money, "35 gp");
    }

    #[test]
    fn empty_backstory_is_rejected() {
        let mut payload = valid_payload();
        payload.insert("backstory".into(), json!(""));
        let err = Npc::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Backstory must not be empty");
    }

    #[test]
    fn missing_role_reports_required() {
        let mut payload = valid_payload();
        payload.remove("role");
        let err = Npc::from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Role is required.");
    }
}

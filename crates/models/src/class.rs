use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resource::ApiResource;
use crate::validate::{FieldSpec, Rule};

/// A character class: hit die, primary ability and proficiency summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Class {
    pub role: String,
    pub description: String,
    pub hd: String,
    pub pa: String,
    pub stp: String,
    pub awp: String,
}

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "role",
        label: "Class",
        rules: &[Rule::MinLen(5, "Class must be at least 5 characters long")],
    },
    FieldSpec {
        name: "description",
        label: "Description",
        rules: &[Rule::MinLen(5, "Description must be at least 5 characters long")],
    },
    FieldSpec {
        name: "hd",
        label: "Hit Die",
        rules: &[Rule::MinLen(2, "Hit Die must be at least 2 characters long")],
    },
    FieldSpec {
        name: "pa",
        label: "Primary Ability",
        rules: &[Rule::MinLen(5, "Primary Ability must be at least 5 characters long")],
    },
    FieldSpec {
        name: "stp",
        label: "Saving Throw Proficiencies",
        rules: &[Rule::MinLen(5, "Saving Throw Proficiencies must be at least 5 characters long")],
    },
    FieldSpec {
        name: "awp",
        label: "Armor and Weapon Proficiencies",
        rules: &[Rule::MinLen(5, "Armor and Weapon Proficiencies must be at least 5 characters long")],
    },
];

impl ApiResource for Class {
    const NAME: &'static str = "class";
    const TITLE: &'static str = "Class";
    const COLLECTION: &'static str = "classes";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }
}

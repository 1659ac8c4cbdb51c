use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resource::ApiResource;
use crate::validate::{FieldSpec, Rule};

/// A weapon table row: cost, damage dice and properties as display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Weapon {
    pub named: String,
    pub category: String,
    pub cost: String,
    pub damage: String,
    pub properties: String,
    pub description: String,
    pub weight: String,
}

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "named",
        label: "Weapon name",
        rules: &[Rule::NotEmpty("Weapon name must not be empty")],
    },
    FieldSpec {
        name: "category",
        label: "Category",
        rules: &[Rule::MinLen(5, "Category must be at least 5 characters long")],
    },
    FieldSpec { name: "cost", label: "Cost", rules: &[Rule::NotEmpty("Cost must not be empty")] },
    FieldSpec { name: "damage", label: "Damage", rules: &[Rule::NotEmpty("Damage must not be empty")] },
    FieldSpec {
        name: "properties",
        label: "Properties",
        rules: &[Rule::NotEmpty("Properties must not be empty")],
    },
    FieldSpec {
        name: "description",
        label: "Description",
        rules: &[Rule::MinLen(5, "Description must be at least 5 characters long")],
    },
    FieldSpec { name: "weight", label: "Weight", rules: &[Rule::NotEmpty("Weight must not be empty")] },
];

impl ApiResource for Weapon {
    const NAME: &'static str = "weapon";
    const TITLE: &'static str = "Weapon";
    const COLLECTION: &'static str = "weapons";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }
}

//! Record types for the six tabletop-RPG reference resources, plus the
//! declarative field-validation engine they share.

pub mod errors;
pub mod record;
pub mod resource;
pub mod validate;

pub mod boss;
pub mod campaign;
pub mod character;
pub mod class;
pub mod npc;
pub mod weapon;

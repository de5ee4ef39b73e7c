//! Domain models with validation at construction
//!
//! Request bodies arrive as loosely typed payloads and are validated into
//! `EntityFields` before any database call. Invalid input returns
//! `ValidationError`, not panic.

pub mod entity;
pub mod fields;
pub mod kind;
pub mod validation;

pub use entity::{Entity, EntityFields, EntityPayload};
pub use fields::{Label, StellarMass};
pub use kind::EntityKind;
pub use validation::ValidationError;

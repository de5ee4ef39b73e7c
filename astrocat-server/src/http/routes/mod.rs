//! Route handlers organized by resource

pub mod docs;
pub mod entities;
pub mod health;

// src/catalog/mod.rs
//
// Immutable seed data. Nothing here is ever written at runtime.
pub mod agents;
pub mod journal;
pub mod listings;
pub mod plans;
pub mod site;

// WorkLog - core/mod.rs
//
// Core business logic layer: the log store, the entry model, and the
// summary cutoff gate.
// Must NOT depend on: ui, platform, app.

pub mod cutoff;
pub mod model;
pub mod store;

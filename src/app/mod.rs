// WorkLog - app/mod.rs
//
// Application layer: state management and event handling.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod state;

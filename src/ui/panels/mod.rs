// WorkLog - ui/panels/mod.rs

pub mod controls;
pub mod journal;
pub mod prompts;

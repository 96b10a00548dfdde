// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure (health indicators, HTTP listener).
// - Hand the running application to the shutdown sequencer.

pub mod application;
pub mod config;
pub mod http;
pub mod state;

// Composition root for the people directory.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete person store and wire it into use case handlers.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;

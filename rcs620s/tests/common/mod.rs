// Shared fixtures for the integration test crates.

pub mod fixtures;

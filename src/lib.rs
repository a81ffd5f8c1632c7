// Triad - persona-based assistant CLI
// Library exports

// Core modules
pub mod assistants;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod profile;
pub mod router;

// Router module
// Public interface for command routing and dispatch

mod decision;

pub use decision::{RouteDecision, Router, COMMANDS};

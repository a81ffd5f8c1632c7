// Assistant personas
// Public interface for the persona variants and their request/response types

mod persona;
mod types;

pub use persona::{Assistant, PersonaKind};
pub use types::{Request, Response};

// CLI module
// Interactive REPL and console input collection

mod prompts;
mod repl;

pub use prompts::{prompt_age, prompt_boolean, prompt_nonempty};
pub use repl::Repl;

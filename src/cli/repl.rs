// Interactive session loop

use anyhow::Result;
use crossterm::{
    cursor,
    style::Stylize,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, IsTerminal, Write};

use crate::assistants::Response;
use crate::gateway::GptClient;
use crate::profile::UserProfile;
use crate::router::{RouteDecision, Router, COMMANDS};

use super::prompts::{prompt_age, prompt_boolean, prompt_nonempty, read_line};

pub struct Repl {
    gateway: GptClient,
    router: Router,
    // UI state
    is_interactive: bool,
}

impl Repl {
    pub fn new(gateway: GptClient, router: Router) -> Self {
        // Detect if we're in interactive mode (stdout is a TTY)
        let is_interactive = io::stdout().is_terminal();

        Self {
            gateway,
            router,
            is_interactive,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!(
            "=== AI Assistant ({} Integrated) ===",
            self.gateway.service_label()
        );

        // Collect user profile
        let name = prompt_nonempty("Enter your name: ")?;
        let age = prompt_age()?;
        let is_premium = prompt_boolean()?;
        let mut user = UserProfile::new(&name, age, is_premium)?;

        println!();
        println!("Hello, {}! How can assistance begin today?", user.name());

        // Interaction loop
        loop {
            println!();
            println!("Available commands:");
            for cmd in COMMANDS {
                println!(" - {}", cmd);
            }
            println!("(Type exactly as shown or 'exit' to quit)");

            let input = read_line("Enter command: ")?;

            match self.router.route(&input) {
                RouteDecision::Exit => {
                    println!();
                    println!("Session ended.");
                    break;
                }
                RouteDecision::Persona(kind) => {
                    let value = prompt_nonempty(kind.input_label())?;

                    self.show_progress()?;
                    let response = self
                        .router
                        .dispatch(kind, value, &mut user, &self.gateway)
                        .await;
                    self.clear_progress()?;

                    println!("{}", render_turn(kind.command(), &response));

                    println!();
                    println!(
                        "Is there anything else I can assist you with, {}?",
                        user.name()
                    );
                }
                RouteDecision::Passthrough => {
                    // Free-form fallback: straight to the gateway, no
                    // Request/Response pair
                    let prompt = prompt_nonempty("Unknown command. Enter your request for AI: ")?;

                    self.show_progress()?;
                    let reply = self.gateway.complete(&prompt).await;
                    self.clear_progress()?;

                    println!("{}", reply);
                }
            }
        }

        Ok(())
    }

    fn show_progress(&self) -> Result<()> {
        if self.is_interactive {
            print!("{}", "Thinking...".dark_grey());
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn clear_progress(&self) -> Result<()> {
        if self.is_interactive {
            io::stdout()
                .execute(cursor::MoveToColumn(0))?
                .execute(Clear(ClearType::CurrentLine))?;
        }
        Ok(())
    }
}

/// Echo the dispatched command above the persona's reply.
fn render_turn(command: &str, response: &Response) -> String {
    format!("User request: '{}'\n{}", command, response.message)
}

// Command routing and persona dispatch

use crate::assistants::{Assistant, PersonaKind, Request, Response};
use crate::gateway::GptClient;
use crate::profile::UserProfile;

/// Commands shown in the menu each turn.
pub const COMMANDS: &[&str] = &["play music", "workout plan", "schedule study"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// A known command selects exactly one persona.
    Persona(PersonaKind),
    /// Unknown input bypasses the personas: one free-form line goes straight
    /// to the gateway, with no Request/Response pair constructed.
    Passthrough,
    /// Terminal state: end the interaction loop.
    Exit,
}

#[derive(Default)]
pub struct Router;

impl Router {
    pub fn new() -> Self {
        Self
    }

    /// Make a routing decision for raw console input.
    ///
    /// Matching is on the trimmed, lower-cased command string.
    pub fn route(&self, input: &str) -> RouteDecision {
        let command = input.trim().to_lowercase();

        if command == "exit" {
            tracing::info!("Routing decision: EXIT");
            return RouteDecision::Exit;
        }

        for kind in [PersonaKind::Music, PersonaKind::Fitness, PersonaKind::Study] {
            if command == kind.command() {
                tracing::info!("Routing decision: PERSONA ({})", kind.command());
                return RouteDecision::Persona(kind);
            }
        }

        tracing::info!("Routing decision: PASSTHROUGH");
        RouteDecision::Passthrough
    }

    /// Store the freshly collected preference, then run one persona turn.
    ///
    /// Builds the per-turn `Request` (text and command are both the
    /// normalized command string) and returns the persona's wrapped response.
    /// The caller echoes the command alongside the response message.
    pub async fn dispatch(
        &self,
        kind: PersonaKind,
        preference: String,
        user: &mut UserProfile,
        gateway: &GptClient,
    ) -> Response {
        user.set_preference(kind.preference_key(), preference);

        let command = kind.command();
        let request = Request::new(command, command);

        Assistant::new(kind, user).handle_request(&request, gateway).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands_select_personas() {
        let router = Router::new();
        assert_eq!(
            router.route("play music"),
            RouteDecision::Persona(PersonaKind::Music)
        );
        assert_eq!(
            router.route("workout plan"),
            RouteDecision::Persona(PersonaKind::Fitness)
        );
        assert_eq!(
            router.route("schedule study"),
            RouteDecision::Persona(PersonaKind::Study)
        );
    }

    #[test]
    fn test_routing_normalizes_case_and_whitespace() {
        let router = Router::new();
        assert_eq!(router.route("  EXIT "), RouteDecision::Exit);
        assert_eq!(router.route("Exit"), RouteDecision::Exit);
        assert_eq!(
            router.route("  Play Music "),
            RouteDecision::Persona(PersonaKind::Music)
        );
    }

    #[test]
    fn test_unknown_input_falls_through() {
        let router = Router::new();
        assert_eq!(router.route("banana"), RouteDecision::Passthrough);
        assert_eq!(router.route(""), RouteDecision::Passthrough);
    }

    #[test]
    fn test_menu_matches_persona_commands() {
        let expected: &[&str] = &[
            PersonaKind::Music.command(),
            PersonaKind::Fitness.command(),
            PersonaKind::Study.command(),
        ];
        assert_eq!(COMMANDS, expected);
    }
}

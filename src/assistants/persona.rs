// Persona variants: Music, Fitness, Study
//
// Each persona turns one stored preference into a model prompt. Prompt
// construction is pure so it can be tested without a network; only
// handle_request touches the gateway.

use chrono::{DateTime, Local};

use super::types::{Request, Response};
use crate::gateway::GptClient;
use crate::profile::UserProfile;

/// The closed set of assistant personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaKind {
    Music,
    Fitness,
    Study,
}

impl PersonaKind {
    /// The command string that selects this persona.
    pub fn command(&self) -> &'static str {
        match self {
            PersonaKind::Music => "play music",
            PersonaKind::Fitness => "workout plan",
            PersonaKind::Study => "schedule study",
        }
    }

    /// The profile preference key this persona reads.
    pub fn preference_key(&self) -> &'static str {
        match self {
            PersonaKind::Music => "mood",
            PersonaKind::Fitness => "fitness_goal",
            PersonaKind::Study => "study_topic",
        }
    }

    /// Fallback value when the preference was never collected.
    pub fn default_preference(&self) -> &'static str {
        match self {
            PersonaKind::Music => "neutral",
            PersonaKind::Fitness => "general fitness",
            PersonaKind::Study => "general topics",
        }
    }

    /// Console label shown when collecting this persona's preference.
    pub fn input_label(&self) -> &'static str {
        match self {
            PersonaKind::Music => "Enter your music mood/preference: ",
            PersonaKind::Fitness => "Enter your fitness goal: ",
            PersonaKind::Study => "Enter your study topic: ",
        }
    }
}

/// A per-turn persona instance borrowing the session profile.
pub struct Assistant<'a> {
    kind: PersonaKind,
    user: &'a UserProfile,
}

impl<'a> Assistant<'a> {
    pub fn new(kind: PersonaKind, user: &'a UserProfile) -> Self {
        Self { kind, user }
    }

    pub fn kind(&self) -> PersonaKind {
        self.kind
    }

    /// Build this persona's prompt from the profile's preferences.
    ///
    /// Deterministic given the preference value and `now` (only Study embeds
    /// the timestamp).
    pub fn prompt_at(&self, now: DateTime<Local>) -> String {
        let key = self.kind.preference_key();
        let value = self.user.get_preference(key, self.kind.default_preference());

        match self.kind {
            PersonaKind::Music => {
                format!("Suggest 2 songs for a mood of '{}'.", value)
            }
            PersonaKind::Fitness => {
                format!("Create a 30-minute workout plan focused on '{}'.", value)
            }
            PersonaKind::Study => {
                format!(
                    "Plan a study session on '{}' starting at {}.",
                    value,
                    now.format("%Y-%m-%d %H:%M")
                )
            }
        }
    }

    /// Produce a response for one request.
    ///
    /// Known quirk, preserved for compatibility with the original front-end:
    /// the request's `text`/`command` fields are accepted but never inspected.
    /// Only the profile's stored preferences drive the prompt, so re-invoking
    /// a persona without re-collecting its preference replays stale state.
    pub async fn handle_request(&self, _request: &Request, gateway: &GptClient) -> Response {
        let prompt = self.prompt_at(Local::now());
        let reply = gateway.complete(&prompt).await;
        Response::new(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_music_prompt_uses_stored_mood() {
        let mut user = UserProfile::new("Ada", 36, false).unwrap();
        user.set_preference("mood", "happy");

        let assistant = Assistant::new(PersonaKind::Music, &user);
        assert_eq!(
            assistant.prompt_at(fixed_now()),
            "Suggest 2 songs for a mood of 'happy'."
        );
    }

    #[test]
    fn test_music_prompt_defaults_to_neutral() {
        let user = UserProfile::new("Ada", 36, false).unwrap();

        let assistant = Assistant::new(PersonaKind::Music, &user);
        assert_eq!(
            assistant.prompt_at(fixed_now()),
            "Suggest 2 songs for a mood of 'neutral'."
        );
    }

    #[test]
    fn test_fitness_prompt_uses_stored_goal() {
        let mut user = UserProfile::new("Ada", 36, false).unwrap();
        user.set_preference("fitness_goal", "strength");

        let assistant = Assistant::new(PersonaKind::Fitness, &user);
        assert_eq!(
            assistant.prompt_at(fixed_now()),
            "Create a 30-minute workout plan focused on 'strength'."
        );
    }

    #[test]
    fn test_fitness_prompt_defaults_to_general_fitness() {
        let user = UserProfile::new("Ada", 36, false).unwrap();

        let assistant = Assistant::new(PersonaKind::Fitness, &user);
        assert_eq!(
            assistant.prompt_at(fixed_now()),
            "Create a 30-minute workout plan focused on 'general fitness'."
        );
    }

    #[test]
    fn test_study_prompt_embeds_topic_and_timestamp() {
        let mut user = UserProfile::new("Ada", 36, false).unwrap();
        user.set_preference("study_topic", "linear algebra");

        let assistant = Assistant::new(PersonaKind::Study, &user);
        assert_eq!(
            assistant.prompt_at(fixed_now()),
            "Plan a study session on 'linear algebra' starting at 2025-03-01 09:30."
        );
    }

    #[test]
    fn test_study_prompt_defaults_to_general_topics() {
        let user = UserProfile::new("Ada", 36, false).unwrap();

        let assistant = Assistant::new(PersonaKind::Study, &user);
        assert_eq!(
            assistant.prompt_at(fixed_now()),
            "Plan a study session on 'general topics' starting at 2025-03-01 09:30."
        );
    }

    #[test]
    fn test_preference_keys_match_commands() {
        assert_eq!(PersonaKind::Music.preference_key(), "mood");
        assert_eq!(PersonaKind::Fitness.preference_key(), "fitness_goal");
        assert_eq!(PersonaKind::Study.preference_key(), "study_topic");
    }
}

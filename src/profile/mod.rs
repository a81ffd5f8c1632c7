// User profile with validated attributes and session preferences

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Name cannot be empty")]
    EmptyName,
}

/// A user's profile for one interactive session.
///
/// Identity fields are validated at construction and immutable afterwards;
/// only the preference map changes over the session's lifetime.
#[derive(Debug, Clone)]
pub struct UserProfile {
    name: String,
    age: u32,
    is_premium: bool,
    preferences: HashMap<String, String>,
}

impl UserProfile {
    /// Create a profile. Fails if the trimmed name is empty; age and premium
    /// status are already constrained by their types.
    pub fn new(name: &str, age: u32, is_premium: bool) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            age,
            is_premium,
            preferences: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    /// Insert or overwrite a preference. Last write wins.
    pub fn set_preference(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.preferences.insert(key.into(), value.into());
    }

    /// Look up a preference, falling back to `default` when unset.
    pub fn get_preference<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.preferences
            .get(key)
            .map(String::as_str)
            .unwrap_or(default)
    }
}

//! # Session models
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Identity`] | The signed-in user as returned by the login endpoint: `id`, `name`, `email`. |
//! | [`Session`] | Credential plus identity. Both are set together on login and cleared together on logout. |
//!
//! The backend is inconsistent about identifier types (numbers from `/login`,
//! strings from `/users`), so ids are normalised to `String` on the way in by
//! [`string_or_number`].

use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Up to two upper-cased initials taken from the words of the name.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Current credential and identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub credential: Option<String>,
    pub identity: Option<Identity>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

/// Initials for an avatar: first letter of up to two words, `"M"` for a blank name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "M".to_string()
    } else {
        letters
    }
}

/// Accept an identifier encoded either as a JSON string or a JSON number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

//! External text-generation collaborator boundary.
//!
//! # Responsibility
//! - Define the request/response seam to the out-of-core assistant.
//! - Build the prompt strings for the supported assistance modes.
//!
//! # Invariants
//! - The core passes opaque strings through and never parses responses.
//! - The API credential lives in the caller's [`crate::auth::Session`]; it
//!   is handed in per call and never stored here.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Assistance mode applied to draft text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistMode {
    Exegesis,
    Translation,
    Summary,
    Illustration,
}

impl AssistMode {
    /// Label embedded in the generated prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exegesis => "Exegese Bíblica",
            Self::Translation => "Tradução",
            Self::Summary => "Resumo",
            Self::Illustration => "Ilustração",
        }
    }

    /// Builds the opaque prompt for this mode over the writer's draft.
    pub fn build_prompt(self, draft: &str) -> String {
        format!("Modo: {}. Texto do pregador: {draft}", self.label())
    }
}

/// Human-readable failure reported by an assistant implementation.
#[derive(Debug)]
pub struct AssistError {
    message: String,
}

impl AssistError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for AssistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AssistError {}

/// Text-generation collaborator.
///
/// Implementations live outside the core (network clients, test stubs); the
/// core only routes prompt and credential through.
pub trait SermonAssistant {
    fn generate(&self, prompt: &str, api_credential: &str) -> Result<String, AssistError>;
}

#[cfg(test)]
mod tests {
    use super::AssistMode;

    #[test]
    fn prompt_carries_mode_and_draft() {
        let prompt = AssistMode::Summary.build_prompt("Bem-aventurados os mansos");
        assert!(prompt.starts_with("Modo: Resumo."));
        assert!(prompt.ends_with("Bem-aventurados os mansos"));
    }
}

use thiserror::Error;

pub const MAX_PROMPT_CHARS: usize = 600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Prompt is required")]
    Required,
    #[error("Prompt is too long")]
    TooLong,
}

/// User text that passed the length check. Trimming is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn parse(prompt: &str) -> Result<Self, PromptError> {
        if prompt.is_empty() {
            return Err(PromptError::Required);
        }
        if prompt.chars().count() > MAX_PROMPT_CHARS {
            return Err(PromptError::TooLong);
        }

        Ok(Self(prompt.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

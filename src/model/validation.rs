use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text must be between {min} and {max} characters.")]
    LengthOutOfRange { min: usize, max: usize, len: usize },
}

/// Length bounds for sticker text, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRules {
    pub min_len: usize,
    pub max_len: usize,
}

impl TextRules {
    pub const STICKER: Self = Self {
        min_len: 3,
        max_len: 8,
    };

    /// Caps the raw input at `max_len` characters, the limit the text field
    /// enforces while typing, then uppercases it. Uppercasing can lengthen the
    /// text ("ß" becomes "SS"), which `validate` then reports.
    pub fn normalize(&self, raw: &str) -> String {
        raw.chars().take(self.max_len).collect::<String>().to_uppercase()
    }

    pub fn validate(&self, text: &str) -> Result<(), ValidationError> {
        let len = text.chars().count();
        if len < self.min_len || len > self.max_len {
            return Err(ValidationError::LengthOutOfRange {
                min: self.min_len,
                max: self.max_len,
                len,
            });
        }
        Ok(())
    }

    pub fn is_within_bounds(&self, text: &str) -> bool {
        self.validate(text).is_ok()
    }

    pub fn hint(&self) -> String {
        format!(
            "Sticker Text (Min: {}, Max: {} characters)",
            self.min_len, self.max_len
        )
    }
}

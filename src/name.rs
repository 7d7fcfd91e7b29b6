use std::fmt;

/// Name used when the user enters nothing but whitespace.
pub const DEFAULT_NAME: &str = "Mundo";

/// The name to greet. Never empty and never padded with whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Builds a name from a raw input line.
    ///
    /// Surrounding whitespace (line terminator included) is stripped; a blank
    /// result falls back to [`DEFAULT_NAME`].
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "" => Self::default(),
            name => Self(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_NAME
    }
}

impl Default for Name {
    fn default() -> Self {
        Self(DEFAULT_NAME.to_string())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do when an expression references a variable that was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownVariables {
    /// Resolve to `0.0`. Note that this cannot be told apart from a variable
    /// that is legitimately zero.
    #[default]
    Zero,
    /// Fail with [`EvalError::UnknownVariable`](crate::error::EvalError::UnknownVariable).
    Reject,
}

/// What the tokenizer does with characters that are not part of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedCharacters {
    /// Skip them, like whitespace.
    #[default]
    Ignore,
    /// Fail with [`LexError::UnexpectedCharacter`](crate::error::LexError::UnexpectedCharacter).
    /// Whitespace is still skipped.
    Reject,
}

/// Evaluation policies for a [`Calculator`](crate::Calculator).
///
/// The default keeps the lenient behavior: unknown variables are zero and
/// stray characters are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub unknown_variables: UnknownVariables,
    pub unrecognized_characters: UnrecognizedCharacters,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_unknown_variables(mut self) -> Self {
        self.unknown_variables = UnknownVariables::Reject;
        self
    }

    pub fn reject_unrecognized_characters(mut self) -> Self {
        self.unrecognized_characters = UnrecognizedCharacters::Reject;
        self
    }

    /// Both policies set to `Reject`.
    pub fn strict() -> Self {
        Self::new()
            .reject_unknown_variables()
            .reject_unrecognized_characters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = Config::default();
        assert_eq!(config.unknown_variables, UnknownVariables::Zero);
        assert_eq!(config.unrecognized_characters, UnrecognizedCharacters::Ignore);
    }

    #[test]
    fn test_strict_rejects_both() {
        let config = Config::strict();
        assert_eq!(config.unknown_variables, UnknownVariables::Reject);
        assert_eq!(config.unrecognized_characters, UnrecognizedCharacters::Reject);
        assert_eq!(
            Config::new().reject_unknown_variables().unrecognized_characters,
            UnrecognizedCharacters::Ignore
        );
    }
}

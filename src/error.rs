use thiserror::Error;

/// Errors produced by the anagram generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The letters handed to the generator were rejected during validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reasons a sequence of letters is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// No sequence was given at all.
    #[error("input must not be absent")]
    Missing,
    /// The sequence has no letters.
    #[error("input must not be empty")]
    Empty,
    /// A character is not alphabetic.
    #[error("only letters are allowed, found {letter:?} at position {position}")]
    NotALetter {
        /// The offending character.
        letter: char,
        /// Its index in the input.
        position: usize,
    },
    /// Two letters are equal once case is ignored.
    #[error("letters must be distinct, {letter:?} at position {position} repeats position {first}")]
    DuplicateLetter {
        /// The repeated character, as it appears at `position`.
        letter: char,
        /// Index of the earlier occurrence.
        first: usize,
        /// Index of the repetition.
        position: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_converts() {
        let err: Error = InvalidInput::Empty.into();
        assert_eq!(err, Error::InvalidInput(InvalidInput::Empty));
        assert_eq!(err.to_string(), "invalid input: input must not be empty");
    }

    #[test]
    fn test_messages_name_the_character() {
        let err = InvalidInput::NotALetter {
            letter: '1',
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "only letters are allowed, found '1' at position 1"
        );

        let err = InvalidInput::DuplicateLetter {
            letter: 'a',
            first: 0,
            position: 1,
        };
        assert!(err.to_string().contains("'a'"));
        assert!(err.to_string().contains("repeats position 0"));
    }
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Invalid question {index}: {reason}")]
    InvalidQuestion {
        index: usize,
        #[source]
        reason: QuestionError,
    },

    #[error("Invalid display name '{0}': use 3-20 letters, digits, '_' or '-'")]
    InvalidDisplayName(String),

    #[error("Invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

/// Why a single question could not be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("no choices")]
    NoChoices,

    #[error("duplicate choice '{0}'")]
    DuplicateChoice(String),

    #[error("correct city '{0}' is not among the choices")]
    CorrectCityMissing(String),
}

impl DomainError {
    /// Check if this error is a recoverable input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::InvalidDisplayName(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_name_display() {
        let error = DomainError::InvalidDisplayName("ab".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid display name 'ab': use 3-20 letters, digits, '_' or '-'"
        );
    }

    #[test]
    fn test_invalid_question_display() {
        let error = DomainError::InvalidQuestion {
            index: 2,
            reason: QuestionError::CorrectCityMissing("Lima".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "Invalid question 2: correct city 'Lima' is not among the choices"
        );
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::InvalidDisplayName("x".to_string()).is_validation());
        assert!(!DomainError::EmptyQuestionSet.is_validation());
        assert!(
            !DomainError::InvalidQuestion {
                index: 0,
                reason: QuestionError::DuplicateChoice("Paris".to_string())
            }
            .is_validation()
        );
    }
}

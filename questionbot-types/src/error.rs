/// Error type for answering questions.
///
/// Every variant is recoverable: front ends report it to the user and ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// More than one choice was submitted for a question that takes only one.
    #[error("too many choices")]
    TooManyChoices,

    /// The choice is out of range, or the prefix token does not decode.
    #[error("invalid choice")]
    InvalidChoice,

    /// An answer was submitted while the cursor is not on a question.
    #[error("no question selected")]
    NoQuestionSelected,

    /// Selections other than exactly one choice per call are not supported yet,
    /// even on multiple-choice questions.
    #[error("selecting {count} choices at once is not supported")]
    UnsupportedSelection { count: usize },
}

impl AnswerError {
    /// Check if this error came from user input rather than session state.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::NoQuestionSelected)
    }
}

use questionbot_types::Questionnaire;

use crate::Transcript;

/// Error type for running a questionnaire through a frontend.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// User quit before the last question (Ctrl+C, `/quit`, closed chat, etc.)
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// Frontend-specific failure (I/O, terminal trouble, etc.)
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl SessionError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Trait for frontends that walk a user through a questionnaire.
///
/// A frontend decides how questions and choice labels are presented and
/// where input comes from. Answers are recorded on the questionnaire itself;
/// free-text replies to open questions come back in the `Transcript`.
pub trait QuestionnaireFrontend {
    /// The error type for this frontend. Converting it must map user
    /// cancellation onto `SessionError::Cancelled`.
    type Error: Into<SessionError>;

    /// Run the questionnaire from its first question until the user passes
    /// the last one.
    ///
    /// # Returns
    /// * `Ok(transcript)` once the cursor is past the end
    /// * `Err` on cancellation or frontend failure
    fn run(&self, questionnaire: &mut Questionnaire) -> Result<Transcript, Self::Error>;
}

/// Run `questionnaire` through `frontend`.
pub fn run<F>(questionnaire: &mut Questionnaire, frontend: F) -> Result<Transcript, SessionError>
where
    F: QuestionnaireFrontend,
{
    frontend.run(questionnaire).map_err(Into::into)
}

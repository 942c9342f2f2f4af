//! Scripted frontend for running questionnaires without user interaction.
//!
//! `ScriptedFrontend` replays a fixed list of input lines through a
//! `Session`, exactly as if a user had typed them. This is useful for
//! testing questionnaire definitions and frontend-independent behaviour.
//!
//! # Example
//!
//! ```rust
//! use questionbot::{Question, Questionnaire, ScriptedFrontend};
//!
//! let mut questionnaire = Questionnaire::new(vec![
//!     Question::new("Favourite color?", ["Blue", "Green", "Red"]),
//!     Question::open("Why?"),
//! ]);
//! questionnaire.init();
//!
//! let transcript = questionbot::run(
//!     &mut questionnaire,
//!     ScriptedFrontend::new()
//!         .with_input("c")
//!         .with_input("It matches my bike"),
//! )
//! .unwrap();
//!
//! assert_eq!(questionnaire.questions()[0].answered(), &[2]);
//! assert_eq!(transcript.get(1), Some("It matches my bike"));
//! ```

use questionbot_types::{AnswerError, Questionnaire};

use crate::{QuestionnaireFrontend, Session, SessionError, Step, Transcript};

/// A frontend that feeds pre-recorded input lines to a questionnaire.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    inputs: Vec<String>,
    tolerate_rejections: bool,
}

/// Error type for ScriptedFrontend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedError {
    #[error("Ran out of input after {consumed} lines, still on question {question}")]
    Exhausted { consumed: usize, question: usize },

    #[error("Input {line} ('{input}') was rejected: {source}")]
    Rejected {
        line: usize,
        input: String,
        #[source]
        source: AnswerError,
    },

    #[error("Input {line} tried to skip required question {question}")]
    Required { line: usize, question: usize },

    #[error("Script quit at input {line}")]
    Cancelled { line: usize },
}

impl From<ScriptedError> for SessionError {
    fn from(err: ScriptedError) -> Self {
        match err {
            ScriptedError::Cancelled { .. } => SessionError::Cancelled,
            other => SessionError::frontend(other),
        }
    }
}

impl ScriptedFrontend {
    /// Create a new frontend with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one input line.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    /// Append several input lines.
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Keep going after a rejected answer or a refused skip, the way a user
    /// would simply try again, instead of failing the run.
    pub fn tolerate_rejections(mut self) -> Self {
        self.tolerate_rejections = true;
        self
    }
}

impl QuestionnaireFrontend for ScriptedFrontend {
    type Error = ScriptedError;

    fn run(&self, questionnaire: &mut Questionnaire) -> Result<Transcript, Self::Error> {
        let mut session = Session::start(questionnaire);
        let mut lines = self.inputs.iter().enumerate();

        while let Some((_, index)) = session.current() {
            let Some((line, input)) = lines.next() else {
                return Err(ScriptedError::Exhausted {
                    consumed: self.inputs.len(),
                    question: index,
                });
            };

            match session.handle(input) {
                Step::Advanced | Step::Retreated => {}
                Step::Quit => return Err(ScriptedError::Cancelled { line }),
                Step::Rejected(_) | Step::Required if self.tolerate_rejections => {}
                Step::Rejected(source) => {
                    return Err(ScriptedError::Rejected {
                        line,
                        input: input.clone(),
                        source,
                    });
                }
                Step::Required => {
                    return Err(ScriptedError::Required {
                        line,
                        question: index,
                    });
                }
            }
        }

        Ok(session.finish())
    }
}

use std::fmt;
use std::str::FromStr;

use crate::AnswerError;

/// How many choices a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerMode {
    /// Pick exactly one of the choices.
    SingleChoice,

    /// Pick any number of the choices.
    MultipleChoice,

    /// No choices; the user replies with free text.
    Open,
}

impl AnswerMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::SingleChoice => "single-choice",
            Self::MultipleChoice => "multiple-choice",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an answer mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown answer mode '{0}' (expected 'single-choice', 'multiple-choice' or 'open')")]
pub struct ParseAnswerModeError(pub String);

impl FromStr for AnswerMode {
    type Err = ParseAnswerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-choice" => Ok(Self::SingleChoice),
            "multiple-choice" => Ok(Self::MultipleChoice),
            "open" => Ok(Self::Open),
            _ => Err(ParseAnswerModeError(s.to_string())),
        }
    }
}

/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The prompt text shown to the user.
    text: String,

    /// The available choices. Empty for open questions.
    choices: Vec<String>,

    /// Explicit answer mode, or `None` until `init` derives one.
    mode: Option<AnswerMode>,

    /// Whether a front end may move past this question unanswered.
    skippable: bool,

    /// Indices into `choices`, in the order they were selected.
    answered: Vec<usize>,
}

impl Question {
    /// Create a new question. The answer mode is derived from the choices
    /// unless set with `with_mode`.
    pub fn new<I, S>(text: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            mode: None,
            skippable: false,
            answered: Vec::new(),
        }
    }

    /// Create an open question with no choices.
    pub fn open(text: impl Into<String>) -> Self {
        Self::new(text, Vec::<String>::new())
    }

    /// Set the answer mode explicitly.
    pub fn with_mode(mut self, mode: AnswerMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Mark the question as skippable.
    pub fn with_skippable(mut self, skippable: bool) -> Self {
        self.skippable = skippable;
        self
    }

    /// Fill in the answer mode if it was not set explicitly.
    ///
    /// Calling this more than once has no further effect.
    pub fn init(&mut self) {
        if self.mode.is_none() {
            self.mode = Some(self.derived_mode());
        }
    }

    fn derived_mode(&self) -> AnswerMode {
        if self.choices.is_empty() {
            AnswerMode::Open
        } else {
            AnswerMode::SingleChoice
        }
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the choices.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Get the answer mode, deriving it if `init` has not run yet.
    pub fn answer_mode(&self) -> AnswerMode {
        self.mode.unwrap_or_else(|| self.derived_mode())
    }

    /// Check if the answer mode was set explicitly or by `init`.
    pub fn has_mode(&self) -> bool {
        self.mode.is_some()
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.answer_mode() == AnswerMode::MultipleChoice
    }

    pub fn is_open(&self) -> bool {
        self.answer_mode() == AnswerMode::Open
    }

    pub fn is_skippable(&self) -> bool {
        self.skippable
    }

    /// Get the selected choice indices. Empty when unanswered.
    pub fn answered(&self) -> &[usize] {
        &self.answered
    }

    /// Get the text of the selected choices.
    pub fn selected_choices(&self) -> impl Iterator<Item = &str> {
        self.answered
            .iter()
            .filter_map(|&index| self.choices.get(index).map(String::as_str))
    }

    /// Record an answer, replacing any previous one.
    ///
    /// Exactly one index is accepted per call, even on multiple-choice
    /// questions; other counts fail with `UnsupportedSelection`.
    pub fn select_answer(&mut self, indices: &[usize]) -> Result<(), AnswerError> {
        if indices.len() > 1 && !self.is_multiple_choice() {
            return Err(AnswerError::TooManyChoices);
        }

        // TODO: define whether repeated selections on multiple-choice
        // questions accumulate or replace, then lift this restriction.
        if indices.len() != 1 {
            return Err(AnswerError::UnsupportedSelection {
                count: indices.len(),
            });
        }

        if indices.iter().any(|&index| index >= self.choices.len()) {
            return Err(AnswerError::InvalidChoice);
        }

        self.answered = indices.to_vec();
        Ok(())
    }

    /// Forget the recorded answer.
    pub fn clear_answer(&mut self) {
        self.answered.clear();
    }

    /// Check if the question has an answer.
    pub fn completed(&self) -> bool {
        !self.answered.is_empty()
    }
}

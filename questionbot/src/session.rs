//! Turning raw user input into questionnaire moves.
//!
//! Frontends read a line, hand it to `Session::handle`, and render whatever
//! `Step` comes back. The rules live here so every frontend behaves the same.

use std::collections::BTreeMap;

use questionbot_types::{AnswerError, Question, Questionnaire};
use tracing::debug;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move to the next question (`/next` or an empty line).
    Next,

    /// Move to the previous question (`/back`).
    Back,

    /// Abandon the questionnaire (`/quit`).
    Quit,

    /// Anything else: a prefix token, or free text for an open question.
    Answer(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" | "/next" => Self::Next,
            "/back" => Self::Back,
            "/quit" => Self::Quit,
            other => Self::Answer(other.to_string()),
        }
    }
}

/// What happened after handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved forward, possibly past the last question.
    Advanced,

    /// The cursor moved back, or stayed on the first question.
    Retreated,

    /// The answer was refused; the cursor did not move.
    Rejected(AnswerError),

    /// The current question needs an answer before moving on.
    Required,

    /// The user asked to stop.
    Quit,
}

/// Free-text replies to open questions, keyed by question index.
///
/// Open answers are kept here rather than on the question: the questionnaire
/// only records choice indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    free_text: BTreeMap<usize, String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: usize, text: impl Into<String>) {
        self.free_text.insert(question, text.into());
    }

    pub fn get(&self, question: usize) -> Option<&str> {
        self.free_text.get(&question).map(String::as_str)
    }

    pub fn contains(&self, question: usize) -> bool {
        self.free_text.contains_key(&question)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.free_text
            .iter()
            .map(|(&question, text)| (question, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.free_text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free_text.is_empty()
    }
}

/// One pass through a questionnaire, driven by raw input lines.
#[derive(Debug)]
pub struct Session<'a> {
    questionnaire: &'a mut Questionnaire,
    transcript: Transcript,
}

impl<'a> Session<'a> {
    /// Rewind the questionnaire and move onto its first question.
    pub fn start(questionnaire: &'a mut Questionnaire) -> Self {
        questionnaire.reset();
        questionnaire.next();
        Self {
            questionnaire,
            transcript: Transcript::new(),
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        self.questionnaire
    }

    /// The question waiting for input, with its index.
    pub fn current(&self) -> Option<(&Question, usize)> {
        self.questionnaire.current()
    }

    /// Check if the cursor has moved past the last question.
    pub fn is_finished(&self) -> bool {
        self.questionnaire.current().is_none()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Apply one line of input.
    pub fn handle(&mut self, input: &str) -> Step {
        let command = Command::parse(input);
        debug!(?command, "handling input");
        match command {
            Command::Quit => Step::Quit,
            Command::Back => {
                if self.questionnaire.back().is_none() {
                    self.questionnaire.next();
                }
                Step::Retreated
            }
            Command::Next => {
                let Some((question, index)) = self.questionnaire.current() else {
                    return Step::Advanced;
                };
                if question.completed() || question.is_skippable() || self.transcript.contains(index)
                {
                    self.questionnaire.next();
                    Step::Advanced
                } else {
                    Step::Required
                }
            }
            Command::Answer(token) => {
                let Some((question, index)) = self.questionnaire.current() else {
                    return Step::Rejected(AnswerError::NoQuestionSelected);
                };
                if question.is_open() {
                    self.transcript.insert(index, token);
                } else if let Err(err) = self.questionnaire.answer(&token) {
                    return Step::Rejected(err);
                }
                self.questionnaire.next();
                Step::Advanced
            }
        }
    }

    /// End the session and hand back the free-text replies.
    pub fn finish(self) -> Transcript {
        self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> Questionnaire {
        let mut questionnaire = Questionnaire::new(vec![
            Question::new("Color?", ["Blue", "Green", "Red"]),
            Question::open("Why?"),
            Question::new("Newsletter?", ["Yes", "No"]).with_skippable(true),
        ]);
        questionnaire.init();
        questionnaire
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(""), Command::Next);
        assert_eq!(Command::parse("  /next "), Command::Next);
        assert_eq!(Command::parse("/back"), Command::Back);
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse(" b "), Command::Answer("b".to_string()));
        assert_eq!(
            Command::parse("because it is calm"),
            Command::Answer("because it is calm".to_string())
        );
    }

    #[test]
    fn start_lands_on_first_question() {
        let mut questionnaire = survey();
        let session = Session::start(&mut questionnaire);
        assert_eq!(session.current().map(|(_, index)| index), Some(0));
    }

    #[test]
    fn answering_advances() {
        let mut questionnaire = survey();
        let mut session = Session::start(&mut questionnaire);
        assert_eq!(session.handle("b"), Step::Advanced);
        assert_eq!(session.current().map(|(_, index)| index), Some(1));
        assert_eq!(session.handle("It is calm"), Step::Advanced);
        assert_eq!(session.handle("a"), Step::Advanced);
        assert!(session.is_finished());

        let transcript = session.finish();
        assert_eq!(transcript.get(1), Some("It is calm"));
        assert!(!questionnaire.completed());
        assert_eq!(questionnaire.questions()[0].answered(), &[1]);
        assert_eq!(questionnaire.questions()[2].answered(), &[0]);
    }

    #[test]
    fn rejected_answer_keeps_position() {
        let mut questionnaire = survey();
        let mut session = Session::start(&mut questionnaire);
        assert_eq!(session.handle("q"), Step::Rejected(AnswerError::InvalidChoice));
        assert_eq!(session.handle("7"), Step::Rejected(AnswerError::InvalidChoice));
        assert_eq!(session.current().map(|(_, index)| index), Some(0));
    }

    #[test]
    fn next_requires_answer_unless_skippable() {
        let mut questionnaire = survey();
        let mut session = Session::start(&mut questionnaire);
        assert_eq!(session.handle("/next"), Step::Required);
        session.handle("a");
        assert_eq!(session.handle(""), Step::Required);
        session.handle("no reason");
        assert_eq!(session.current().map(|(_, index)| index), Some(2));
        assert_eq!(session.handle(""), Step::Advanced);
        assert!(session.is_finished());
    }

    #[test]
    fn back_stays_on_first_question() {
        let mut questionnaire = survey();
        let mut session = Session::start(&mut questionnaire);
        assert_eq!(session.handle("/back"), Step::Retreated);
        assert_eq!(session.current().map(|(_, index)| index), Some(0));
    }

    #[test]
    fn back_then_reanswer_replaces() {
        let mut questionnaire = survey();
        let mut session = Session::start(&mut questionnaire);
        session.handle("a");
        session.handle("/back");
        session.handle("c");
        drop(session);
        assert_eq!(questionnaire.questions()[0].answered(), &[2]);
    }

    #[test]
    fn back_from_finished_returns_to_last() {
        let mut questionnaire = survey();
        let mut session = Session::start(&mut questionnaire);
        session.handle("a");
        session.handle("text");
        session.handle("/next");
        assert!(session.is_finished());
        session.handle("/back");
        assert_eq!(session.current().map(|(_, index)| index), Some(2));
    }

    #[test]
    fn quit() {
        let mut questionnaire = survey();
        let mut session = Session::start(&mut questionnaire);
        assert_eq!(session.handle("/quit"), Step::Quit);
        assert!(!session.is_finished());
    }
}

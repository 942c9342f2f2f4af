use tracing::{debug, trace};

use crate::{AnswerError, PrefixMode, Question};

/// Where a questionnaire's cursor points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Before the first question. The initial position.
    #[default]
    BeforeStart,

    /// On the question at this index.
    At(usize),

    /// After the last question.
    PastEnd,
}

impl Cursor {
    /// The signed position: `-1` before the start, `len` past the end.
    pub fn index(self, len: usize) -> isize {
        match self {
            Self::BeforeStart => -1,
            Self::At(index) => index as isize,
            Self::PastEnd => len as isize,
        }
    }

    /// The index of the addressed question, if any.
    pub fn question_index(self) -> Option<usize> {
        match self {
            Self::At(index) => Some(index),
            Self::BeforeStart | Self::PastEnd => None,
        }
    }
}

/// An ordered set of questions with a navigation cursor.
///
/// The questionnaire owns its questions. Answers go to whichever question the
/// cursor addresses, decoded with the questionnaire's `PrefixMode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    /// Optional name shown when choosing between questionnaires.
    title: Option<String>,

    /// Optional message shown once the last question is passed.
    closing: Option<String>,

    questions: Vec<Question>,

    prefix_mode: PrefixMode,

    cursor: Cursor,
}

impl Questionnaire {
    /// Create a questionnaire over the given questions, in alpha prefix mode.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            title: None,
            closing: None,
            questions,
            prefix_mode: PrefixMode::default(),
            cursor: Cursor::BeforeStart,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the closing message.
    pub fn with_closing(mut self, closing: impl Into<String>) -> Self {
        self.closing = Some(closing.into());
        self
    }

    /// Set the prefix mode.
    pub fn with_prefix_mode(mut self, prefix_mode: PrefixMode) -> Self {
        self.prefix_mode = prefix_mode;
        self
    }

    /// Move the cursor before the start and initialise every question.
    pub fn init(&mut self) {
        self.reset();
        for question in &mut self.questions {
            question.init();
        }
    }

    /// Move the cursor before the start. Answers are kept.
    pub fn reset(&mut self) {
        self.cursor = Cursor::BeforeStart;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn closing(&self) -> Option<&str> {
        self.closing.as_deref()
    }

    pub fn prefix_mode(&self) -> PrefixMode {
        self.prefix_mode
    }

    pub fn set_prefix_mode(&mut self, prefix_mode: PrefixMode) {
        self.prefix_mode = prefix_mode;
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Append a question at the end.
    ///
    /// A cursor past the end keeps its position, which now addresses the
    /// new question.
    pub fn add_question(&mut self, question: Question) {
        if self.cursor == Cursor::PastEnd {
            self.cursor = Cursor::At(self.questions.len());
        }
        self.questions.push(question);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question under the cursor, with its index.
    pub fn current(&self) -> Option<(&Question, usize)> {
        let index = self.cursor.question_index()?;
        self.questions.get(index).map(|question| (question, index))
    }

    /// Advance the cursor and return the question it lands on.
    ///
    /// Returns `None` once the cursor is past the end; further calls keep it there.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(&Question, usize)> {
        let len = self.questions.len();
        self.cursor = match self.cursor {
            Cursor::BeforeStart if len > 0 => Cursor::At(0),
            Cursor::At(index) if index + 1 < len => Cursor::At(index + 1),
            Cursor::BeforeStart | Cursor::At(_) | Cursor::PastEnd => Cursor::PastEnd,
        };
        trace!(position = self.cursor.index(len), "next");
        self.current()
    }

    /// Move the cursor back and return the question it lands on.
    ///
    /// Returns `None` once the cursor is before the start; further calls keep it there.
    pub fn back(&mut self) -> Option<(&Question, usize)> {
        let len = self.questions.len();
        self.cursor = match self.cursor {
            Cursor::PastEnd if len > 0 => Cursor::At(len - 1),
            Cursor::At(index) if index > 0 => Cursor::At(index - 1),
            Cursor::BeforeStart | Cursor::At(_) | Cursor::PastEnd => Cursor::BeforeStart,
        };
        trace!(position = self.cursor.index(len), "back");
        self.current()
    }

    /// Answer the current question with a prefix token such as `"b"` or `"2"`.
    pub fn answer(&mut self, token: &str) -> Result<(), AnswerError> {
        let Some(index) = self.cursor.question_index() else {
            return Err(AnswerError::NoQuestionSelected);
        };
        let choice = self.prefix_mode.prefix_to_index(token)?;
        let question = self
            .questions
            .get_mut(index)
            .ok_or(AnswerError::NoQuestionSelected)?;
        question.select_answer(&[choice])?;
        debug!(question = index, choice, "answer recorded");
        Ok(())
    }

    /// Check if every question has an answer. Skippable questions count too.
    pub fn completed(&self) -> bool {
        self.questions.iter().all(Question::completed)
    }

    /// Render the label for a choice index in this questionnaire's prefix mode.
    ///
    /// # Panics
    ///
    /// Panics in alpha mode for indices past 25.
    pub fn index_to_prefix(&self, index: usize) -> String {
        self.prefix_mode.index_to_prefix(index)
    }

    /// Decode a label in this questionnaire's prefix mode.
    pub fn prefix_to_index(&self, token: &str) -> Result<usize, AnswerError> {
        self.prefix_mode.prefix_to_index(token)
    }

    /// A `"<prefix>. <title>"` line for listing this questionnaire at `index`.
    pub fn choice_label(&self, index: usize) -> String {
        format!(
            "{}. {}",
            self.index_to_prefix(index),
            self.title.as_deref().unwrap_or_default()
        )
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Questionnaire {
        Questionnaire::new(vec![
            Question::open("Question 1"),
            Question::open("Question 2"),
            Question::open("Question 3"),
        ])
    }

    #[test]
    fn starts_before_first_question() {
        let questionnaire = three();
        assert_eq!(questionnaire.cursor(), Cursor::BeforeStart);
        assert_eq!(questionnaire.cursor().index(3), -1);
        assert!(questionnaire.current().is_none());
    }

    #[test]
    fn next_and_back_walk_all_questions() {
        let mut questionnaire = three();

        for expected in 0..3 {
            let (question, index) = questionnaire.next().unwrap();
            assert_eq!(index, expected);
            assert_eq!(question.text(), format!("Question {}", expected + 1));
        }
        assert!(questionnaire.next().is_none());
        assert_eq!(questionnaire.cursor(), Cursor::PastEnd);

        for expected in (0..3).rev() {
            let (question, index) = questionnaire.back().unwrap();
            assert_eq!(index, expected);
            assert_eq!(question.text(), format!("Question {}", expected + 1));
        }
        assert!(questionnaire.back().is_none());
        assert_eq!(questionnaire.cursor(), Cursor::BeforeStart);
    }

    #[test]
    fn next_saturates_past_end() {
        let mut questionnaire = three();
        for _ in 0..3 {
            questionnaire.next();
        }
        for _ in 0..5 {
            assert!(questionnaire.next().is_none());
            assert_eq!(questionnaire.cursor().index(3), 3);
        }
        let (_, index) = questionnaire.back().unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn back_saturates_before_start() {
        let mut questionnaire = three();
        for _ in 0..5 {
            assert!(questionnaire.back().is_none());
        }
        let (_, index) = questionnaire.next().unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn empty_questionnaire() {
        let mut questionnaire = Questionnaire::default();
        assert!(questionnaire.next().is_none());
        assert_eq!(questionnaire.cursor(), Cursor::PastEnd);
        assert_eq!(questionnaire.cursor().index(0), 0);
        assert!(questionnaire.back().is_none());
        assert_eq!(questionnaire.cursor(), Cursor::BeforeStart);
        assert!(questionnaire.completed());
    }

    #[test]
    fn answer_requires_a_question() {
        let mut questionnaire =
            Questionnaire::new(vec![Question::new("Color?", ["Blue", "Green", "Red"])]);
        assert_eq!(
            questionnaire.answer("b"),
            Err(AnswerError::NoQuestionSelected)
        );

        questionnaire.next();
        questionnaire.next();
        assert_eq!(
            questionnaire.answer("b"),
            Err(AnswerError::NoQuestionSelected)
        );
    }

    #[test]
    fn answer_propagates_decode_and_range_errors() {
        let mut questionnaire =
            Questionnaire::new(vec![Question::new("Color?", ["Blue", "Green", "Red"])]);
        questionnaire.next();
        assert_eq!(questionnaire.answer(""), Err(AnswerError::InvalidChoice));
        assert_eq!(questionnaire.answer("12"), Err(AnswerError::InvalidChoice));
        assert_eq!(questionnaire.answer("d"), Err(AnswerError::InvalidChoice));
        assert!(!questionnaire.completed());
    }

    #[test]
    fn numeric_answers() {
        let mut questionnaire =
            Questionnaire::new(vec![Question::new("Color?", ["Blue", "Green", "Red"])])
                .with_prefix_mode(PrefixMode::Numeric);
        questionnaire.next();
        assert_eq!(questionnaire.answer("b"), Err(AnswerError::InvalidChoice));
        assert_eq!(questionnaire.answer("2"), Ok(()));
        assert_eq!(questionnaire.questions()[0].answered(), &[2]);
        assert!(questionnaire.completed());
    }

    #[test]
    fn init_resets_cursor_and_modes() {
        let mut questionnaire = three();
        questionnaire.next();
        questionnaire.init();
        assert_eq!(questionnaire.cursor(), Cursor::BeforeStart);
        assert!(questionnaire.questions().iter().all(Question::has_mode));
    }

    #[test]
    fn question_lookup() {
        let questionnaire = three();
        assert_eq!(
            questionnaire.question(1).map(Question::text),
            Some("Question 2")
        );
        assert!(questionnaire.question(3).is_none());
    }

    #[test]
    fn add_question_appends() {
        let mut questionnaire = three();
        questionnaire.next();
        questionnaire.add_question(Question::open("Question 4"));
        assert_eq!(questionnaire.len(), 4);
        assert_eq!(questionnaire.cursor(), Cursor::At(0));
        assert_eq!(
            questionnaire.question(3).map(Question::text),
            Some("Question 4")
        );
    }

    #[test]
    fn add_question_past_end_lands_cursor_on_it() {
        let mut questionnaire =
            Questionnaire::new(vec![Question::new("Color?", ["Blue", "Red"])]);
        questionnaire.next();
        questionnaire.next();
        assert_eq!(questionnaire.cursor().index(1), 1);

        questionnaire.add_question(Question::new("Shade?", ["Light", "Dark"]));
        assert_eq!(questionnaire.cursor().index(2), 1);
        assert_eq!(questionnaire.current().map(|(_, index)| index), Some(1));
        assert_eq!(questionnaire.answer("b"), Ok(()));
        assert_eq!(questionnaire.questions()[1].answered(), &[1]);
        assert!(questionnaire.next().is_none());
    }

    #[test]
    fn add_question_to_empty_after_next() {
        let mut questionnaire = Questionnaire::default();
        questionnaire.next();
        questionnaire.add_question(Question::open("First"));
        assert_eq!(questionnaire.cursor(), Cursor::At(0));
    }

    #[test]
    fn choice_label() {
        let questionnaire = Questionnaire::default().with_title("Ad");
        assert_eq!(questionnaire.choice_label(0), "a. Ad");
        assert_eq!(
            questionnaire
                .with_prefix_mode(PrefixMode::Numeric)
                .choice_label(3),
            "3. Ad"
        );
    }
}

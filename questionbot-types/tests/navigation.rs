//! Navigation and answering scenarios for questionbot-types

use proptest::prelude::*;
use questionbot_types::{AnswerError, Cursor, PrefixMode, Question, Questionnaire};

fn numbered(count: usize) -> Questionnaire {
    Questionnaire::new(
        (0..count)
            .map(|i| Question::new(format!("Question {}", i + 1), ["Yes", "No"]))
            .collect(),
    )
}

#[test]
fn test_color_scenario() {
    let mut questionnaire = Questionnaire::new(vec![
        Question::new("What is your favourite color?", ["Blue", "Green", "Red"]),
        Question::open("Why?"),
        Question::new("Would you paint your house in it?", ["Yes", "No"]),
    ]);
    questionnaire.init();

    let (question, index) = questionnaire.next().unwrap();
    assert_eq!(index, 0);
    assert_eq!(question.text(), "What is your favourite color?");

    questionnaire.answer("b").unwrap();
    assert_eq!(questionnaire.questions()[0].answered(), &[1]);
    assert_eq!(
        questionnaire.questions()[0]
            .selected_choices()
            .collect::<Vec<_>>(),
        vec!["Green"]
    );
    assert!(!questionnaire.completed());
}

#[test]
fn test_answer_before_next() {
    let mut questionnaire = numbered(3);
    assert_eq!(
        questionnaire.answer("a"),
        Err(AnswerError::NoQuestionSelected)
    );
}

#[test]
fn test_back_from_first_question_reaches_before_start() {
    let mut questionnaire = numbered(3);
    questionnaire.next();
    assert!(questionnaire.back().is_none());
    assert_eq!(questionnaire.cursor(), Cursor::BeforeStart);
}

#[test]
fn test_reanswer_after_navigation() {
    let mut questionnaire = numbered(2);
    questionnaire.next();
    questionnaire.answer("a").unwrap();
    questionnaire.next();
    questionnaire.back();
    questionnaire.answer("B").unwrap();
    assert_eq!(questionnaire.questions()[0].answered(), &[1]);
}

#[test]
fn test_completed_ignores_skippable() {
    let mut questionnaire = Questionnaire::new(vec![
        Question::new("Required?", ["Yes", "No"]),
        Question::new("Optional?", ["Yes", "No"]).with_skippable(true),
    ]);
    questionnaire.next();
    questionnaire.answer("a").unwrap();
    assert!(!questionnaire.completed());

    questionnaire.next();
    questionnaire.answer("b").unwrap();
    assert!(questionnaire.completed());
}

#[test]
fn test_numeric_mode_answers() {
    let mut questionnaire = numbered(1).with_prefix_mode(PrefixMode::Numeric);
    questionnaire.next();
    assert_eq!(questionnaire.answer("-1"), Err(AnswerError::InvalidChoice));
    assert_eq!(questionnaire.answer("2"), Err(AnswerError::InvalidChoice));
    questionnaire.answer("1").unwrap();
    assert!(questionnaire.completed());
}

proptest! {
    #[test]
    fn next_visits_every_question_in_order(count in 0usize..20, extra in 1usize..5) {
        let mut questionnaire = numbered(count);
        for expected in 0..count {
            let (question, index) = questionnaire.next().unwrap();
            prop_assert_eq!(index, expected);
            prop_assert_eq!(question.text(), format!("Question {}", expected + 1));
        }
        for _ in 0..extra {
            prop_assert!(questionnaire.next().is_none());
            prop_assert_eq!(questionnaire.cursor(), Cursor::PastEnd);
        }
    }

    #[test]
    fn back_from_past_end_lands_on_last(count in 1usize..20, extra in 0usize..5) {
        let mut questionnaire = numbered(count);
        for _ in 0..count + extra + 1 {
            questionnaire.next();
        }
        let (_, index) = questionnaire.back().unwrap();
        prop_assert_eq!(index, count - 1);
    }

    #[test]
    fn cursor_stays_in_bounds(count in 0usize..8, moves in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut questionnaire = numbered(count);
        for forward in moves {
            let landed = if forward {
                questionnaire.next().map(|(_, index)| index)
            } else {
                questionnaire.back().map(|(_, index)| index)
            };
            let position = questionnaire.cursor().index(count);
            prop_assert!((-1..=count as isize).contains(&position));
            prop_assert_eq!(landed, questionnaire.cursor().question_index());
        }
    }
}

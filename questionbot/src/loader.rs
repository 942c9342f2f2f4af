//! TOML loading for questionnaire definitions.

use std::path::PathBuf;

use questionbot_types::{AnswerMode, PrefixMode, Question, Questionnaire};
use serde::Deserialize;
use tracing::{debug, info};

/// Error type for loading questionnaire definitions.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The definition file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid TOML, or does not have the expected shape.
    #[error("Invalid questionnaire definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Questionnaire {questionnaire}: {source}")]
    UnknownPrefixMode {
        questionnaire: usize,
        #[source]
        source: questionbot_types::ParsePrefixModeError,
    },

    #[error("Questionnaire {questionnaire}, question {question}: {source}")]
    UnknownAnswerMode {
        questionnaire: usize,
        question: usize,
        #[source]
        source: questionbot_types::ParseAnswerModeError,
    },

    /// A question has more choices than the prefix mode has labels for.
    #[error(
        "Questionnaire {questionnaire}, question {question}: {choices} choices cannot be labelled in {prefix_mode} mode"
    )]
    TooManyChoicesForPrefix {
        questionnaire: usize,
        question: usize,
        choices: usize,
        prefix_mode: PrefixMode,
    },

    /// More questionnaires than the prefix mode has labels for.
    #[error("{count} questionnaires cannot be labelled in {prefix_mode} mode")]
    TooManyQuestionnaires {
        count: usize,
        prefix_mode: PrefixMode,
    },
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    questionnaire: Vec<QuestionnaireRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionnaireRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    closing: Option<String>,
    #[serde(default, alias = "prefixtype", alias = "PrefixType")]
    prefix_type: Option<String>,
    #[serde(default)]
    question: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    text: String,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    skippable: bool,
}

/// Parse every `[[questionnaire]]` table in a TOML document.
///
/// Returned questionnaires are initialised: answer modes are filled in and
/// cursors sit before the first question.
pub fn load_questionnaires(data: &str) -> Result<Vec<Questionnaire>, LoadError> {
    let document: Document = toml::from_str(data)?;

    let questionnaires = document
        .questionnaire
        .into_iter()
        .enumerate()
        .map(|(index, record)| build_questionnaire(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = questionnaires.len(), "loaded questionnaires");
    Ok(questionnaires)
}

fn build_questionnaire(
    index: usize,
    record: QuestionnaireRecord,
) -> Result<Questionnaire, LoadError> {
    let prefix_mode = match record.prefix_type.as_deref() {
        Some(name) => name
            .parse::<PrefixMode>()
            .map_err(|source| LoadError::UnknownPrefixMode {
                questionnaire: index,
                source,
            })?,
        None => PrefixMode::default(),
    };

    let questions = record
        .question
        .into_iter()
        .enumerate()
        .map(|(question_index, question)| build_question(index, question_index, question))
        .collect::<Result<Vec<_>, _>>()?;

    let mut questionnaire = Questionnaire::new(questions).with_prefix_mode(prefix_mode);
    if let Some(title) = record.title {
        questionnaire = questionnaire.with_title(title);
    }
    if let Some(closing) = record.closing {
        questionnaire = questionnaire.with_closing(closing);
    }
    questionnaire.init();
    check_prefix_capacity(index, &questionnaire)?;

    debug!(
        questionnaire = index,
        title = questionnaire.title().unwrap_or_default(),
        questions = questionnaire.len(),
        %prefix_mode,
        "built questionnaire"
    );
    Ok(questionnaire)
}

fn build_question(
    questionnaire: usize,
    index: usize,
    record: QuestionRecord,
) -> Result<Question, LoadError> {
    let mut question = Question::new(record.text, record.choices).with_skippable(record.skippable);
    if let Some(kind) = record.kind.as_deref() {
        let mode = kind
            .parse::<AnswerMode>()
            .map_err(|source| LoadError::UnknownAnswerMode {
                questionnaire,
                question: index,
                source,
            })?;
        question = question.with_mode(mode);
    }
    Ok(question)
}

/// Reject questionnaires whose choices cannot all be labelled in their prefix mode.
pub(crate) fn check_prefix_capacity(
    index: usize,
    questionnaire: &Questionnaire,
) -> Result<(), LoadError> {
    let prefix_mode = questionnaire.prefix_mode();
    match questionnaire
        .questions()
        .iter()
        .position(|question| !prefix_mode.can_label(question.choices().len()))
    {
        Some(question) => Err(LoadError::TooManyChoicesForPrefix {
            questionnaire: index,
            question,
            choices: questionnaire.questions()[question].choices().len(),
            prefix_mode,
        }),
        None => Ok(()),
    }
}

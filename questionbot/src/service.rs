//! A set of questionnaires loaded from disk, sharing one prefix mode.

use std::path::PathBuf;

use questionbot_types::{AnswerError, PrefixMode, Questionnaire};
use tracing::{debug, info};

use crate::loader::{LoadError, check_prefix_capacity, load_questionnaires};

/// Configuration for a `Service`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Prefix mode applied to every questionnaire. Alpha when unset.
    pub prefix_mode: Option<PrefixMode>,

    /// Path to the TOML questionnaire definitions.
    pub data_path: PathBuf,
}

impl Config {
    /// Create a configuration reading definitions from `data_path`.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            prefix_mode: None,
            data_path: data_path.into(),
        }
    }

    /// Set the prefix mode.
    pub fn with_prefix_mode(mut self, prefix_mode: PrefixMode) -> Self {
        self.prefix_mode = Some(prefix_mode);
        self
    }
}

/// Error type for choosing a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid questionnaire choice: {0}")]
    InvalidChoice(#[from] AnswerError),

    #[error("No questionnaire at position {index} (have {available})")]
    NoSuchQuestionnaire { index: usize, available: usize },
}

/// The questionnaires available to a bot, all labelled in one prefix mode.
#[derive(Debug, Clone)]
pub struct Service {
    prefix_mode: PrefixMode,
    questionnaires: Vec<Questionnaire>,
}

impl Service {
    /// Read and load the definitions named by `config`.
    pub fn new(config: Config) -> Result<Self, LoadError> {
        let data = std::fs::read_to_string(&config.data_path).map_err(|source| LoadError::Read {
            path: config.data_path.clone(),
            source,
        })?;
        let questionnaires = load_questionnaires(&data)?;
        let service = Self::from_questionnaires(
            config.prefix_mode.unwrap_or_default(),
            questionnaires,
        )?;
        info!(
            path = %config.data_path.display(),
            questionnaires = service.len(),
            prefix_mode = %service.prefix_mode,
            "service ready"
        );
        Ok(service)
    }

    /// Build a service from questionnaires that are already loaded.
    ///
    /// Every questionnaire is switched to `prefix_mode`, overriding its own.
    pub fn from_questionnaires(
        prefix_mode: PrefixMode,
        mut questionnaires: Vec<Questionnaire>,
    ) -> Result<Self, LoadError> {
        for (index, questionnaire) in questionnaires.iter_mut().enumerate() {
            questionnaire.set_prefix_mode(prefix_mode);
            check_prefix_capacity(index, questionnaire)?;
        }
        if !prefix_mode.can_label(questionnaires.len()) {
            return Err(LoadError::TooManyQuestionnaires {
                count: questionnaires.len(),
                prefix_mode,
            });
        }
        Ok(Self {
            prefix_mode,
            questionnaires,
        })
    }

    pub fn prefix_mode(&self) -> PrefixMode {
        self.prefix_mode
    }

    pub fn questionnaires(&self) -> &[Questionnaire] {
        &self.questionnaires
    }

    pub fn len(&self) -> usize {
        self.questionnaires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questionnaires.is_empty()
    }

    /// One `"<prefix>. <title>"` line per questionnaire.
    pub fn available_questionnaires(&self) -> String {
        self.questionnaires
            .iter()
            .enumerate()
            .map(|(index, questionnaire)| format!("{}\n", questionnaire.choice_label(index)))
            .collect()
    }

    /// Pick a questionnaire by its prefix label.
    ///
    /// The returned questionnaire is an independent copy with its cursor
    /// before the first question, so sessions never share state.
    pub fn select(&self, token: &str) -> Result<Questionnaire, ServiceError> {
        let index = self.prefix_mode.prefix_to_index(token)?;
        let mut questionnaire = self
            .questionnaires
            .get(index)
            .cloned()
            .ok_or(ServiceError::NoSuchQuestionnaire {
                index,
                available: self.questionnaires.len(),
            })?;
        questionnaire.reset();
        debug!(token, index, "questionnaire selected");
        Ok(questionnaire)
    }
}

//! Dialoguer implementation of the QuestionnaireFrontend trait.

use dialoguer::{Input, theme::ColorfulTheme};
use questionbot::{
    AnswerMode, Question, Questionnaire, QuestionnaireFrontend, Service, Session, SessionError,
    Step, Transcript,
};
use thiserror::Error;
use tracing::{debug, warn};

const HELP: &str = "Type a label to answer, or /back, /next, /quit.";

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the questionnaire (e.g., pressed Ctrl+C or typed /quit).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for SessionError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SessionError::Cancelled,
            other => SessionError::frontend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer frontend for interactive terminal questionnaires.
#[derive(Debug, Default, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn read_line(&self, prompt: &str) -> Result<String, DialoguerError> {
        let result = if self.colorful {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        } else {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        };

        match result {
            Ok(line) => Ok(line),
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    /// List the service's questionnaires and ask for one by label.
    pub fn choose(&self, service: &Service) -> Result<Questionnaire, DialoguerError> {
        println!("Available questionnaires:");
        print!("{}", service.available_questionnaires());

        loop {
            let token = self.read_line("Questionnaire")?;
            if token.trim() == "/quit" {
                return Err(DialoguerError::Cancelled);
            }
            match service.select(token.trim()) {
                Ok(questionnaire) => return Ok(questionnaire),
                Err(err) => {
                    debug!(%err, "questionnaire selection refused");
                    println!("Error: {err}");
                }
            }
        }
    }
}

impl QuestionnaireFrontend for DialoguerFrontend {
    type Error = DialoguerError;

    fn run(&self, questionnaire: &mut Questionnaire) -> Result<Transcript, Self::Error> {
        if let Some(title) = questionnaire.title() {
            println!("{title}");
        }
        println!("{HELP}");
        println!();

        let mut session = Session::start(questionnaire);

        while let Some((question, index)) = session.current() {
            let rendered = render_question(session.questionnaire(), question, index);
            let prompt = prompt_for(question);
            println!("{rendered}");

            let input = self.read_line(prompt)?;
            match session.handle(&input) {
                Step::Advanced | Step::Retreated => println!(),
                Step::Rejected(err) => {
                    if err.is_input_error() {
                        debug!(question = index, input = %input, %err, "answer rejected");
                    } else {
                        warn!(question = index, input = %input, %err, "answer rejected");
                    }
                    println!("Error: {err}");
                }
                Step::Required => println!("Error: this question needs an answer"),
                Step::Quit => return Err(DialoguerError::Cancelled),
            }
        }

        let transcript = session.finish();

        // Show closing if present
        if let Some(closing) = questionnaire.closing() {
            println!("{closing}");
        }

        Ok(transcript)
    }
}

fn prompt_for(question: &Question) -> &'static str {
    match question.answer_mode() {
        AnswerMode::Open => "Your reply",
        AnswerMode::SingleChoice | AnswerMode::MultipleChoice => "Your choice",
    }
}

/// Render a question with its position and labelled choices.
pub fn render_question(questionnaire: &Questionnaire, question: &Question, index: usize) -> String {
    let mut out = format!(
        "Question {} of {}: {}",
        index + 1,
        questionnaire.len(),
        question.text()
    );
    if question.is_skippable() {
        out.push_str(" (optional)");
    }
    for (choice_index, choice) in question.choices().iter().enumerate() {
        out.push_str(&format!(
            "\n  {}. {}",
            questionnaire.index_to_prefix(choice_index),
            choice
        ));
    }
    out
}

/// Render one line per question with the recorded answer.
pub fn render_summary(questionnaire: &Questionnaire, transcript: &Transcript) -> String {
    questionnaire
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answer = if let Some(text) = transcript.get(index) {
                text.to_string()
            } else if question.completed() {
                question.selected_choices().collect::<Vec<_>>().join(", ")
            } else {
                "(skipped)".to_string()
            };
            format!("{} {}\n", question.text(), answer)
        })
        .collect()
}

//! # questionbot
//!
//! Interactive questionnaires with prefix-labelled choices. Frontend-agnostic.
//!
//! Questionnaires are loaded from TOML, walked question by question, and
//! answered with short prefix tokens (`a`, `b`, ... or `0`, `1`, ...).
//!
//! ## Usage
//!
//! ```rust
//! use questionbot::{ScriptedFrontend, load_questionnaires};
//!
//! let mut questionnaires = load_questionnaires(
//!     r#"
//!     [[questionnaire]]
//!     title = "Colors"
//!       [[questionnaire.question]]
//!       text = "Favourite color?"
//!       choices = ["Blue", "Green", "Red"]
//!     "#,
//! )
//! .unwrap();
//!
//! let colors = &mut questionnaires[0];
//! questionbot::run(colors, ScriptedFrontend::new().with_input("b")).unwrap();
//! assert_eq!(colors.questions()[0].answered(), &[1]);
//! assert!(colors.completed());
//! ```
//!
//! ## Definition format
//!
//! ```toml
//! [[questionnaire]]
//! title = "Ad"
//! closing = "Thanks, we will be in touch."
//! prefix_type = "alpha"          # or "numeric"; defaults to alpha
//!   [[questionnaire.question]]
//!   text = "What is the purpose of the ad?"
//!   choices = ["Awareness", "Direct Action"]
//!   type = "single-choice"       # "multiple-choice", "open"; derived when absent
//!   skippable = false
//! ```
//!
//! ## Frontends
//!
//! Frontends implement `QuestionnaireFrontend`:
//! - `ScriptedFrontend` - Replays canned input, for tests
//! - `questionbot-dialoguer` - Interactive terminal prompts via dialoguer

// Re-export all types from questionbot-types
pub use questionbot_types::*;

mod loader;
pub use loader::{LoadError, load_questionnaires};

mod service;
pub use service::{Config, Service, ServiceError};

mod session;
pub use session::{Command, Session, Step, Transcript};

mod frontend;
pub use frontend::{QuestionnaireFrontend, SessionError, run};

// Scripted frontend for driving questionnaires without user interaction
mod scripted;
pub use scripted::{ScriptedError, ScriptedFrontend};

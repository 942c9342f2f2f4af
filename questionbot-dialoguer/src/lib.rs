//! # questionbot-dialoguer
//!
//! Dialoguer frontend for questionbot.
//!
//! This crate walks a user through a questionnaire in the terminal using the
//! `dialoguer` library. Each question is printed with its choice labels, and
//! the user types a label (`b`, `2`, ...), free text for open questions, or
//! one of `/back`, `/next` and `/quit`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionbot::{Config, Service};
//! use questionbot_dialoguer::DialoguerFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let service = Service::new(Config::new("questionnaires.toml"))?;
//!     let frontend = DialoguerFrontend::new();
//!     let mut questionnaire = frontend.choose(&service)?;
//!     let transcript = questionbot::run(&mut questionnaire, frontend)?;
//!     println!("{}", questionbot_dialoguer::render_summary(&questionnaire, &transcript));
//!     Ok(())
//! }
//! ```

mod frontend;

pub use frontend::{DialoguerError, DialoguerFrontend, render_question, render_summary};

//! Core types for questionbot.
//!
//! This crate provides the in-memory model of a questionnaire session:
//! - `Question` and `AnswerMode` - A single question and its answer rule
//! - `Questionnaire` and `Cursor` - An ordered set of questions with navigation
//! - `PrefixMode` - The label scheme mapping user tokens to choice indices
//! - `AnswerError` - Recoverable answer and navigation failures
//!
//! Nothing here performs I/O. Loading definitions and talking to users is the
//! job of the `questionbot` facade and its front ends.

mod error;
pub use error::AnswerError;

mod prefix;
pub use prefix::{ParsePrefixModeError, PrefixMode};

mod question;
pub use question::{AnswerMode, ParseAnswerModeError, Question};

mod questionnaire;
pub use questionnaire::{Cursor, Questionnaire};

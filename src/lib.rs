//! prompt-studio - turns a short idea into a structured image-generation prompt
//!
//! One Gemini call expands the idea into four Indonesian prompt fields, four
//! parallel calls translate them to English, and a pure assembly step produces
//! the final `{prompt, negative_prompt}` JSON document.

pub mod ai;
pub mod assemble;
pub mod clipboard;
pub mod error;
pub mod models;
pub mod prompts;
pub mod session;
pub mod ui;

pub use error::{Error, Result};

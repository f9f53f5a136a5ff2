pub mod commands;
pub mod prompt;

pub use commands::Cli;
pub use prompt::{prompt_recipient, validate_recipient};

//! Greeting line assembly.
//!
//! The output contract is a single space-separated line:
//! `Hello <subject> <mode>`. Callers append the line terminator.

use crate::build_mode::BUILD_MODE;
use crate::message::message;
use crate::platform::PLATFORM;

/// Literal prefix every greeting line starts with.
pub const GREETING_PREFIX: &str = "Hello";

/// Assemble a greeting line for an arbitrary subject.
///
/// Single spaces between fields, no trailing whitespace, no newline.
pub fn greeting_line(subject: &str) -> String {
    format!("{} {} {}", GREETING_PREFIX, subject, BUILD_MODE)
}

/// Greeting line for the compiled-in platform tag.
pub fn platform_line() -> String {
    greeting_line(PLATFORM)
}

/// Greeting line for the message collaborator (the `greet_world` form).
pub fn message_line() -> String {
    greeting_line(message())
}

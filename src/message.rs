//! Message collaborator for the message-variant greeter.

/// Fixed text substituted in place of the platform tag by `greet_world`.
pub fn message() -> &'static str {
    "World"
}

#[cfg(test)]
mod tests {
    use super::message;

    #[test]
    fn message_is_the_fixed_world_text() {
        assert_eq!(message(), "World");
    }
}

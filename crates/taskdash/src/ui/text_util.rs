const MASK_DOT: char = '\u{2022}'; // •
const CURSOR: char = '\u{2588}'; // █

/// Replaces every character of a secret with a mask dot.
pub fn mask_secret(secret: &str) -> String {
    secret.chars().map(|_| MASK_DOT).collect()
}

/// Appends a block cursor to the input currently receiving keystrokes.
pub fn with_cursor(input: &str) -> String {
    format!("{input}{CURSOR}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret_hides_every_character() {
        // Arrange & Act
        let masked = mask_secret("password123");

        // Assert
        assert_eq!(masked, "•••••••••••");
        assert_eq!(masked.chars().count(), "password123".chars().count());
    }

    #[test]
    fn test_mask_secret_of_empty_input_is_empty() {
        // Arrange & Act & Assert
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn test_with_cursor_appends_the_block_cursor() {
        // Arrange & Act & Assert
        assert_eq!(with_cursor("abc"), "abc█");
        assert_eq!(with_cursor(""), "█");
    }
}

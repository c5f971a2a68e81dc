//! Email format validation.

/// Minimal structural email check.
///
/// Accepts any string that is at least three characters long, contains
/// exactly one `@` that is neither the first nor the last character, and
/// has at least one `.` after the `@` that is not the final character.
/// Deliberately permissive; this is not an RFC 5322 validator.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 {
        return false;
    }

    let Some(at) = email.find('@') else {
        return false;
    };

    let domain = &email[at + 1..];
    if at == 0 || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i != domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_rejects_expected_shapes() {
        let cases = [
            ("user@example.com", true),
            ("user@mail.example.com", true),
            ("userexample.com", false),
            ("user@", false),
            ("@example.com", false),
            ("user@example", false),
            ("a@", false),
            ("", false),
        ];

        for (email, expected) in cases {
            assert_eq!(is_valid_email(email), expected, "email: {email:?}");
        }
    }

    #[test]
    fn only_the_final_dot_is_disqualifying() {
        // a lone trailing dot fails, but an earlier dot still qualifies
        assert!(!is_valid_email("user@example."));
        assert!(is_valid_email("user@example.com."));
    }

    #[test]
    fn rejects_multiple_at_signs() {
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(is_valid_email("a@b.co"));
    }
}

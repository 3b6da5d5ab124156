//! Input validation utilities

use crate::constants;

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// Validate a user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate a role chosen at signup. Admin accounts cannot self-register.
pub fn validate_signup_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::SELF_SERVICE.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role. Must be either student or organizer")
    }
}

/// Validate an event category
pub fn validate_category(category: &str) -> Result<(), &'static str> {
    if constants::categories::ALL.contains(&category) {
        Ok(())
    } else {
        Err("Invalid event category")
    }
}

/// Validate a persisted event status. Derived values such as "live" are
/// rejected here; they are never written to the store.
pub fn validate_status(status: &str) -> Result<(), &'static str> {
    if constants::statuses::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid event status")
    }
}

/// Validate a link field (registration link, poster reference)
pub fn validate_link(link: &str) -> Result<(), &'static str> {
    if link.starts_with("http://") || link.starts_with("https://") {
        Ok(())
    } else {
        Err("Link must be an http(s) URL")
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize an event title
pub fn validate_event_title(title: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return Err("Event title cannot be empty");
    }
    if sanitized.len() > 256 {
        return Err("Event title must be at most 256 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough1").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_signup_role() {
        assert!(validate_signup_role("student").is_ok());
        assert!(validate_signup_role("organizer").is_ok());
        assert!(validate_signup_role("admin").is_err());
        assert!(validate_signup_role("superuser").is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Technical").is_ok());
        assert!(validate_category("Sports").is_ok());
        assert!(validate_category("technical").is_err()); // Case sensitive
        assert!(validate_category("Gaming").is_err());
    }

    #[test]
    fn test_validate_status() {
        assert!(validate_status("pending").is_ok());
        assert!(validate_status("approved").is_ok());
        assert!(validate_status("archived").is_ok());
        assert!(validate_status("live").is_err()); // Derived, never persisted
        assert!(validate_status("rejected").is_err());
    }

    #[test]
    fn test_validate_link() {
        assert!(validate_link("https://example.com/register").is_ok());
        assert!(validate_link("http://example.com").is_ok());
        assert!(validate_link("ftp://example.com").is_err());
        assert!(validate_link("example.com").is_err());
    }

    #[test]
    fn test_validate_event_title() {
        assert_eq!(validate_event_title("  Tech Fest\u{7}  ").unwrap(), "Tech Fest");
        assert!(validate_event_title("   ").is_err());
        assert!(validate_event_title(&"x".repeat(300)).is_err());
    }
}

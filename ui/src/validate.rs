//! Client-side form validation.
//!
//! Pure and synchronous, evaluated at submit time. Errors are keyed by field
//! name; typing in a field clears only that field's error, and submission is
//! blocked while any error remains.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_CONTENT_LEN: usize = 10_000;

// Permissive on purpose: the server owns real address verification.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex"));

/// Map from field name to error message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Clear one field's error, leaving the others untouched.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate the login form.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if email.is_empty() {
        errors.set("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.set("email", "Email is invalid");
    }
    if password.is_empty() {
        errors.set("password", "Password is required");
    }
    errors
}

/// Fields of the signup form, borrowed from the component's state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignupFields<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Validate the signup form.
pub fn validate_signup(fields: SignupFields<'_>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if fields.email.is_empty() {
        errors.set("email", "Email is required");
    } else if !is_valid_email(fields.email) {
        errors.set("email", "Email is invalid");
    }
    if fields.first_name.is_empty() {
        errors.set("firstName", "First name is required");
    }
    if fields.last_name.is_empty() {
        errors.set("lastName", "Last name is required");
    }
    if fields.password.is_empty() {
        errors.set("password", "Password is required");
    } else if fields.password.len() < MIN_PASSWORD_LEN {
        errors.set(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
    if fields.confirm_password != fields.password {
        errors.set("confirmPassword", "Passwords do not match");
    }
    errors
}

/// Validate the note editor form.
pub fn validate_note(title: &str, content: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if title.is_empty() {
        errors.set("title", "Title is required");
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.set(
            "title",
            format!("Title must be at most {MAX_TITLE_LEN} characters"),
        );
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        errors.set(
            "content",
            format!("Content must be at most {MAX_CONTENT_LEN} characters"),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_has_no_errors() {
        let errors = validate_login("ada@example.com", "password1");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_login_errors_every_required_field() {
        let errors = validate_login("", "");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.cc"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("spaces in@side.com"));
    }

    #[test]
    fn test_clear_removes_only_that_field() {
        let mut errors = validate_login("", "");
        errors.clear("email");
        assert_eq!(errors.get("email"), None);
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_signup_password_rules() {
        let errors = validate_signup(SignupFields {
            email: "a@b.cc",
            first_name: "Ada",
            last_name: "Stone",
            password: "short",
            confirm_password: "short",
        });
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );

        let errors = validate_signup(SignupFields {
            email: "a@b.cc",
            first_name: "Ada",
            last_name: "Stone",
            password: "password1",
            confirm_password: "password2",
        });
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_signup_empty_fields_all_keyed() {
        let errors = validate_signup(SignupFields::default());
        for field in ["email", "firstName", "lastName", "password"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_note_limits() {
        assert!(validate_note("Groceries", "Eggs").is_empty());
        assert!(validate_note("", "").get("title").is_some());
        assert!(validate_note(&"t".repeat(256), "")
            .get("title")
            .is_some());
        assert!(validate_note("t", &"c".repeat(10_001))
            .get("content")
            .is_some());
        assert!(validate_note(&"t".repeat(255), &"c".repeat(10_000)).is_empty());
    }
}

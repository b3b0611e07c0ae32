//! Field rules for client-side form validation.
//!
//! A field is judged once per pass: the required check first, then the
//! email shape. The outcome is recomputed from the live value on every
//! submit attempt and never stored.

use serde::{Deserialize, Serialize};

/// What kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
}

/// Constraints declared on a field in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldConstraints {
    pub required: bool,
    pub kind: FieldKind,
}

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

/// Inline error text shown under invalid fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub required: String,
    pub invalid_email: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            invalid_email: "Please enter a valid email address".to_string(),
        }
    }
}

impl FieldError {
    pub fn message(self, messages: &Messages) -> &str {
        match self {
            FieldError::Required => &messages.required,
            FieldError::InvalidEmail => &messages.invalid_email,
        }
    }
}

/// Judge one field value against its constraints.
///
/// Required fields fail when the trimmed value is empty. Email fields with a
/// non-empty value fail when the value is not email-shaped.
pub fn check_field(value: &str, constraints: FieldConstraints) -> Result<(), FieldError> {
    if constraints.required && value.trim_matches(is_form_whitespace).is_empty() {
        return Err(FieldError::Required);
    }
    if constraints.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// `local@domain.tld`: one `@`, no whitespace, a non-empty local part, and a
/// domain containing a `.` with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_form_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Whitespace as browsers' `\s` sees it: Unicode `White_Space` without
/// U+0085, plus the byte-order mark U+FEFF.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    /// Failed fields, by position among the validated fields
    pub failures: Vec<(usize, FieldError)>,
    /// Number of fields examined
    pub checked: usize,
}

impl FormReport {
    pub fn record(&mut self, index: usize, outcome: Result<(), FieldError>) {
        self.checked += 1;
        if let Err(error) = outcome {
            self.failures.push((index, error));
        }
    }

    /// True only if no field failed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: FieldConstraints = FieldConstraints {
        required: true,
        kind: FieldKind::Text,
    };
    const EMAIL: FieldConstraints = FieldConstraints {
        required: false,
        kind: FieldKind::Email,
    };
    const REQUIRED_EMAIL: FieldConstraints = FieldConstraints {
        required: true,
        kind: FieldKind::Email,
    };

    #[test]
    fn required_field_rejects_blank_values() {
        assert_eq!(check_field("", REQUIRED), Err(FieldError::Required));
        assert_eq!(check_field("   \t", REQUIRED), Err(FieldError::Required));
        assert_eq!(check_field(" x ", REQUIRED), Ok(()));
        assert_eq!(check_field("\u{feff}\u{a0}", REQUIRED), Err(FieldError::Required));
    }

    #[test]
    fn optional_text_field_always_passes() {
        assert_eq!(check_field("", FieldConstraints::default()), Ok(()));
    }

    #[test]
    fn optional_email_may_be_empty() {
        assert_eq!(check_field("", EMAIL), Ok(()));
        assert_eq!(check_field("nope", EMAIL), Err(FieldError::InvalidEmail));
        assert_eq!(check_field("a@b.org", EMAIL), Ok(()));
    }

    #[test]
    fn required_email_reports_required_first() {
        assert_eq!(check_field("", REQUIRED_EMAIL), Err(FieldError::Required));
        assert_eq!(check_field("x@y", REQUIRED_EMAIL), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("userexample.com"));
    }

    #[test]
    fn email_whitespace_matches_browser_classes() {
        assert!(!is_valid_email("user\u{feff}@example.com"));
        assert!(!is_valid_email("user@example.com\u{a0}"));
        assert!(!is_valid_email("user@exa\u{3000}mple.com"));
        assert!(!is_valid_email("user\t@example.com"));
        // NEL is not `\s` in the browser.
        assert!(is_valid_email("us\u{85}er@example.com"));
    }

    #[test]
    fn messages_match_field_error() {
        let messages = Messages::default();
        assert_eq!(FieldError::Required.message(&messages), "This field is required");
        assert_eq!(
            FieldError::InvalidEmail.message(&messages),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn report_is_valid_only_without_failures() {
        let mut report = FormReport::default();
        report.record(0, Ok(()));
        report.record(1, Ok(()));
        assert!(report.is_valid());
        report.record(2, Err(FieldError::Required));
        assert!(!report.is_valid());
        assert_eq!(report.checked, 3);
        assert_eq!(report.failures, vec![(2, FieldError::Required)]);
    }
}

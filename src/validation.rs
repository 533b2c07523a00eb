//! Contact form checks. Everything here is synchronous; a passing form is only
//! "submitted" by the page glue after a simulated delay.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Message,
}

impl FieldKind {
    /// From an `<input type=..>` value, or `None` for a textarea.
    pub fn from_input_type(ty: Option<&str>) -> Self {
        match ty {
            Some("email") => FieldKind::Email,
            Some(_) => FieldKind::Text,
            None => FieldKind::Message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Must be at least {0} characters")]
    TooShort(usize),
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    /// From the element's `minlength` attribute.
    pub min_len: Option<usize>,
    pub value: String,
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

pub fn is_valid_email(s: &str) -> bool {
    email_re().is_match(s)
}

pub fn validate_field(field: &FormField) -> Result<(), FieldError> {
    let value = field.value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if field.kind == FieldKind::Email && !is_valid_email(&field.value) {
        return Err(FieldError::InvalidEmail);
    }
    if let Some(min) = field.min_len {
        if value.chars().count() < min {
            return Err(FieldError::TooShort(min));
        }
    }
    Ok(())
}

/// Per-field outcome, in form order.
#[derive(Debug)]
pub struct FormReport {
    pub results: Vec<(String, Result<(), FieldError>)>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, r)| r.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.results
            .iter()
            .filter_map(|(name, r)| r.as_ref().err().map(|e| (name.as_str(), e)))
    }
}

/// Every field is checked, even after a failure, so all messages show at once.
pub fn validate_form(fields: &[FormField]) -> FormReport {
    FormReport {
        results: fields.iter().map(|f| (f.name.clone(), validate_field(f))).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, kind: FieldKind, value: &str) -> FormField {
        FormField { name: name.into(), kind, min_len: None, value: value.into() }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn required_wins_over_other_checks() {
        let f = field("email", FieldKind::Email, "   ");
        assert_eq!(validate_field(&f), Err(FieldError::Required));
    }

    #[test]
    fn min_length_counts_trimmed_chars() {
        let mut f = field("message", FieldKind::Message, "  héllo  ");
        f.min_len = Some(6);
        assert_eq!(validate_field(&f), Err(FieldError::TooShort(6)));
        assert_eq!(FieldError::TooShort(6).to_string(), "Must be at least 6 characters");
        f.min_len = Some(5);
        assert_eq!(validate_field(&f), Ok(()));
    }

    #[test]
    fn report_collects_all_errors() {
        let report = validate_form(&[
            field("name", FieldKind::Text, ""),
            field("email", FieldKind::Email, "nope"),
            field("message", FieldKind::Message, "hi there"),
        ]);
        assert!(!report.is_valid());
        let errs: Vec<_> = report.errors().map(|(n, e)| (n.to_string(), e.to_string())).collect();
        assert_eq!(
            errs,
            vec![
                ("name".to_string(), "This field is required".to_string()),
                ("email".to_string(), "Please enter a valid email address".to_string()),
            ]
        );
    }

    #[test]
    fn kind_from_input_type() {
        assert_eq!(FieldKind::from_input_type(Some("email")), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type(Some("text")), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type(None), FieldKind::Message);
    }
}

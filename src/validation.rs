//! Contact form validation
//!
//! Validation never fails with an error: it produces a [`ValidationReport`]
//! naming the fields that did not pass, and the report is applied to the
//! form as per-field invalid markers.

use crate::state::{is_form_whitespace, ContactForm, FieldKind, FormField};

/// Outcome of checking every field of a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    invalid: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Names of the fields that failed, in form order
    pub fn invalid_fields(&self) -> &[String] {
        &self.invalid
    }

    /// Set or clear the invalid marker of every field according to this report
    pub fn apply(&self, form: &mut ContactForm) {
        for field in form.fields_mut() {
            field.invalid = self.invalid.iter().any(|name| *name == field.name);
        }
    }
}

/// A form that passed validation; the only way to build a submission
#[derive(Debug, Clone, Copy)]
pub struct ValidatedForm<'a>(&'a ContactForm);

impl<'a> ValidatedForm<'a> {
    pub fn form(&self) -> &'a ContactForm {
        self.0
    }
}

/// Check a single field: required fields must not be blank, and a filled-in
/// email field must look like an address
pub fn field_is_valid(field: &FormField) -> bool {
    let value = field.trimmed();
    if field.required && value.is_empty() {
        return false;
    }
    if field.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return false;
    }
    true
}

/// Check every field without touching the form
pub fn check(form: &ContactForm) -> ValidationReport {
    let invalid = form
        .fields()
        .into_iter()
        .filter(|field| !field_is_valid(field))
        .map(|field| field.name.clone())
        .collect();
    ValidationReport { invalid }
}

/// Check the form and mark its fields; hands back a [`ValidatedForm`] on success
pub fn validate(form: &mut ContactForm) -> Result<ValidatedForm<'_>, ValidationReport> {
    let report = check(form);
    report.apply(form);

    if report.is_valid() {
        Ok(ValidatedForm(form))
    } else {
        tracing::debug!(fields = ?report.invalid_fields(), "Form failed validation");
        Err(report)
    }
}

/// `local@domain`: no whitespace (in the browser's sense) or `@` in either part, and the domain has a
/// `.` with something on both sides
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || value.chars().any(is_form_whitespace) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Focus left the field: a blank required field is marked, anything else unmarked
pub fn on_blur(field: &mut FormField) {
    field.invalid = field.required && field.trimmed().is_empty();
}

/// The field was edited: once it holds a value again the marker goes away
pub fn on_input(field: &mut FormField) {
    if !field.trimmed().is_empty() {
        field.invalid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.set_text("Kari Nordmann");
        form.email.set_text("kari@example.no");
        form.phone.set_text("+47 555 12 345");
        form.description.set_text("Need a new driveway");
        form
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_simple_address() {
            assert!(is_valid_email("a@b.co"));
            assert!(is_valid_email("post@fanebust-anlegg.no"));
            assert!(is_valid_email("first.last+tag@sub.domain.example"));
        }

        #[test]
        fn test_rejects_missing_at() {
            assert!(!is_valid_email("not-an-email"));
        }

        #[test]
        fn test_rejects_missing_dot_in_domain() {
            assert!(!is_valid_email("a@localhost"));
        }

        #[test]
        fn test_rejects_empty_segments() {
            assert!(!is_valid_email("@b.co"));
            assert!(!is_valid_email("a@.co"));
            assert!(!is_valid_email("a@b."));
            assert!(!is_valid_email("a@"));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!is_valid_email("a b@c.de"));
            assert!(!is_valid_email("a@b@c.de"));
            assert!(!is_valid_email("a@c .de"));
            assert!(!is_valid_email("a\u{feff}b@c.de"));
            assert!(!is_valid_email("a@c\u{a0}.de"));
        }

        #[test]
        fn test_next_line_is_not_whitespace() {
            assert!(is_valid_email("a\u{85}b@c.de"));
        }
    }

    #[test]
    fn test_filled_form_passes() {
        let mut form = filled_form();
        assert!(validate(&mut form).is_ok());
        assert!(!form.has_invalid_fields());
    }

    #[test]
    fn test_empty_form_marks_every_required_field() {
        let mut form = ContactForm::new();
        let report = validate(&mut form).unwrap_err();

        assert_eq!(
            report.invalid_fields(),
            &["name", "email", "phone", "description"]
        );
        assert!(form.name.invalid);
        assert!(form.email.invalid);
        assert!(form.phone.invalid);
        assert!(form.description.invalid);
        assert!(!form.address.invalid);
        assert!(!form.project_type.invalid);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled_form();
        form.name.set_text("   \t");
        let report = validate(&mut form).unwrap_err();
        assert_eq!(report.invalid_fields(), &["name"]);
    }

    #[test]
    fn test_malformed_email_fails() {
        let mut form = filled_form();
        form.email.set_text("not-an-email");
        let report = validate(&mut form).unwrap_err();
        assert_eq!(report.invalid_fields(), &["email"]);
        assert!(form.email.invalid);
    }

    #[test]
    fn test_email_is_trimmed_before_matching() {
        let mut form = filled_form();
        form.email.set_text("  a@b.co  ");
        assert!(validate(&mut form).is_ok());
    }

    #[test]
    fn test_revalidation_clears_fixed_fields() {
        let mut form = ContactForm::new();
        let _ = validate(&mut form);
        assert!(form.name.invalid);

        form.name.set_text("Kari");
        let _ = validate(&mut form);
        assert!(!form.name.invalid);
        assert!(form.email.invalid);
    }

    #[test]
    fn test_check_does_not_touch_markers() {
        let form = ContactForm::new();
        let report = check(&form);
        assert!(!report.is_valid());
        assert!(!form.has_invalid_fields());
    }

    #[test]
    fn test_blur_marks_blank_required_field() {
        let mut form = ContactForm::new();
        on_blur(&mut form.name);
        assert!(form.name.invalid);

        on_blur(&mut form.address);
        assert!(!form.address.invalid);
    }

    #[test]
    fn test_input_clears_marker_once_filled() {
        let mut form = ContactForm::new();
        form.phone.invalid = true;

        form.phone.push_char(' ');
        on_input(&mut form.phone);
        assert!(form.phone.invalid);

        form.phone.push_char('9');
        on_input(&mut form.phone);
        assert!(!form.phone.invalid);
    }
}

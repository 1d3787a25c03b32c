//! Snapshot of a validated contact request

use crate::validation::ValidatedForm;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Immutable copy of the form's values taken when a submit attempt starts.
/// Only [`FormSubmission::from_validated`] builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    name: String,
    email: String,
    phone: String,
    address: String,
    project_type: String,
    description: String,
    site_visit: bool,
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: DateTime<Utc>,
}

impl FormSubmission {
    /// Take the trimmed values of a validated form
    pub fn from_validated(validated: ValidatedForm<'_>, timestamp: DateTime<Utc>) -> Self {
        let form = validated.form();
        Self {
            name: form.name.trimmed().to_string(),
            email: form.email.trimmed().to_string(),
            phone: form.phone.trimmed().to_string(),
            address: form.address.trimmed().to_string(),
            project_type: form.project_type.trimmed().to_string(),
            description: form.description.trimmed().to_string(),
            site_visit: form.site_visit.is_checked(),
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Empty when not given
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Empty when nothing was selected
    pub fn project_type(&self) -> &str {
        &self.project_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn site_visit(&self) -> bool {
        self.site_visit
    }

    /// ISO-8601 timestamp as sent on the wire, e.g. `2026-10-17T09:30:00.000Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Submissions for tests in other modules, built the only legal way
#[cfg(test)]
pub(crate) mod fixtures {
    use super::FormSubmission;
    use crate::state::ContactForm;
    use crate::validation::validate;
    use chrono::{DateTime, Utc};

    /// A complete form: name, email, phone and description filled in
    pub fn complete_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.set_text("Kari Nordmann");
        form.email.set_text("kari@example.no");
        form.phone.set_text("555 12 345");
        form.description.set_text("Need a new driveway");
        form
    }

    /// Submission of [`complete_form`] after `edit`; panics if the edit breaks validation
    pub fn submission_with(
        edit: impl FnOnce(&mut ContactForm),
        timestamp: DateTime<Utc>,
    ) -> FormSubmission {
        let mut form = complete_form();
        edit(&mut form);
        let validated = validate(&mut form).expect("edited form should still validate");
        FormSubmission::from_validated(validated, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactForm;
    use crate::validation::validate;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_takes_trimmed_values() {
        let mut form = ContactForm::new();
        form.name.set_text("  Kari Nordmann ");
        form.email.set_text(" kari@example.no");
        form.phone.set_text("555 12 345 ");
        form.description.set_text("\nDig a trench\n");
        form.project_type.next_choice();
        form.site_visit.toggle();

        let validated = validate(&mut form).unwrap();
        let submission = FormSubmission::from_validated(validated, fixed_time());

        assert_eq!(
            submission,
            FormSubmission {
                name: "Kari Nordmann".into(),
                email: "kari@example.no".into(),
                phone: "555 12 345".into(),
                address: String::new(),
                project_type: "Excavation".into(),
                description: "Dig a trench".into(),
                site_visit: true,
                timestamp: fixed_time(),
            }
        );
    }

    #[test]
    fn test_timestamp_is_iso_8601() {
        let mut form = ContactForm::new();
        form.name.set_text("Kari");
        form.email.set_text("a@b.co");
        form.phone.set_text("1");
        form.description.set_text("x");

        let submission = FormSubmission::from_validated(validate(&mut form).unwrap(), fixed_time());
        assert_eq!(submission.timestamp_iso(), "2026-10-17T09:30:00.000Z");
        assert!(DateTime::parse_from_rfc3339(&submission.timestamp_iso()).is_ok());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut form = ContactForm::new();
        form.name.set_text("Kari");
        form.email.set_text("a@b.co");
        form.phone.set_text("1");
        form.description.set_text("x");

        let submission = FormSubmission::from_validated(validate(&mut form).unwrap(), fixed_time());
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["projectType"], "");
        assert_eq!(json["siteVisit"], false);
        assert_eq!(json["timestamp"], "2026-10-17T09:30:00.000Z");
    }
}

//! Contact form state and focus handling

use super::field::FormField;

/// Project kinds offered by the "Project type" field
pub const PROJECT_TYPES: &[&str] = &[
    "Excavation",
    "Drainage and sewer",
    "Foundation work",
    "Landscaping",
    "Roads and driveways",
    "Other",
];

/// Number of input fields on the contact form
pub const FIELD_COUNT: usize = 7;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The quote / contact request form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub address: FormField,
    pub project_type: FormField,
    pub description: FormField,
    pub site_visit: FormField,
    /// Focused row; `FIELD_COUNT` is the submit button row
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", false).required(),
            email: FormField::email("email", "Email").required(),
            phone: FormField::phone("phone", "Phone").required(),
            address: FormField::text("address", "Address", false),
            project_type: FormField::choice("projectType", "Project type", PROJECT_TYPES),
            description: FormField::text("description", "Describe the job", true).required(),
            site_visit: FormField::flag("siteVisit", "I would like a site visit"),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == FIELD_COUNT
    }

    /// All input fields in display order
    pub fn fields(&self) -> [&FormField; FIELD_COUNT] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.project_type,
            &self.description,
            &self.site_visit,
        ]
    }

    /// All input fields in display order, mutably
    pub fn fields_mut(&mut self) -> [&mut FormField; FIELD_COUNT] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.address,
            &mut self.project_type,
            &mut self.description,
            &mut self.site_visit,
        ]
    }

    /// Field at `index` in form order; `None` for the submit row
    pub fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields_mut().into_iter().nth(index)
    }

    /// Whether any field currently carries an invalid marker
    pub fn has_invalid_fields(&self) -> bool {
        self.fields().iter().any(|f| f.invalid)
    }

    /// Clear every field back to its empty state and focus the first one
    pub fn reset(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_COUNT);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.get_field_mut(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldKind;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.active_field_index, 0);
        assert!(form.fields().iter().all(|f| f.trimmed().is_empty()));
        assert!(!form.site_visit.is_checked());
        assert!(!form.has_invalid_fields());
    }

    #[test]
    fn test_required_fields() {
        let form = ContactForm::new();
        let required: Vec<&str> = form
            .fields()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, vec!["name", "email", "phone", "description"]);
    }

    #[test]
    fn test_email_field_kind() {
        let form = ContactForm::new();
        assert_eq!(form.email.kind, FieldKind::Email);
        assert_eq!(form.phone.kind, FieldKind::Phone);
    }

    #[test]
    fn test_field_count_includes_submit_row() {
        let form = ContactForm::new();
        assert_eq!(form.field_count(), 8);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut form = ContactForm::new();
        form.prev_field();
        assert!(form.is_submit_row_active());
        form.next_field();
        assert_eq!(form.active_field(), 0);
    }

    #[test]
    fn test_submit_row_has_no_field() {
        let mut form = ContactForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, FIELD_COUNT);
        assert!(form.get_active_field_mut().is_none());
        assert!(form.get_field(FIELD_COUNT).is_none());
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = ContactForm::new();
        assert_eq!(form.get_field(0).unwrap().name, "name");
        assert_eq!(form.get_field(1).unwrap().name, "email");
        assert_eq!(form.get_field(2).unwrap().name, "phone");
        assert_eq!(form.get_field(3).unwrap().name, "address");
        assert_eq!(form.get_field(4).unwrap().name, "projectType");
        assert_eq!(form.get_field(5).unwrap().name, "description");
        assert_eq!(form.get_field(6).unwrap().name, "siteVisit");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = ContactForm::new();
        form.name.set_text("Kari");
        form.project_type.next_choice();
        form.site_visit.toggle();
        form.email.invalid = true;
        form.set_active_field(5);

        form.reset();

        assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
        assert!(!form.site_visit.is_checked());
        assert!(!form.has_invalid_fields());
        assert_eq!(form.active_field_index, 0);
    }
}

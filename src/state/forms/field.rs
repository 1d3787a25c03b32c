//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the field's option list, `None` while nothing is chosen
    Choice(Option<usize>),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Whitespace as browsers trim it: Unicode `White_Space` plus the BOM,
/// without NEXT LINE (U+0085)
pub fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// What kind of input a text field expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Plain,
    Email,
    Phone,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub kind: FieldKind,
    pub is_multiline: bool,
    /// Field must hold a non-blank value before the form can be submitted
    pub required: bool,
    /// Set by validation, cleared once the field holds a value again
    pub invalid: bool,
    /// Choices offered by a choice field
    pub options: &'static [&'static str],
}

impl FormField {
    fn new(name: &str, label: &str, value: FieldValue) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value,
            kind: FieldKind::Plain,
            is_multiline: false,
            required: false,
            invalid: false,
            options: &[],
        }
    }

    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            is_multiline,
            ..Self::new(name, label, FieldValue::Text(String::new()))
        }
    }

    /// Create a new email address field
    pub fn email(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::text(name, label, false)
        }
    }

    /// Create a new phone number field
    pub fn phone(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Phone,
            ..Self::text(name, label, false)
        }
    }

    /// Create a new choice field over a fixed option list
    pub fn choice(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            options,
            ..Self::new(name, label, FieldValue::Choice(None))
        }
    }

    /// Create a new checkbox field
    pub fn flag(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldValue::Flag(false))
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Get the text value (the chosen option for choice fields, empty for flags)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(Some(i)) => self.options.get(*i).copied().unwrap_or(""),
            FieldValue::Choice(None) | FieldValue::Flag(_) => "",
        }
    }

    /// Get the text value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.as_text().trim_matches(is_form_whitespace)
    }

    /// Get the checkbox state (false for non-flag fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// Set the text value
    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice(_) => {
                if c == ' ' {
                    self.next_choice();
                }
            }
            FieldValue::Flag(_) => {
                if c == ' ' || c == 'x' {
                    self.toggle();
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(choice) => *choice = None,
            FieldValue::Flag(_) => {}
        }
    }

    /// Toggle a checkbox field
    pub fn toggle(&mut self) {
        if let FieldValue::Flag(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Select the next option, wrapping back to "nothing chosen" after the last one
    pub fn next_choice(&mut self) {
        let count = self.options.len();
        if let FieldValue::Choice(choice) = &mut self.value {
            *choice = match *choice {
                None if count > 0 => Some(0),
                Some(i) if i + 1 < count => Some(i + 1),
                _ => None,
            };
        }
    }

    /// Select the previous option, wrapping from "nothing chosen" to the last one
    pub fn prev_choice(&mut self) {
        let count = self.options.len();
        if let FieldValue::Choice(choice) = &mut self.value {
            *choice = match *choice {
                None => count.checked_sub(1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            };
        }
    }

    /// Clear the field value and its invalid marker
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(choice) => *choice = None,
            FieldValue::Flag(checked) => *checked = false,
        }
        self.invalid = false;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(None) => "(choose with Space / ←→)".to_string(),
            FieldValue::Choice(Some(_)) => format!("‹ {} ›", self.as_text()),
            FieldValue::Flag(true) => "[x] Yes".to_string(),
            FieldValue::Flag(false) => "[ ] No".to_string(),
        }
    }

    /// Label shown above the field, with a marker on required ones
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["Excavation", "Drainage"];

    #[test]
    fn test_text_field_input() {
        let mut field = FormField::text("name", "Name", false);
        field.push_char('A');
        field.push_char('b');
        assert_eq!(field.as_text(), "Ab");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_trimmed_ignores_surrounding_whitespace() {
        let mut field = FormField::text("name", "Name", false);
        field.set_text("  Kari Nordmann \n");
        assert_eq!(field.trimmed(), "Kari Nordmann");
    }

    #[test]
    fn test_trimmed_strips_bom_but_keeps_next_line() {
        let mut field = FormField::text("name", "Name", false);
        field.set_text("\u{feff}Kari\u{a0}");
        assert_eq!(field.trimmed(), "Kari");

        field.set_text("\u{85}Kari");
        assert_eq!(field.trimmed(), "\u{85}Kari");
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        let mut field = FormField::choice("projectType", "Project type", OPTIONS);
        assert_eq!(field.as_text(), "");
        field.next_choice();
        assert_eq!(field.as_text(), "Excavation");
        field.next_choice();
        assert_eq!(field.as_text(), "Drainage");
        field.next_choice();
        assert_eq!(field.as_text(), "");
        field.prev_choice();
        assert_eq!(field.as_text(), "Drainage");
    }

    #[test]
    fn test_space_on_choice_selects_next() {
        let mut field = FormField::choice("projectType", "Project type", OPTIONS);
        field.push_char(' ');
        assert_eq!(field.as_text(), "Excavation");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_flag_toggle() {
        let mut field = FormField::flag("siteVisit", "Site visit");
        assert!(!field.is_checked());
        field.push_char(' ');
        assert!(field.is_checked());
        field.toggle();
        assert!(!field.is_checked());
    }

    #[test]
    fn test_clear_resets_value_and_marker() {
        let mut field = FormField::email("email", "Email").required();
        field.set_text("a@b.co");
        field.invalid = true;
        field.clear();
        assert_eq!(field.as_text(), "");
        assert!(!field.invalid);
        assert!(field.required);
        assert_eq!(field.kind, FieldKind::Email);
    }

    #[test]
    fn test_title_marks_required() {
        assert_eq!(FormField::text("name", "Name", false).required().title(), "Name *");
        assert_eq!(FormField::text("address", "Address", false).title(), "Address");
    }
}

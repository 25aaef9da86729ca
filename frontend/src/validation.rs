use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

/// Whitespace as browsers trim it, which also covers the byte order mark.
fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select an option")]
    NoSelection,
}

/// Checks one value against its field rules. The value is trimmed first.
pub fn validate_value(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim_matches(is_form_whitespace);

    if required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    if kind == FieldKind::Select && value.is_empty() {
        return Err(FieldError::NoSelection);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub error: Option<FieldError>,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self { name, label, kind, required, value: String::new(), error: None }
    }

    pub fn validate(&mut self) -> bool {
        self.error = validate_value(self.kind, self.required, &self.value).err();
        self.error.is_none()
    }

    pub fn error_id(&self) -> String {
        format!("{}-error", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Let the browser POST the form.
    Proceed,
    /// Cancel submission and focus this field.
    Blocked { first_invalid: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormState {
    pub fields: Vec<FormField>,
    pub submitting: bool,
}

impl ContactFormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, submitting: false }
    }

    pub fn blur(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.validate();
        }
    }

    /// Updates the value without touching the error annotation.
    pub fn set_value(&mut self, index: usize, value: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
        }
    }

    /// Stores the new value. A field showing an error has it cleared; it is
    /// not revalidated until the next blur or submit.
    pub fn input(&mut self, index: usize, value: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
            field.error = None;
        }
    }

    /// Validates every field, in order, and decides whether the native
    /// submission may go ahead.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut first_invalid = None;
        for (index, field) in self.fields.iter_mut().enumerate() {
            if !field.validate() && first_invalid.is_none() {
                first_invalid = Some(index);
            }
        }
        match first_invalid {
            Some(first_invalid) => SubmitOutcome::Blocked { first_invalid },
            None => {
                self.submitting = true;
                SubmitOutcome::Proceed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_fields() -> ContactFormState {
        ContactFormState::new(vec![
            FormField::new("name", "Name", FieldKind::Text, true),
            FormField::new("email", "Email", FieldKind::Email, true),
            FormField::new("organization", "Organization", FieldKind::Text, false),
            FormField::new("service", "Service", FieldKind::Select, true),
            FormField::new("message", "Message", FieldKind::TextArea, true),
        ])
    }

    fn fill_valid(state: &mut ContactFormState) {
        state.input(0, "Dana Reyes".into());
        state.input(1, "dana@clinic.org".into());
        state.input(3, "revenue-cycle".into());
        state.input(4, "We'd like a call next week.".into());
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("a@c\u{FEFF}.com"));
        assert_eq!(validate_value(FieldKind::Text, true, "\u{FEFF} \u{FEFF}"), Err(FieldError::Required));
        assert_eq!(validate_value(FieldKind::Email, true, "\u{FEFF}a@b.co\u{FEFF}"), Ok(()));
    }

    #[test]
    fn required_empty_or_blank_fails() {
        assert_eq!(validate_value(FieldKind::Text, true, ""), Err(FieldError::Required));
        assert_eq!(validate_value(FieldKind::Text, true, "   "), Err(FieldError::Required));
        assert_eq!(validate_value(FieldKind::Text, false, ""), Ok(()));
    }

    #[test]
    fn email_is_checked_only_when_present() {
        assert_eq!(validate_value(FieldKind::Email, false, ""), Ok(()));
        assert_eq!(validate_value(FieldKind::Email, false, "nope"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_value(FieldKind::Email, true, " a@b.co "), Ok(()));
    }

    #[test]
    fn select_placeholder_fails_even_when_optional() {
        assert_eq!(validate_value(FieldKind::Select, false, ""), Err(FieldError::NoSelection));
        assert_eq!(validate_value(FieldKind::Select, true, ""), Err(FieldError::Required));
        assert_eq!(validate_value(FieldKind::Select, true, "billing"), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(FieldError::NoSelection.to_string(), "Please select an option");
    }

    #[test]
    fn submit_with_empty_required_field_is_blocked_at_that_field() {
        let mut state = contact_fields();
        fill_valid(&mut state);
        state.input(0, String::new());

        assert_eq!(state.submit(), SubmitOutcome::Blocked { first_invalid: 0 });
        assert_eq!(state.fields[0].error, Some(FieldError::Required));
        assert!(!state.submitting);
    }

    #[test]
    fn submit_reports_first_invalid_in_order_and_marks_all() {
        let mut state = contact_fields();
        state.input(0, "Dana".into());
        state.input(1, "dana@clinic".into());

        assert_eq!(state.submit(), SubmitOutcome::Blocked { first_invalid: 1 });
        assert_eq!(state.fields[1].error, Some(FieldError::InvalidEmail));
        assert_eq!(state.fields[2].error, None);
        assert_eq!(state.fields[3].error, Some(FieldError::Required));
        assert_eq!(state.fields[4].error, Some(FieldError::Required));
    }

    #[test]
    fn valid_submit_proceeds_and_enters_pending_state() {
        let mut state = contact_fields();
        fill_valid(&mut state);
        assert_eq!(state.submit(), SubmitOutcome::Proceed);
        assert!(state.submitting);
        assert!(state.fields.iter().all(|f| f.error.is_none()));
    }

    #[test]
    fn blur_validates_and_input_clears() {
        let mut state = contact_fields();
        state.blur(1);
        assert_eq!(state.fields[1].error, Some(FieldError::Required));

        state.input(1, "x".into());
        assert_eq!(state.fields[1].error, None);

        state.blur(1);
        assert_eq!(state.fields[1].error, Some(FieldError::InvalidEmail));
    }

    #[test]
    fn successful_blur_clears_previous_error() {
        let mut state = contact_fields();
        state.blur(0);
        assert!(state.fields[0].error.is_some());
        state.fields[0].value = "Dana".into();
        state.blur(0);
        assert_eq!(state.fields[0].error, None);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut state = contact_fields();
        let before = state.clone();
        state.blur(42);
        state.input(42, "x".into());
        assert_eq!(state, before);
    }
}

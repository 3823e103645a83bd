use chrono::{DateTime, Local};
use std::fmt;

/// A change of an input element's value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputEvent {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub form_id: String,
    pub fields: Vec<(String, String)>,
    pub submitted_at: DateTime<Local>,
}

impl FormSubmission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for FormSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form_id)?;
        for (name, value) in &self.fields {
            write!(f, " {name}={value:?}")?;
        }
        Ok(())
    }
}

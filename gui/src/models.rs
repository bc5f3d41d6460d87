//! Data models for Employee Desk

use serde::{Deserialize, Serialize};

/// An employee record as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the backend on create; `None` for drafts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
}

impl Employee {
    /// Create an unsaved draft
    pub fn draft(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_id: email_id.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[cfg(test)]
    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::EmailId => &self.email_id,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on name and email.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.first_name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.email_id.to_lowercase().contains(needle)
    }
}

/// One editable field of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    FirstName,
    LastName,
    EmailId,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 3] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::EmailId,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::FirstName => "First Name",
            EmployeeField::LastName => "Last Name",
            EmployeeField::EmailId => "Email",
        }
    }
}

/// Body returned by `DELETE /employees/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draft_serializes_without_id() {
        let draft = Employee::draft("Ann", "Lee", "ann@x.com");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Ann",
                "lastName": "Lee",
                "emailId": "ann@x.com"
            })
        );
    }

    #[test]
    fn persisted_record_uses_camel_case() {
        let raw = r#"{"id":7,"firstName":"Bo","lastName":"Kim","emailId":"bo@kim.io"}"#;
        let employee: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(employee, Employee::draft("Bo", "Kim", "bo@kim.io").with_id(7));
        assert!(!employee.is_draft());
    }

    #[test]
    fn missing_id_deserializes_as_draft() {
        let raw = r#"{"firstName":"Bo","lastName":"Kim","emailId":"bo@kim.io"}"#;
        let employee: Employee = serde_json::from_str(raw).unwrap();
        assert!(employee.is_draft());
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let ann = Employee::draft("Ann", "Lee", "ann@x.com").with_id(1);
        assert!(ann.matches("an"));
        assert!(ann.matches("lee"));
        assert!(ann.matches("x.com"));
        assert!(ann.matches(""));
        assert!(!ann.matches("zzz"));
    }
}

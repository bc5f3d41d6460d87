//! Record form state for creating and editing an employee

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FormError;
use crate::models::{Employee, EmployeeField};

/// Same shape a browser accepts for `<input type="email">`
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Whether the form is creating a new record or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Editable copy of an employee shown in the modal
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    initial: Option<Employee>,
    draft: Employee,
}

impl EmployeeForm {
    /// Blank form with no id
    pub fn create() -> Self {
        Self {
            initial: None,
            draft: Employee::default(),
        }
    }

    pub fn edit(employee: &Employee) -> Self {
        Self {
            initial: Some(employee.clone()),
            draft: employee.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.initial.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// The record being edited, if any
    pub fn initial(&self) -> Option<&Employee> {
        self.initial.as_ref()
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        self.draft.field(field)
    }

    /// Replace one field, leaving the others untouched
    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EmployeeField::FirstName => self.draft.first_name = value,
            EmployeeField::LastName => self.draft.last_name = value,
            EmployeeField::EmailId => self.draft.email_id = value,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "New Employee",
            FormMode::Edit => "Edit Employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "Create",
            FormMode::Edit => "Update",
        }
    }

    /// Run the field constraints and hand back the completed record
    pub fn submit(&self) -> Result<Employee, FormError> {
        for field in EmployeeField::ALL {
            if self.draft.field(field).trim().is_empty() {
                return Err(FormError::Required(field));
            }
        }

        // Email inputs hand over their value with surrounding whitespace removed
        let email = self.draft.email_id.trim();
        if !email_regex().is_match(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        Ok(Employee {
            email_id: email.to_string(),
            ..self.draft.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ann() -> Employee {
        Employee::draft("Ann", "Lee", "ann@x.com").with_id(1)
    }

    #[test]
    fn create_form_starts_blank() {
        let form = EmployeeForm::create();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.draft(), &Employee::default());
        assert_eq!(form.title(), "New Employee");
        assert_eq!(form.submit_label(), "Create");
    }

    #[test]
    fn edit_form_copies_record() {
        let form = EmployeeForm::edit(&ann());
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.draft(), &ann());
        assert_eq!(form.title(), "Edit Employee");
        assert_eq!(form.submit_label(), "Update");
    }

    #[test]
    fn set_field_touches_only_that_field() {
        let mut form = EmployeeForm::edit(&ann());
        form.set_field(EmployeeField::LastName, "Park");

        assert_eq!(form.value(EmployeeField::FirstName), "Ann");
        assert_eq!(form.value(EmployeeField::LastName), "Park");
        assert_eq!(form.value(EmployeeField::EmailId), "ann@x.com");
        assert_eq!(form.draft().id, Some(1));
        assert_eq!(form.initial(), Some(&ann()));
    }

    #[test]
    fn submit_requires_every_field() {
        let mut form = EmployeeForm::create();
        form.set_field(EmployeeField::FirstName, "Ann");
        form.set_field(EmployeeField::EmailId, "ann@x.com");
        assert_eq!(
            form.submit(),
            Err(FormError::Required(EmployeeField::LastName))
        );

        form.set_field(EmployeeField::LastName, "   ");
        assert_eq!(
            form.submit(),
            Err(FormError::Required(EmployeeField::LastName))
        );
    }

    #[test]
    fn submit_checks_email_format() {
        let mut form = EmployeeForm::create();
        form.set_field(EmployeeField::FirstName, "Ann");
        form.set_field(EmployeeField::LastName, "Lee");
        form.set_field(EmployeeField::EmailId, "not-an-email");
        assert_eq!(
            form.submit(),
            Err(FormError::InvalidEmail("not-an-email".into()))
        );

        form.set_field(EmployeeField::EmailId, "ann.lee+hr@corp.example");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn submitted_email_has_padding_removed() {
        let mut form = EmployeeForm::edit(&ann());
        form.set_field(EmployeeField::EmailId, " ann@x.com ");

        let submitted = form.submit().unwrap();
        assert_eq!(submitted.email_id, "ann@x.com");
        assert_eq!(submitted, ann());
    }

    #[test]
    fn create_submit_yields_draft_without_id() {
        let mut form = EmployeeForm::create();
        form.set_field(EmployeeField::FirstName, "Ann");
        form.set_field(EmployeeField::LastName, "Lee");
        form.set_field(EmployeeField::EmailId, "ann@x.com");
        assert_eq!(form.submit().unwrap(), Employee::draft("Ann", "Lee", "ann@x.com"));
    }
}

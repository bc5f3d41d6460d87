//! List controller: the screen state and its transitions.
//!
//! The GPUI entity in `app` owns one [`EmployeeList`] and drives it from
//! click handlers and background tasks. Every transition here is
//! synchronous, so the whole create/edit/delete lifecycle can be exercised
//! without a window.

use std::path::PathBuf;

use crate::api::EmployeeService;
use crate::error::{ApiError, FormError};
use crate::form::{EmployeeForm, FormMode};
use crate::models::{Employee, EmployeeField};
use crate::notifications::Notifications;

/// A validated form submission ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create(Employee),
    Update { id: i64, employee: Employee },
}

impl SubmitRequest {
    pub fn mode(&self) -> FormMode {
        match self {
            SubmitRequest::Create(_) => FormMode::Create,
            SubmitRequest::Update { .. } => FormMode::Edit,
        }
    }
}

/// Result of a create or update followed by a re-fetch
#[derive(Debug)]
pub enum MutationOutcome {
    Failed(ApiError),
    Applied { reload: Result<Vec<Employee>, ApiError> },
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Failed(ApiError),
    /// Backend answered `deleted: false`
    NotDeleted,
    Deleted { reload: Result<Vec<Employee>, ApiError> },
}

/// Send a submission, then re-read the full list from the backend
pub fn run_submit(service: &dyn EmployeeService, request: &SubmitRequest) -> MutationOutcome {
    let sent = match request {
        SubmitRequest::Create(draft) => service.create(draft),
        SubmitRequest::Update { id, employee } => service.update(*id, employee),
    };
    match sent {
        Ok(_) => MutationOutcome::Applied {
            reload: service.list_all(),
        },
        Err(e) => MutationOutcome::Failed(e),
    }
}

/// Delete, re-reading the list only when the backend removed the record
pub fn run_delete(service: &dyn EmployeeService, id: i64) -> DeleteOutcome {
    match service.delete(id) {
        Ok(true) => DeleteOutcome::Deleted {
            reload: service.list_all(),
        },
        Ok(false) => DeleteOutcome::NotDeleted,
        Err(e) => DeleteOutcome::Failed(e),
    }
}

/// State of the employee list screen
#[derive(Debug, Default)]
pub struct EmployeeList {
    records: Vec<Employee>,
    form: Option<EmployeeForm>,
    form_error: Option<FormError>,
    search_term: String,
    is_loading: bool,
    has_loaded: bool,
    pending_delete: Option<Employee>,
    viewing: Option<Employee>,
    pub notifications: Notifications,
}

impl EmployeeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True until the first load has resolved
    pub fn is_initial_load(&self) -> bool {
        !self.has_loaded
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        self.form.as_ref()
    }

    pub fn form_error(&self) -> Option<&FormError> {
        self.form_error.as_ref()
    }

    pub fn is_form_visible(&self) -> bool {
        self.form.is_some()
    }

    pub fn editing_record(&self) -> Option<&Employee> {
        self.form.as_ref().and_then(|f| f.initial())
    }

    pub fn pending_delete(&self) -> Option<&Employee> {
        self.pending_delete.as_ref()
    }

    pub fn viewing(&self) -> Option<&Employee> {
        self.viewing.as_ref()
    }

    fn find(&self, id: i64) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == Some(id))
    }

    // Load

    pub fn begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<Employee>, ApiError>) {
        self.apply_reload(result);
        self.has_loaded = true;
        self.is_loading = false;
    }

    fn apply_reload(&mut self, result: Result<Vec<Employee>, ApiError>) {
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "employee list replaced");
                self.records = records;
            }
            Err(e) => {
                self.notifications.error(e.to_string());
            }
        }
    }

    // Create / edit

    pub fn open_create(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.form = Some(EmployeeForm::create());
        self.form_error = None;
        true
    }

    pub fn open_edit(&mut self, id: i64) -> bool {
        if self.is_loading {
            return false;
        }
        let Some(employee) = self.find(id).cloned() else {
            return false;
        };
        self.form = Some(EmployeeForm::edit(&employee));
        self.form_error = None;
        true
    }

    pub fn close_form(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.form = None;
        self.form_error = None;
        true
    }

    pub fn set_form_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        if self.is_loading {
            return;
        }
        if let Some(form) = self.form.as_mut() {
            form.set_field(field, value);
            self.form_error = None;
        }
    }

    /// Validate the open form and mark the screen busy
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.is_loading {
            return None;
        }
        let form = self.form.as_ref()?;

        let employee = match form.submit() {
            Ok(employee) => employee,
            Err(e) => {
                self.form_error = Some(e);
                return None;
            }
        };

        let request = match form.initial() {
            None => SubmitRequest::Create(employee),
            Some(original) => {
                let id = original.id?;
                SubmitRequest::Update { id, employee }
            }
        };

        self.is_loading = true;
        Some(request)
    }

    pub fn finish_submit(&mut self, mode: FormMode, outcome: MutationOutcome) {
        match outcome {
            MutationOutcome::Failed(e) => {
                self.notifications.error(e.to_string());
            }
            MutationOutcome::Applied { reload } => {
                self.apply_reload(reload);
                self.form = None;
                self.form_error = None;
                self.notifications.success(match mode {
                    FormMode::Create => "Employee created successfully",
                    FormMode::Edit => "Employee updated successfully",
                });
            }
        }
        self.is_loading = false;
    }

    // Delete

    /// Ask for confirmation before deleting
    pub fn request_delete(&mut self, id: i64) -> bool {
        if self.is_loading {
            return false;
        }
        let Some(employee) = self.find(id).cloned() else {
            return false;
        };
        self.pending_delete = Some(employee);
        true
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<i64> {
        if self.is_loading {
            return None;
        }
        let id = self.pending_delete.take()?.id?;
        self.is_loading = true;
        Some(id)
    }

    pub fn finish_delete(&mut self, outcome: DeleteOutcome) {
        match outcome {
            DeleteOutcome::Failed(e) => {
                self.notifications.error(e.to_string());
            }
            DeleteOutcome::NotDeleted => {
                tracing::info!("backend reported nothing deleted; list left as is");
            }
            DeleteOutcome::Deleted { reload } => {
                self.apply_reload(reload);
                self.notifications.success("Employee deleted successfully");
            }
        }
        self.is_loading = false;
    }

    // Search

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Loaded records matching the search term, in backend order
    pub fn visible_records(&self) -> Vec<&Employee> {
        let needle = self.search_term.to_lowercase();
        self.records.iter().filter(|e| e.matches(&needle)).collect()
    }

    // Details

    pub fn begin_view(&mut self, id: i64) -> Option<i64> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        Some(id)
    }

    pub fn finish_view(&mut self, result: Result<Employee, ApiError>) {
        match result {
            Ok(employee) => self.viewing = Some(employee),
            Err(e) => {
                self.notifications.error(e.to_string());
            }
        }
        self.is_loading = false;
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    // Export

    /// Snapshot of the visible rows to write out
    pub fn begin_export(&mut self) -> Option<Vec<Employee>> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        Some(self.visible_records().into_iter().cloned().collect())
    }

    pub fn finish_export(&mut self, result: anyhow::Result<PathBuf>) {
        match result {
            Ok(path) => {
                self.notifications
                    .success(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                self.notifications.error(format!("Export failed: {:#}", e));
            }
        }
        self.is_loading = false;
    }
}

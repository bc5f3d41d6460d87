//! UI components for Employee Desk
//!
//! These modules extend the `App` struct with rendering methods.
//! They are imported for their side effects (impl blocks).

mod dialogs;
mod form_modal;
mod header;
mod table;
mod toasts;

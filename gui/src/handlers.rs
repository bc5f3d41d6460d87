//! Action handling for Employee Desk.
//!
//! Each handler flips the controller into its busy state, runs the blocking
//! API call on the background executor, and applies the result back on the
//! entity when it resolves. Results are applied even if the user has since
//! closed the form they came from.

use std::time::Instant;

use gpui::{AppContext as _, Context, Window};

use crate::api::EmployeeService;
use crate::app::App;
use crate::controller::{run_delete, run_submit};
use crate::export::export_to_working_dir;
use crate::models::EmployeeField;
use crate::notifications::NotificationKind;

impl App {
    /// Fetch the full list and replace the local cache
    pub fn load_employees(&mut self, cx: &mut Context<Self>) {
        if !self.list.begin_load() {
            return;
        }
        cx.notify();

        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.list_all() })
                .await;

            let _ = this.update(cx, |app, cx| {
                app.list.finish_load(result);
                app.schedule_toast_expiry(cx);
                cx.notify();
            });
        })
        .detach();
    }

    pub fn open_create_form(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.list.open_create() {
            self.sync_form_inputs(window, cx);
            cx.notify();
        }
    }

    pub fn open_edit_form(&mut self, id: i64, window: &mut Window, cx: &mut Context<Self>) {
        if self.list.open_edit(id) {
            self.sync_form_inputs(window, cx);
            cx.notify();
        }
    }

    pub fn close_form(&mut self, cx: &mut Context<Self>) {
        if self.list.close_form() {
            cx.notify();
        }
    }

    /// Copy the draft into the input widgets and focus the first one
    fn sync_form_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(form) = self.list.form() else {
            return;
        };
        let values: Vec<(EmployeeField, String)> = EmployeeField::ALL
            .iter()
            .map(|field| (*field, form.value(*field).to_string()))
            .collect();

        for (field, value) in values {
            self.input_for(field).update(cx, |state, cx| {
                state.set_value(value, window, cx);
            });
        }

        self.first_name_input.update(cx, |state, cx| {
            state.focus(window, cx);
        });
    }

    pub fn submit_form(&mut self, cx: &mut Context<Self>) {
        let Some(request) = self.list.begin_submit() else {
            // Either busy or a field constraint failed; redraw for the latter
            cx.notify();
            return;
        };
        cx.notify();

        let api_client = self.api_client.clone();
        let mode = request.mode();
        cx.spawn(async move |this, cx| {
            let outcome = cx
                .background_spawn(async move { run_submit(&api_client, &request) })
                .await;

            let _ = this.update(cx, |app, cx| {
                app.list.finish_submit(mode, outcome);
                app.schedule_toast_expiry(cx);
                cx.notify();
            });
        })
        .detach();
    }

    pub fn request_delete(&mut self, id: i64, cx: &mut Context<Self>) {
        if self.list.request_delete(id) {
            cx.notify();
        }
    }

    pub fn cancel_delete(&mut self, cx: &mut Context<Self>) {
        self.list.cancel_delete();
        cx.notify();
    }

    pub fn confirm_delete(&mut self, cx: &mut Context<Self>) {
        let Some(id) = self.list.confirm_delete() else {
            return;
        };
        cx.notify();

        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let outcome = cx
                .background_spawn(async move { run_delete(&api_client, id) })
                .await;

            let _ = this.update(cx, |app, cx| {
                app.list.finish_delete(outcome);
                app.schedule_toast_expiry(cx);
                cx.notify();
            });
        })
        .detach();
    }

    /// Fetch one record fresh from the backend and show it read-only
    pub fn view_employee(&mut self, id: i64, cx: &mut Context<Self>) {
        let Some(id) = self.list.begin_view(id) else {
            return;
        };
        cx.notify();

        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.get_by_id(id) })
                .await;

            let _ = this.update(cx, |app, cx| {
                app.list.finish_view(result);
                app.schedule_toast_expiry(cx);
                cx.notify();
            });
        })
        .detach();
    }

    pub fn close_details(&mut self, cx: &mut Context<Self>) {
        self.list.close_view();
        cx.notify();
    }

    pub fn export_visible(&mut self, cx: &mut Context<Self>) {
        let Some(rows) = self.list.begin_export() else {
            return;
        };
        cx.notify();

        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { export_to_working_dir(&rows) })
                .await;

            let _ = this.update(cx, |app, cx| {
                app.list.finish_export(result);
                app.schedule_toast_expiry(cx);
                cx.notify();
            });
        })
        .detach();
    }

    pub fn dismiss_toast(&mut self, id: &str, cx: &mut Context<Self>) {
        self.list.notifications.dismiss(id);
        cx.notify();
    }

    /// Arm one timer per toast lifetime still on screen
    pub fn schedule_toast_expiry(&mut self, cx: &mut Context<Self>) {
        for kind in [NotificationKind::Success, NotificationKind::Error] {
            if !self.list.notifications.iter().any(|n| n.kind == kind) {
                continue;
            }
            let ttl = kind.ttl();
            cx.spawn(async move |this, cx| {
                smol::Timer::after(ttl).await;
                let _ = this.update(cx, |app, cx| {
                    if app.list.notifications.prune(Instant::now()) {
                        cx.notify();
                    }
                });
            })
            .detach();
        }
    }
}

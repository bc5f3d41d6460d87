//! Core App state and initialization for Employee Desk

use gpui::{
    div, prelude::FluentBuilder, AppContext as _, Context, Entity, IntoElement, ParentElement,
    Render, Styled, Window,
};
use gpui_component::input::{InputEvent, InputState as GpuiInputState};

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::controller::EmployeeList;
use crate::models::EmployeeField;
use crate::theme::DeskTheme;

/// Main application state
pub struct App {
    pub theme: DeskTheme,
    pub list: EmployeeList,

    // API client
    pub api_client: ApiClient,

    // Search box
    pub search_input: Entity<GpuiInputState>,

    // Record form inputs, reused each time the modal opens
    pub first_name_input: Entity<GpuiInputState>,
    pub last_name_input: Entity<GpuiInputState>,
    pub email_input: Entity<GpuiInputState>,
}

impl App {
    pub fn new(config: &AppConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let api_client = ApiClient::new(config.api_base_url.clone());

        let search_input =
            cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Search employees..."));
        cx.subscribe_in(
            &search_input,
            window,
            |this, input_state: &Entity<GpuiInputState>, event: &InputEvent, _window, cx| {
                if let InputEvent::Change { .. } = event {
                    let term = input_state.read(cx).value().to_string();
                    this.list.set_search_term(term);
                    cx.notify();
                }
            },
        )
        .detach();

        let first_name_input = Self::form_input(EmployeeField::FirstName, "First name", window, cx);
        let last_name_input = Self::form_input(EmployeeField::LastName, "Last name", window, cx);
        let email_input = Self::form_input(EmployeeField::EmailId, "name@company.com", window, cx);

        Self {
            theme: DeskTheme::new(),
            list: EmployeeList::new(),
            api_client,
            search_input,
            first_name_input,
            last_name_input,
            email_input,
        }
    }

    /// Create one form input and route its edits into the draft
    fn form_input(
        field: EmployeeField,
        placeholder: &'static str,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<GpuiInputState> {
        let input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder(placeholder));

        cx.subscribe_in(
            &input,
            window,
            move |this, input_state: &Entity<GpuiInputState>, event: &InputEvent, _window, cx| {
                match event {
                    InputEvent::Change { .. } => {
                        let value = input_state.read(cx).value().to_string();
                        this.list.set_form_field(field, value);
                        cx.notify();
                    }
                    InputEvent::PressEnter { .. } => this.submit_form(cx),
                    _ => {}
                }
            },
        )
        .detach();

        input
    }

    pub fn input_for(&self, field: EmployeeField) -> &Entity<GpuiInputState> {
        match field {
            EmployeeField::FirstName => &self.first_name_input,
            EmployeeField::LastName => &self.last_name_input,
            EmployeeField::EmailId => &self.email_input,
        }
    }

    pub fn initialize(&mut self, cx: &mut Context<Self>) {
        tracing::info!(base_url = %self.api_client.base_url(), "loading employees");
        self.load_employees(cx);
    }
}

impl Render for App {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .relative()
            .size_full()
            .bg(theme.background)
            .text_color(theme.foreground)
            .flex()
            .flex_col()
            .child(self.render_header(cx))
            .child(self.render_search(window, cx))
            .child(self.render_table(cx))
            .when(self.list.is_form_visible(), |el| {
                el.child(self.render_form_modal(cx))
            })
            .when_some(self.list.pending_delete().cloned(), |el, employee| {
                el.child(self.render_delete_confirm(&employee, cx))
            })
            .when_some(self.list.viewing().cloned(), |el, employee| {
                el.child(self.render_details(&employee, cx))
            })
            .child(self.render_toasts(cx))
    }
}

//! Delete confirmation, details panel, and the shared modal overlay

use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use crate::app::App;
use crate::models::Employee;

impl App {
    /// Dimmed full-window layer that blocks clicks to the list behind it
    pub fn render_overlay(&self, id: &'static str, content: impl IntoElement) -> impl IntoElement {
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(self.theme.overlay)
            .occlude()
            .flex()
            .items_center()
            .justify_center()
            .child(content)
    }

    pub fn render_delete_confirm(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let busy = self.list.is_loading();

        self.render_overlay(
            "delete-overlay",
            div()
                .w(px(400.))
                .p_6()
                .bg(theme.surface)
                .rounded(px(8.))
                .shadow_lg()
                .flex()
                .flex_col()
                .gap_4()
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::SEMIBOLD)
                        .child("Delete employee"),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.foreground_dim)
                        .child(SharedString::from(format!(
                            "Are you sure you want to delete {}?",
                            employee.full_name()
                        ))),
                )
                .child(
                    div()
                        .flex()
                        .justify_end()
                        .gap_3()
                        .child(
                            div()
                                .id("delete-cancel-btn")
                                .px_4()
                                .py_2()
                                .rounded(px(6.))
                                .border_1()
                                .border_color(theme.input_border)
                                .text_sm()
                                .text_color(theme.foreground_dim)
                                .cursor_pointer()
                                .hover(|s| s.bg(theme.background))
                                .on_click(cx.listener(|this, _event, _window, cx| {
                                    this.cancel_delete(cx);
                                }))
                                .child("Cancel"),
                        )
                        .child(
                            div()
                                .id("delete-confirm-btn")
                                .px_4()
                                .py_2()
                                .rounded(px(6.))
                                .bg(theme.danger)
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(theme.surface)
                                .child("Delete")
                                .when(busy, |el| {
                                    el.opacity(theme.disabled_opacity).cursor_not_allowed()
                                })
                                .when(!busy, |el| {
                                    el.cursor_pointer()
                                        .hover(|s| s.opacity(0.85))
                                        .on_click(cx.listener(|this, _event, _window, cx| {
                                            this.confirm_delete(cx);
                                        }))
                                }),
                        ),
                ),
        )
    }

    pub fn render_details(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let id = employee
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "—".to_string());

        let line = |label: &'static str, value: String| {
            div()
                .flex()
                .gap_2()
                .text_sm()
                .child(
                    div()
                        .w(px(96.))
                        .text_color(theme.foreground_muted)
                        .child(label),
                )
                .child(div().text_color(theme.foreground).child(SharedString::from(value)))
        };

        self.render_overlay(
            "details-overlay",
            div()
                .w(px(400.))
                .p_6()
                .bg(theme.surface)
                .rounded(px(8.))
                .shadow_lg()
                .flex()
                .flex_col()
                .gap_3()
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::SEMIBOLD)
                        .child("Employee details"),
                )
                .child(line("ID", id))
                .child(line("First name", employee.first_name.clone()))
                .child(line("Last name", employee.last_name.clone()))
                .child(line("Email", employee.email_id.clone()))
                .child(
                    div().flex().justify_end().child(
                        div()
                            .id("details-close-btn")
                            .px_4()
                            .py_2()
                            .rounded(px(6.))
                            .border_1()
                            .border_color(theme.input_border)
                            .text_sm()
                            .text_color(theme.foreground_dim)
                            .cursor_pointer()
                            .hover(|s| s.bg(theme.background))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.close_details(cx);
                            }))
                            .child("Close"),
                    ),
                ),
        )
    }
}

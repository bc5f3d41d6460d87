//! Record form modal for creating and editing employees

use gpui::{
    div, prelude::FluentBuilder, px, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};
use gpui_component::input::{Input, InputState as GpuiInputState};
use gpui_component::Disableable as _;

use crate::app::App;
use crate::models::EmployeeField;

impl App {
    pub fn render_form_modal(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let busy = self.list.is_loading();
        let (title, submit_label) = self
            .list
            .form()
            .map(|f| (f.title(), f.submit_label()))
            .unwrap_or(("New Employee", "Create"));
        let error = self.list.form_error().map(|e| e.to_string());
        let editing_id = self.list.editing_record().and_then(|e| e.id);

        self.render_overlay(
            "form-overlay",
            div()
                .w(px(448.))
                .p_6()
                .bg(theme.surface)
                .rounded(px(8.))
                .shadow_lg()
                .flex()
                .flex_col()
                .gap_4()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .child(
                            div()
                                .flex()
                                .items_baseline()
                                .gap_2()
                                .child(
                                    div()
                                        .text_xl()
                                        .font_weight(FontWeight::SEMIBOLD)
                                        .child(title),
                                )
                                .when_some(editing_id, |el, id| {
                                    el.child(
                                        div()
                                            .text_sm()
                                            .text_color(theme.foreground_muted)
                                            .child(SharedString::from(format!("#{id}"))),
                                    )
                                }),
                        )
                        .child(
                            div()
                                .id("form-close-btn")
                                .text_color(theme.foreground_muted)
                                .child("✕")
                                .when(busy, |el| {
                                    el.opacity(theme.disabled_opacity).cursor_not_allowed()
                                })
                                .when(!busy, |el| {
                                    el.cursor_pointer()
                                        .hover(|s| s.text_color(theme.foreground_dim))
                                        .on_click(cx.listener(|this, _event, _window, cx| {
                                            this.close_form(cx);
                                        }))
                                }),
                        ),
                )
                .children(
                    EmployeeField::ALL
                        .iter()
                        .map(|field| self.render_form_field(*field, self.input_for(*field))),
                )
                .when_some(error, |el, message| {
                    el.child(
                        div()
                            .text_sm()
                            .text_color(theme.danger)
                            .child(SharedString::from(message)),
                    )
                })
                .child(
                    div()
                        .mt_2()
                        .flex()
                        .justify_end()
                        .gap_3()
                        .child(
                            div()
                                .id("form-cancel-btn")
                                .px_4()
                                .py_2()
                                .rounded(px(6.))
                                .border_1()
                                .border_color(theme.input_border)
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(theme.foreground_dim)
                                .child("Cancel")
                                .when(busy, |el| {
                                    el.opacity(theme.disabled_opacity).cursor_not_allowed()
                                })
                                .when(!busy, |el| {
                                    el.cursor_pointer()
                                        .hover(|s| s.bg(theme.background))
                                        .on_click(cx.listener(|this, _event, _window, cx| {
                                            this.close_form(cx);
                                        }))
                                }),
                        )
                        .child(
                            div()
                                .id("form-submit-btn")
                                .px_4()
                                .py_2()
                                .rounded(px(6.))
                                .bg(theme.primary)
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(theme.surface)
                                .child(if busy { "Saving..." } else { submit_label })
                                .when(busy, |el| {
                                    el.opacity(theme.disabled_opacity).cursor_not_allowed()
                                })
                                .when(!busy, |el| {
                                    el.cursor_pointer()
                                        .hover(|s| s.bg(theme.primary_hover))
                                        .on_click(cx.listener(|this, _event, _window, cx| {
                                            this.submit_form(cx);
                                        }))
                                }),
                        ),
                ),
        )
    }

    /// Labelled input; locked while a request is in flight
    fn render_form_field(
        &self,
        field: EmployeeField,
        input: &Entity<GpuiInputState>,
    ) -> impl IntoElement {
        let theme = &self.theme;
        let busy = self.list.is_loading();

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground_dim)
                    .child(field.label()),
            )
            .child(
                div()
                    .rounded(px(6.))
                    .border_1()
                    .border_color(theme.input_border)
                    .when(busy, |el| el.opacity(theme.disabled_opacity))
                    .child(Input::new(input).appearance(false).disabled(busy)),
            )
    }
}

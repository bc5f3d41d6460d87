//! Employee table with per-row actions

use gpui::{
    div, prelude::FluentBuilder, px, AnyElement, Context, FontWeight, Hsla, InteractiveElement,
    IntoElement, ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use crate::app::App;
use crate::models::Employee;

#[derive(Clone, Copy)]
enum RowAction {
    Edit,
    Delete,
    View,
}

impl RowAction {
    fn icon(&self) -> &'static str {
        match self {
            RowAction::Edit => "✎",
            RowAction::Delete => "🗑",
            RowAction::View => "👁",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::View => "view",
        }
    }
}

impl App {
    pub fn render_table(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let rows = self.list.visible_records();

        let body: Vec<AnyElement> = if rows.is_empty() {
            let message = if self.list.is_loading() && self.list.is_initial_load() {
                "Loading..."
            } else {
                "No employees found"
            };
            vec![div()
                .w_full()
                .py_6()
                .flex()
                .justify_center()
                .text_sm()
                .text_color(theme.foreground_muted)
                .child(message)
                .into_any_element()]
        } else {
            rows.into_iter()
                .map(|employee| self.render_row(employee, cx).into_any_element())
                .collect()
        };

        div()
            .flex_1()
            .px_8()
            .pb_6()
            .child(
                div()
                    .id("employee-table")
                    .size_full()
                    .overflow_y_scroll()
                    .bg(theme.surface)
                    .rounded(px(8.))
                    .border_1()
                    .border_color(theme.border)
                    .shadow_sm()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .px_6()
                            .py_3()
                            .bg(theme.surface_header)
                            .border_b_1()
                            .border_color(theme.border)
                            .text_xs()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.foreground_muted)
                            .child(div().flex_1().child("EMPLOYEE"))
                            .child(div().flex_1().child("EMAIL"))
                            .child(div().w(px(120.)).child("ACTIONS")),
                    )
                    .children(body),
            )
    }

    fn render_row(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let initial = employee
            .first_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();

        div()
            .id(SharedString::from(format!(
                "employee-row-{}",
                employee.id.unwrap_or_default()
            )))
            .w_full()
            .flex()
            .items_center()
            .px_6()
            .py_4()
            .border_b_1()
            .border_color(theme.border)
            .text_sm()
            .hover(|s| s.bg(theme.row_hover))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.))
                            .flex_none()
                            .rounded_full()
                            .bg(theme.surface_header)
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_xs()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.foreground_dim)
                            .child(SharedString::from(initial)),
                    )
                    .child(
                        div()
                            .text_color(theme.foreground)
                            .font_weight(FontWeight::MEDIUM)
                            .child(SharedString::from(employee.full_name())),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .text_color(theme.foreground_muted)
                    .child(SharedString::from(employee.email_id.clone())),
            )
            .child(
                div()
                    .w(px(120.))
                    .flex()
                    .gap_3()
                    .when_some(employee.id, |el, id| {
                        el.child(self.render_row_action(RowAction::Edit, id, theme.edit, cx))
                            .child(self.render_row_action(RowAction::Delete, id, theme.danger, cx))
                            .child(self.render_row_action(
                                RowAction::View,
                                id,
                                theme.foreground_muted,
                                cx,
                            ))
                    }),
            )
    }

    fn render_row_action(
        &self,
        action: RowAction,
        id: i64,
        color: Hsla,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;
        let busy = self.list.is_loading();

        div()
            .id(SharedString::from(format!("{}-{}", action.key(), id)))
            .px_1()
            .text_color(color)
            .child(action.icon())
            .when(busy, |el| el.opacity(theme.disabled_opacity).cursor_not_allowed())
            .when(!busy, |el| {
                el.cursor_pointer()
                    .hover(|s| s.opacity(0.7))
                    .on_click(cx.listener(move |this, _event, window, cx| match action {
                        RowAction::Edit => this.open_edit_form(id, window, cx),
                        RowAction::Delete => this.request_delete(id, cx),
                        RowAction::View => this.view_employee(id, cx),
                    }))
            })
    }
}

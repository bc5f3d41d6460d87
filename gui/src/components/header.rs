//! Header with the page title and list-level actions

use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::input::Input;

use crate::app::App;

impl App {
    pub fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let busy = self.list.is_loading();

        div()
            .w_full()
            .px_8()
            .pt_6()
            .pb_4()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.foreground)
                            .child("Employees"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .child(SharedString::from(self.api_client.base_url().to_string())),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .id("new-employee-btn")
                            .px_4()
                            .py_2()
                            .rounded(px(6.))
                            .bg(theme.primary)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.surface)
                            .child("✚ New Employee")
                            .when(busy, |el| el.opacity(theme.disabled_opacity).cursor_not_allowed())
                            .when(!busy, |el| {
                                el.cursor_pointer()
                                    .hover(|s| s.bg(theme.primary_hover))
                                    .on_click(cx.listener(|this, _event, window, cx| {
                                        this.open_create_form(window, cx);
                                    }))
                            }),
                    )
                    .child(
                        div()
                            .id("export-btn")
                            .px_4()
                            .py_2()
                            .rounded(px(6.))
                            .bg(theme.surface)
                            .border_1()
                            .border_color(theme.input_border)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.foreground_dim)
                            .child("⬇ Export")
                            .when(busy, |el| el.opacity(theme.disabled_opacity).cursor_not_allowed())
                            .when(!busy, |el| {
                                el.cursor_pointer()
                                    .hover(|s| s.bg(theme.background))
                                    .on_click(cx.listener(|this, _event, _window, cx| {
                                        this.export_visible(cx);
                                    }))
                            }),
                    ),
            )
    }

    pub fn render_search(&self, _window: &Window, _cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let shown = self.list.visible_records().len();
        let total = self.list.records().len();

        div()
            .w_full()
            .px_8()
            .pb_4()
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .flex_1()
                    .bg(theme.surface)
                    .rounded(px(6.))
                    .border_1()
                    .border_color(theme.input_border)
                    .child(Input::new(&self.search_input).appearance(false)),
            )
            .when(!self.list.search_term().is_empty(), |el| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(theme.foreground_muted)
                        .child(format!("{} of {}", shown, total)),
                )
            })
    }
}

//! Toast stack in the top-right corner

use gpui::{
    div, px, Context, InteractiveElement, IntoElement, ParentElement, SharedString,
    StatefulInteractiveElement, Styled,
};

use crate::app::App;
use crate::notifications::NotificationKind;

impl App {
    pub fn render_toasts(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .absolute()
            .top_4()
            .right_4()
            .w(px(320.))
            .flex()
            .flex_col()
            .gap_2()
            .children(self.list.notifications.iter().map(|toast| {
                let (icon, accent, bg) = match toast.kind {
                    NotificationKind::Success => ("✓", theme.primary, theme.success_bg),
                    NotificationKind::Error => ("✕", theme.danger, theme.error_bg),
                };
                let toast_id = toast.id.clone();

                div()
                    .id(SharedString::from(format!("toast-{}", toast.id)))
                    .px_4()
                    .py_3()
                    .rounded(px(6.))
                    .bg(bg)
                    .border_1()
                    .border_color(accent.opacity(0.4))
                    .shadow_md()
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.dismiss_toast(&toast_id, cx);
                    }))
                    .child(div().text_color(accent).child(icon))
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.foreground)
                            .child(SharedString::from(toast.message.clone())),
                    )
            }))
    }
}

//! Employee Desk - manage employee records against a REST backend
//!
//! Built with GPUI and gpui-component

mod api;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod export;
mod form;
mod handlers;
mod models;
mod notifications;
mod theme;

use gpui::{
    px, size, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing_subscriber::EnvFilter;

use app::App;
use config::AppConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = AppConfig::load()?;

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(1100.), px(720.)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Employee Desk")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let config = config.clone();
        let opened = cx.open_window(window_options, move |window, cx| {
            let app_entity = cx.new(|cx| App::new(&config, window, cx));

            // Initial load of the employee list
            app_entity.update(cx, |app, cx| {
                app.initialize(cx);
            });

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        if let Err(e) = opened {
            tracing::error!(error = %e, "failed to open window");
            cx.quit();
        }
    });

    Ok(())
}

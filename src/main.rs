#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod components;
mod paths;
mod utils;
mod windows;

use gpui::{App, Application};
use gpui_component::{Theme, ThemeMode};

use sticker_studio::config::{self, AppConfig, WindowKind};

use paths::AppPaths;
use windows::pages::PagesWindow;
use windows::sticker::StickerStudioWindow;

fn main() {
    let app_paths = AppPaths::new().expect("App paths should initialize");
    let _logging =
        crate::utils::logging::LoggingGuards::init(&app_paths).expect("Logging should initialize");

    tracing::info!(
        app_version = env!("CARGO_PKG_VERSION"),
        debug_build = cfg!(debug_assertions),
        "Starting Sticker Studio"
    );

    let app_config = match AppConfig::load(&app_paths.config_path) {
        Ok(app_config) => app_config,
        Err(err) => {
            tracing::warn!(error = ?err, "Invalid config; using defaults");
            AppConfig::default()
        }
    };

    tracing::debug!(?app_config, "Config loaded");

    let app = Application::new().with_assets(components::Assets);

    app.run(move |cx: &mut App| {
        gpui_component::init(cx);
        Theme::change(theme_mode(app_config.theme), None, cx);

        if app_config.windows.is_empty() {
            tracing::warn!("No windows configured; quitting");
            cx.quit();
            return;
        }

        if app_config.opens(WindowKind::Sticker) {
            match StickerStudioWindow::open(cx, &app_config.initial_text) {
                Ok(_) => tracing::info!("Sticker Studio window opened"),
                Err(err) => tracing::error!(error = ?err, "Failed to open Sticker Studio window"),
            }
        }

        if app_config.opens(WindowKind::Pages) {
            match PagesWindow::open(cx, app_config.transition_delay()) {
                Ok(_) => tracing::info!("Pages window opened"),
                Err(err) => tracing::error!(error = ?err, "Failed to open Pages window"),
            }
        }
    });
}

fn theme_mode(theme: config::Theme) -> ThemeMode {
    match theme {
        config::Theme::Dark => ThemeMode::Dark,
        config::Theme::Light => ThemeMode::Light,
    }
}

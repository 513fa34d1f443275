use gpui::{Context, Window};

pub mod pages;
pub mod sticker;

/// Quits the app once the last open window is closed.
fn quit_with_last_window<T: 'static>(window: &mut Window, cx: &mut Context<T>) {
    window.on_window_should_close(cx, |_, cx| {
        if cx.windows().len() <= 1 {
            tracing::info!("Last window closed; quitting");
            cx.quit();
        }
        true
    });
}

use std::time::Duration;

use gpui::{
    AnyElement, AnyWindowHandle, App, AppContext, Bounds, Context, Entity, IntoElement, Render,
    SharedString, Task, TitlebarOptions, Window, WindowBounds, WindowOptions, div, prelude::*, px,
    size,
};
use gpui_component::{
    ActiveTheme, Root, Sizable, TitleBar,
    button::{Button, ButtonVariants as _},
    h_flex,
    spinner::Spinner,
    v_flex,
};

use sticker_studio::model::navigation::{NavigateOutcome, Navigator};
use sticker_studio::model::pages::PageKey;

use crate::components::IconName;

/// Owns the navigator and the timer that commits its pending transition.
pub struct PageRouter {
    navigator: Navigator,
    // Dropping the task cancels its timer.
    pending_commit: Option<Task<()>>,
    stale_commits: usize,
}

impl PageRouter {
    pub fn new(start: PageKey, transition_delay: Duration) -> Self {
        Self {
            navigator: Navigator::new(start, transition_delay),
            pending_commit: None,
            stale_commits: 0,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigate(&mut self, target: PageKey, cx: &mut Context<Self>) {
        match self.navigator.navigate(target) {
            NavigateOutcome::Ignored => return,
            NavigateOutcome::Cancelled => {
                self.pending_commit.take();
            }
            NavigateOutcome::Started { ticket, delay }
            | NavigateOutcome::Restarted { ticket, delay } => {
                let task = cx.spawn(async move |this, cx| {
                    cx.background_executor().timer(delay).await;
                    let _ = this.update(cx, |this, cx| {
                        if this.navigator.commit(ticket) {
                            cx.notify();
                        } else {
                            this.stale_commits += 1;
                            tracing::warn!(
                                stale_commits = this.stale_commits,
                                "Navigation timer outlived its transition"
                            );
                        }
                    });
                });
                // Replacing the previous task cancels its timer.
                if self.pending_commit.replace(task).is_some() {
                    tracing::trace!(?target, "Replaced pending navigation timer");
                }
            }
        }
        cx.notify();
    }
}

pub struct PagesWindow {
    router: Entity<PageRouter>,
}

impl PagesWindow {
    pub fn open(cx: &mut App, transition_delay: Duration) -> anyhow::Result<AnyWindowHandle> {
        let bounds = Bounds::centered(None, size(px(560.), px(420.0)), cx);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(360.0), px(300.0))),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::new("Pages")),
                    ..TitleBar::title_bar_options()
                }),
                ..Default::default()
            },
            |window, cx| {
                let view = cx.new(|cx| PagesWindow::new(transition_delay, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            },
        )
        .map(|x| x.into())
    }

    fn new(transition_delay: Duration, window: &mut Window, cx: &mut Context<Self>) -> Self {
        super::quit_with_last_window(window, cx);

        let router = cx.new(|_| PageRouter::new(PageKey::default(), transition_delay));
        cx.observe(&router, |_, _, cx| cx.notify()).detach();

        Self { router }
    }

    fn nav_bar(&self, cx: &mut Context<Self>) -> AnyElement {
        let navigator = self.router.read(cx).navigator();
        let active = navigator.pending_target().unwrap_or(navigator.current());
        let transitioning = navigator.is_transitioning();

        h_flex()
            .gap_2()
            .px_4()
            .py_3()
            .items_center()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().border)
            .children(PageKey::ALL.into_iter().map(|key| {
                Button::new(key.label())
                    .label(key.label())
                    .icon(page_icon(key))
                    .small()
                    .when(key == active, |v| v.primary())
                    .when(key != active, |v| v.ghost())
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.router.update(cx, |router, cx| router.navigate(key, cx));
                    }))
            }))
            .when(transitioning, |view| {
                view.child(div().flex_1()).child(Spinner::new().color(cx.theme().accent))
            })
            .into_any_element()
    }

    fn content_view(&self, cx: &mut Context<Self>) -> AnyElement {
        let navigator = self.router.read(cx).navigator();
        let page = navigator.displayed();
        let exiting = navigator.is_transitioning();

        v_flex()
            .gap_3()
            .p_6()
            .when(exiting, |view| view.opacity(0.4))
            .child(
                div()
                    .pb_2()
                    .border_b_2()
                    .border_color(cx.theme().primary)
                    .text_2xl()
                    .font_bold()
                    .child(page.title),
            )
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child(page.content),
            )
            .into_any_element()
    }
}

impl Render for PagesWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.nav_bar(cx))
            .child(self.content_view(cx))
    }
}

fn page_icon(key: PageKey) -> IconName {
    match key {
        PageKey::Home => IconName::Home,
        PageKey::Gallery => IconName::Photo,
        PageKey::About => IconName::Info,
    }
}

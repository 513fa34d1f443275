use gpui::{
    AnyElement, AnyWindowHandle, App, AppContext, Bounds, Context, Entity, IntoElement, Render,
    SharedString, TitlebarOptions, Window, WindowBounds, WindowOptions, div, prelude::*, px, size,
};
use gpui_component::{
    ActiveTheme, IndexPath, Root, Sizable, TitleBar,
    alert::Alert,
    button::{Button, ButtonVariants as _},
    form::{field, v_form},
    h_flex,
    input::{Input, InputEvent, InputState},
    scroll::ScrollableElement,
    select::{SearchableVec, Select, SelectEvent, SelectState},
    v_flex,
};

use sticker_studio::model::palette::Palette;
use sticker_studio::model::sticker::{StickerFont, StickerForm, StickerSize};

use crate::components::IconName;
use crate::components::sticker_preview::sticker_preview;

const PAGE_TITLE: &str = "Custom Sticker Creator";
const PAGE_INTRO: &str = "Use the controls below to design your personalized text sticker.";
const COMPACT_WIDTH: f64 = 600.0;

type NameSelect = Entity<SelectState<SearchableVec<String>>>;

pub struct StickerStudioWindow {
    form: StickerForm,
    text: Entity<InputState>,
    font: NameSelect,
    palette: NameSelect,
}

impl StickerStudioWindow {
    pub fn open(cx: &mut App, initial_text: &str) -> anyhow::Result<AnyWindowHandle> {
        let bounds = Bounds::centered(None, size(px(640.), px(760.0)), cx);
        let form = StickerForm::new(initial_text);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(360.0), px(480.0))),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::new("Sticker Studio")),
                    ..TitleBar::title_bar_options()
                }),
                ..Default::default()
            },
            |window, cx| {
                let view = cx.new(|cx| StickerStudioWindow::new(form, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            },
        )
        .map(|x| x.into())
    }

    fn new(form: StickerForm, window: &mut Window, cx: &mut Context<Self>) -> Self {
        super::quit_with_last_window(window, cx);

        let text = cx.new(|cx| {
            InputState::new(window, cx)
                .default_value(form.text().to_string())
                .placeholder("Enter name (e.g., GEMINI)")
        });

        cx.subscribe_in(&text, window, |this, input_state, event, window, cx| {
            if let InputEvent::Change = event {
                let raw = input_state.read(cx).value().to_string();
                // Echo of our own `set_value` below; capping it again would cut
                // text that grew while uppercasing.
                if raw == this.form.text() {
                    return;
                }
                this.form.set_text(&raw);

                // Keep the field showing the normalized text (uppercase, capped length).
                if raw != this.form.text() {
                    let normalized = this.form.text().to_string();
                    input_state.update(cx, |state, cx| state.set_value(normalized, window, cx));
                }
                cx.notify();
            }
        })
        .detach();

        let font = cx.new(|cx| {
            SelectState::new(
                SearchableVec::new(StickerFont::names()),
                Some(IndexPath::default().row(form.font().position())),
                window,
                cx,
            )
        });

        cx.subscribe_in(
            &font,
            window,
            |this, _, event: &SelectEvent<SearchableVec<String>>, _, cx| {
                if let SelectEvent::Confirm(Some(name)) = event
                    && let Ok(font) = name.parse::<StickerFont>()
                {
                    this.form.set_font(font);
                    cx.notify();
                }
            },
        )
        .detach();

        let palette = cx.new(|cx| {
            SelectState::new(
                SearchableVec::new(Palette::names()),
                Some(IndexPath::default().row(form.palette().position())),
                window,
                cx,
            )
        });

        cx.subscribe_in(
            &palette,
            window,
            |this, _, event: &SelectEvent<SearchableVec<String>>, _, cx| {
                if let SelectEvent::Confirm(Some(name)) = event {
                    this.form.set_palette(Palette::find(name));
                    cx.notify();
                }
            },
        )
        .detach();

        Self {
            form,
            text,
            font,
            palette,
        }
    }

    fn generate(&mut self, cx: &mut Context<Self>) {
        if !self.form.generate() {
            tracing::debug!(text = %self.form.text(), "Generate ignored for invalid text");
        }
        cx.notify();
    }

    fn header_view(&self, cx: &mut Context<Self>) -> AnyElement {
        h_flex()
            .justify_center()
            .items_center()
            .px_4()
            .py_3()
            .bg(cx.theme().title_bar)
            .child(
                div()
                    .text_2xl()
                    .font_bold()
                    .text_color(cx.theme().foreground)
                    .child("Sticker Generator App"),
            )
            .into_any_element()
    }

    fn size_options(&self, cx: &mut Context<Self>) -> AnyElement {
        h_flex()
            .gap_1()
            .children(StickerSize::ALL.into_iter().map(|option| {
                Button::new(option.label())
                    .label(option.label())
                    .small()
                    .when(self.form.size() == option, |v| v.primary().icon(IconName::Check))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.form.set_size(option);
                        cx.notify();
                    }))
            }))
            .into_any_element()
    }

    fn form_view(&self, cx: &mut Context<Self>) -> AnyElement {
        let has_error = self.form.error().is_some();

        v_form()
            .child(
                field().label(self.form.rules().hint()).child(
                    v_flex()
                        .w_full()
                        .gap_1()
                        .child(
                            Input::new(&self.text)
                                .when(has_error, |v| v.border_color(cx.theme().danger)),
                        )
                        .when_some(self.form.error(), |view, err| {
                            view.child(Alert::error("sticker-text-error", err.to_string()).small())
                        }),
                ),
            )
            .child(field().label("Text Size").child(self.size_options(cx)))
            .child(field().label("Font Selection").child(Select::new(&self.font)))
            .child(field().label("Color Palette").child(Select::new(&self.palette)))
            .into_any_element()
    }

    fn generate_button(&self, cx: &mut Context<Self>) -> AnyElement {
        Button::new("generate")
            .label("Generate Sticker")
            .icon(IconName::Sparkles)
            .primary()
            .w_full()
            .disabled(!self.form.can_generate())
            .on_click(cx.listener(|this, _, _, cx| this.generate(cx)))
            .into_any_element()
    }

    fn footer_view(&self, cx: &mut Context<Self>) -> AnyElement {
        div()
            .px_4()
            .py_3()
            .text_center()
            .text_sm()
            .text_color(cx.theme().muted_foreground)
            .border_t_1()
            .border_color(cx.theme().border)
            .child(format!(
                "© {} Sticker Generator",
                crate::utils::time::current_year()
            ))
            .into_any_element()
    }
}

impl Render for StickerStudioWindow {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let compact = window.bounds().size.width.to_f64() <= COMPACT_WIDTH;
        let sticker = self.form.sticker();

        let card = v_flex()
            .gap_4()
            .p(px(if compact { 16.0 } else { 32.0 }))
            .child(
                div()
                    .pb_2()
                    .border_b_2()
                    .border_color(cx.theme().primary)
                    .text_2xl()
                    .font_bold()
                    .child(PAGE_TITLE),
            )
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child(PAGE_INTRO),
            )
            .child(self.form_view(cx))
            .child(self.generate_button(cx))
            .when_some(sticker.as_ref(), |view, sticker| {
                view.child(sticker_preview(sticker, compact, cx))
            });

        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.header_view(cx))
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(v_flex().overflow_y_scrollbar().child(card)),
            )
            .child(self.footer_view(cx))
    }
}

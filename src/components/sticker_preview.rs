use gpui::{AnyElement, App, FontWeight, div, prelude::*, px, rgb, white};
use gpui_component::{ActiveTheme, h_flex, v_flex};

use sticker_studio::model::sticker::GeneratedSticker;

/// Output area showing one colored glyph per sticker character on a white
/// sticker backing.
pub fn sticker_preview(sticker: &GeneratedSticker, compact: bool, cx: &App) -> AnyElement {
    let glyph_px = sticker.size.font_px(compact);

    let glyphs = sticker.chars.iter().map(|styled| {
        div()
            .text_size(px(glyph_px))
            .line_height(px(glyph_px))
            .font_weight(FontWeight::BLACK)
            .text_color(rgb(styled.color))
            .child(styled.ch.to_string())
    });

    v_flex()
        .mt_4()
        .p(px(if compact { 8.0 } else { 16.0 }))
        .gap_3()
        .items_center()
        .border_2()
        .border_color(cx.theme().border)
        .rounded_lg()
        .bg(cx.theme().muted)
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child("Generated Sticker Preview:"),
        )
        .child(
            h_flex()
                .px_3()
                .py_2()
                .rounded_xl()
                .bg(white())
                .shadow_lg()
                .font_family(sticker.font.family())
                .children(glyphs),
        )
        .into_any_element()
}

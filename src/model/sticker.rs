use std::str::FromStr;

use super::palette::Palette;
use super::validation::{TextRules, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StickerSize {
    #[default]
    Small,
    Big,
}

impl StickerSize {
    pub const ALL: [Self; 2] = [Self::Small, Self::Big];

    /// Glyph size in pixels. Compact layouts (narrow windows) scale both sizes down.
    pub fn font_px(&self, compact: bool) -> f32 {
        match (self, compact) {
            (Self::Small, false) => 40.0,
            (Self::Big, false) => 64.0,
            (Self::Small, true) => 32.0,
            (Self::Big, true) => 48.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Big => "Big",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StickerFont {
    #[default]
    KidsBus,
    BiscuitGlitch,
    SuperJoyful,
}

impl StickerFont {
    pub const ALL: [Self; 3] = [Self::KidsBus, Self::BiscuitGlitch, Self::SuperJoyful];

    pub fn family(&self) -> &'static str {
        match self {
            Self::KidsBus => "Kids Bus",
            Self::BiscuitGlitch => "Biscuit Glitch",
            Self::SuperJoyful => "Super Joyful",
        }
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|f| f.family().to_string()).collect()
    }
}

impl FromStr for StickerFont {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.family().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    pub ch: char,
    pub color: u32,
}

/// A sticker derived from the current form state. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSticker {
    pub chars: Vec<StyledChar>,
    pub size: StickerSize,
    pub font: StickerFont,
    pub palette: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerConfig<'a> {
    pub text: &'a str,
    pub size: StickerSize,
    pub font: StickerFont,
    pub palette: &'static Palette,
}

/// Derives the sticker for the given inputs. Returns `None` until generation
/// was requested, and whenever the text is empty or out of bounds.
pub fn render_sticker(
    generated: bool,
    config: StickerConfig<'_>,
    rules: &TextRules,
) -> Option<GeneratedSticker> {
    if !generated || config.text.is_empty() || !rules.is_within_bounds(config.text) {
        return None;
    }

    let chars = config
        .text
        .to_uppercase()
        .chars()
        .enumerate()
        .map(|(index, ch)| StyledChar {
            ch,
            color: config.palette.color_at(index),
        })
        .collect();

    Some(GeneratedSticker {
        chars,
        size: config.size,
        font: config.font,
        palette: config.palette.name,
    })
}

/// Local form state of the sticker editor.
#[derive(Debug, Clone)]
pub struct StickerForm {
    rules: TextRules,
    text: String,
    size: StickerSize,
    font: StickerFont,
    palette: &'static Palette,
    generated: bool,
    error: Option<ValidationError>,
}

impl StickerForm {
    pub const DEFAULT_TEXT: &'static str = "STICKER";

    pub fn new(initial_text: &str) -> Self {
        let rules = TextRules::STICKER;
        let text = rules.normalize(initial_text);
        let error = rules.validate(&text).err();
        Self {
            rules,
            text,
            size: StickerSize::default(),
            font: StickerFont::default(),
            palette: Palette::default_palette(),
            generated: false,
            error,
        }
    }

    pub fn rules(&self) -> &TextRules {
        &self.rules
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> StickerSize {
        self.size
    }

    pub fn font(&self) -> StickerFont {
        self.font
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Applies a text edit. Every edit hides a previously generated sticker.
    pub fn set_text(&mut self, raw: &str) {
        self.text = self.rules.normalize(raw);
        self.generated = false;
        self.error = self.rules.validate(&self.text).err();
        tracing::debug!(
            len = self.text.chars().count(),
            valid = self.error.is_none(),
            "Sticker text changed"
        );
    }

    pub fn set_size(&mut self, size: StickerSize) {
        self.size = size;
    }

    pub fn set_font(&mut self, font: StickerFont) {
        self.font = font;
    }

    pub fn set_palette(&mut self, palette: &'static Palette) {
        self.palette = palette;
    }

    pub fn can_generate(&self) -> bool {
        self.error.is_none() && self.text.chars().count() >= self.rules.min_len
    }

    /// Enables rendering of the sticker. A no-op while the text is invalid.
    pub fn generate(&mut self) -> bool {
        if self.error.is_some() || !self.rules.is_within_bounds(&self.text) {
            return false;
        }
        self.generated = true;
        tracing::debug!(
            text = %self.text,
            size = ?self.size,
            font = self.font.family(),
            palette = self.palette.name,
            "Sticker generated"
        );
        true
    }

    pub fn config(&self) -> StickerConfig<'_> {
        StickerConfig {
            text: &self.text,
            size: self.size,
            font: self.font,
            palette: self.palette,
        }
    }

    pub fn sticker(&self) -> Option<GeneratedSticker> {
        render_sticker(self.generated, self.config(), &self.rules)
    }
}

impl Default for StickerForm {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::palette::PALETTES;

    #[test]
    fn initial_state_is_valid_but_not_generated() {
        let form = StickerForm::default();
        assert_eq!(form.text(), "STICKER");
        assert!(form.error().is_none());
        assert!(form.can_generate());
        assert!(form.sticker().is_none());
        assert_eq!(form.font(), StickerFont::KidsBus);
        assert_eq!(form.size(), StickerSize::Small);
        assert_eq!(form.palette().name, "Sunset Serenity Shades");
    }

    #[test]
    fn short_text_sets_error_and_blocks_generation() {
        let mut form = StickerForm::default();
        form.set_text("hi");
        assert_eq!(form.text(), "HI");
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Text must be between 3 and 8 characters.")
        );
        assert!(!form.can_generate());
        assert!(!form.generate());
        assert!(!form.is_generated());
        assert!(form.sticker().is_none());
    }

    #[test]
    fn error_clears_once_text_is_valid_again() {
        let mut form = StickerForm::default();
        form.set_text("a");
        assert!(form.error().is_some());
        form.set_text("abc");
        assert!(form.error().is_none());
        assert!(form.generate());
    }

    #[test]
    fn expanding_uppercase_is_reported_not_cut() {
        let mut form = StickerForm::default();
        form.set_text("ßßßßß");
        assert_eq!(form.text(), "SSSSSSSSSS");
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Text must be between 3 and 8 characters.")
        );
        assert!(!form.can_generate());
        assert!(!form.generate());
        assert!(form.sticker().is_none());
    }

    #[test]
    fn text_edit_clears_generated_sticker() {
        let mut form = StickerForm::default();
        assert!(form.generate());
        assert!(form.sticker().is_some());
        form.set_text("sticker");
        assert!(!form.is_generated());
        assert!(form.sticker().is_none());
    }

    #[test]
    fn style_changes_keep_sticker_and_rederive() {
        let mut form = StickerForm::default();
        form.generate();
        let before = form.sticker().unwrap();

        form.set_size(StickerSize::Big);
        form.set_font(StickerFont::SuperJoyful);
        form.set_palette(&PALETTES[4]);

        let after = form.sticker().unwrap();
        assert_eq!(after.size, StickerSize::Big);
        assert_eq!(after.font, StickerFont::SuperJoyful);
        assert_eq!(after.palette, "Electric Rainbow Burst");
        assert_ne!(before.chars, after.chars);
        assert_eq!(after.chars[0].color, 0x01befe);
    }

    #[test]
    fn colors_cycle_through_default_palette() {
        let mut form = StickerForm::default();
        form.generate();
        let sticker = form.sticker().unwrap();
        let palette = Palette::default_palette();

        let text: String = sticker.chars.iter().map(|c| c.ch).collect();
        assert_eq!(text, "STICKER");
        for (i, c) in sticker.chars.iter().enumerate() {
            assert_eq!(c.color, palette.colors[i % palette.colors.len()]);
        }
        assert_eq!(sticker.chars[6].color, sticker.chars[0].color);
    }

    #[test]
    fn render_requires_generation_flag() {
        let config = StickerConfig {
            text: "ABC",
            size: StickerSize::Small,
            font: StickerFont::KidsBus,
            palette: Palette::default_palette(),
        };
        assert!(render_sticker(false, config, &TextRules::STICKER).is_none());
        assert!(render_sticker(true, config, &TextRules::STICKER).is_some());
        let empty = StickerConfig { text: "", ..config };
        assert!(render_sticker(true, empty, &TextRules::STICKER).is_none());
    }

    #[test]
    fn initial_text_is_normalized() {
        let form = StickerForm::new("gemini rocks");
        assert_eq!(form.text(), "GEMINI R");
        assert!(form.error().is_none());

        let form = StickerForm::new("");
        assert!(form.error().is_some());
    }

    #[test]
    fn sizes_and_fonts() {
        assert_eq!(StickerSize::Small.font_px(false), 40.0);
        assert_eq!(StickerSize::Big.font_px(false), 64.0);
        assert_eq!(StickerSize::Small.font_px(true), 32.0);
        assert_eq!(StickerSize::Big.font_px(true), 48.0);
        assert_eq!(
            "biscuit glitch".parse::<StickerFont>(),
            Ok(StickerFont::BiscuitGlitch)
        );
        assert!("Comic Sans".parse::<StickerFont>().is_err());
        assert_eq!(StickerFont::SuperJoyful.position(), 2);
    }
}

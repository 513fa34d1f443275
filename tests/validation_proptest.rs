//! Property-based tests for sticker validation and rendering.
//! These check that the invariants hold for arbitrary input, not just fixed examples.

use sticker_studio::model::palette::PALETTES;
use sticker_studio::model::sticker::{
    StickerConfig, StickerFont, StickerForm, StickerSize, render_sticker,
};
use sticker_studio::model::validation::TextRules;

proptest::proptest! {
    /// The validator reports an error exactly when the length is out of [3, 8].
    #[test]
    fn error_iff_length_out_of_bounds(s in "\\PC{0,16}") {
        let len = s.chars().count();
        let has_error = TextRules::STICKER.validate(&s).is_err();
        assert_eq!(has_error, !(3..=8).contains(&len), "input {:?} (len {})", s, len);
    }

    /// Normalized text is uppercase and never longer than the maximum.
    #[test]
    fn normalize_caps_length(s in "[a-zA-Z0-9 ]{0,20}") {
        let normalized = TextRules::STICKER.normalize(&s);
        assert!(normalized.chars().count() <= 8);
        assert_eq!(normalized, normalized.to_uppercase());
    }

    /// The cap applies to the typed characters; uppercasing happens afterwards
    /// and may lengthen the text, in which case validation reports it.
    #[test]
    fn normalize_caps_before_uppercasing(s in "[a-zäöüßﬁ ]{0,12}") {
        let rules = TextRules::STICKER;
        let normalized = rules.normalize(&s);
        let typed: String = s.chars().take(8).collect();
        assert_eq!(normalized, typed.to_uppercase());

        let mut form = StickerForm::default();
        form.set_text(&s);
        let len = normalized.chars().count();
        assert_eq!(form.error().is_some(), !(3..=8).contains(&len), "input {:?}", s);
    }

    /// Generation only ever succeeds for text that passes validation.
    #[test]
    fn generate_requires_valid_text(s in "[a-z]{0,12}") {
        let mut form = StickerForm::default();
        form.set_text(&s);
        let generated = form.generate();
        assert_eq!(generated, form.error().is_none());
        assert_eq!(form.sticker().is_some(), generated);
    }

    /// Character i is colored with palette.colors[i mod len].
    #[test]
    fn colors_cycle_by_position(text in "[A-Z]{3,8}", palette_idx in 0usize..6) {
        let palette = &PALETTES[palette_idx];
        let config = StickerConfig {
            text: &text,
            size: StickerSize::Big,
            font: StickerFont::BiscuitGlitch,
            palette,
        };
        let sticker = render_sticker(true, config, &TextRules::STICKER)
            .expect("valid text renders");
        assert_eq!(sticker.chars.len(), text.chars().count());
        for (i, styled) in sticker.chars.iter().enumerate() {
            assert_eq!(styled.color, palette.colors[i % palette.colors.len()]);
        }
    }

    /// A text edit always hides the generated sticker.
    #[test]
    fn text_edit_resets_generation(s in "[a-z]{3,8}") {
        let mut form = StickerForm::default();
        assert!(form.generate());
        form.set_text(&s);
        assert!(!form.is_generated());
        assert!(form.sticker().is_none());
    }
}

#[test]
fn sticker_example_repeats_first_color_at_position_six() {
    let mut form = StickerForm::default();
    form.set_text("STICKER");
    assert!(form.generate());
    let sticker = form.sticker().expect("sticker is generated");
    assert_eq!(sticker.chars.len(), 7);
    assert_eq!(sticker.chars[6].color, PALETTES[0].colors[0]);
}

/// A named, ordered list of colors used cyclically to color sticker characters.
///
/// Colors are stored as `0xRRGGBB` so the model stays free of any toolkit type;
/// views convert them with `gpui::rgb`.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [u32],
}

pub static PALETTES: [Palette; 6] = [
    Palette {
        name: "Sunset Serenity Shades",
        colors: &[0xffb7a1, 0xffb7a1, 0xf0bc68, 0xaab8bb, 0xc4d7d1, 0x5f9595],
    },
    Palette {
        name: "Bubblegum Beach Sunset",
        colors: &[0xff5883, 0xff91ad, 0xfec9d7, 0xb9eee1, 0x79d3be, 0x39b89a],
    },
    Palette {
        name: "Cotton Candy Skies",
        colors: &[0xcdb4db, 0xe6bedc, 0xffc8dd, 0xffafcc, 0xbde0fe, 0xa2d2ff],
    },
    Palette {
        name: "Velvet Touch Sunset",
        colors: &[0x264653, 0x2a9d8f, 0xe9c46a, 0xf4a261, 0xe76f51, 0xec8c74],
    },
    Palette {
        name: "Electric Rainbow Burst",
        colors: &[0x01befe, 0xffdd00, 0xff7d00, 0xff006d, 0xadff02, 0x8f00ff],
    },
    Palette {
        name: "Summer Sunset Paradise",
        colors: &[0xef476f, 0xf78c6b, 0xffd166, 0x00ff00, 0x118ab2, 0x073b4c],
    },
];

impl Palette {
    pub fn default_palette() -> &'static Palette {
        &PALETTES[0]
    }

    /// Looks up a palette by name, falling back to the default palette.
    pub fn find(name: &str) -> &'static Palette {
        PALETTES
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| Self::default_palette())
    }

    pub fn position(&self) -> usize {
        PALETTES
            .iter()
            .position(|p| p.name == self.name)
            .unwrap_or(0)
    }

    /// Color for the character at `index`, cycling through the palette.
    pub fn color_at(&self, index: usize) -> u32 {
        self.colors[index % self.colors.len()]
    }

    pub fn names() -> Vec<String> {
        PALETTES.iter().map(|p| p.name.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_are_unique_and_colors_non_empty() {
        for (i, a) in PALETTES.iter().enumerate() {
            assert!(!a.colors.is_empty(), "{} has no colors", a.name);
            for b in PALETTES.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Palette::find("No Such Palette"), Palette::default_palette());
        assert_eq!(
            Palette::find("Cotton Candy Skies").colors[0],
            0xcdb4db,
        );
    }

    #[test]
    fn color_at_wraps_around() {
        let palette = Palette::find("Electric Rainbow Burst");
        assert_eq!(palette.color_at(0), 0x01befe);
        assert_eq!(palette.color_at(6), 0x01befe);
        assert_eq!(palette.color_at(7), 0xffdd00);
    }

    #[test]
    fn position_matches_registry_order() {
        assert_eq!(Palette::find("Velvet Touch Sunset").position(), 3);
        assert_eq!(Palette::default_palette().position(), 0);
    }
}

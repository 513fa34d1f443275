#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageKey {
    #[default]
    Home,
    Gallery,
    About,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub content: &'static str,
}

static PAGES: [(PageKey, PageContent); 3] = [
    (
        PageKey::Home,
        PageContent {
            title: "Welcome Home",
            content: "This is the landing page. Pick a page above to see client-side routing with a short transition.",
        },
    ),
    (
        PageKey::Gallery,
        PageContent {
            title: "Sticker Gallery",
            content: "Six palettes and three fonts give every name its own sticker. Open the Sticker Studio window to design one.",
        },
    ),
    (
        PageKey::About,
        PageContent {
            title: "About This Demo",
            content: "Pages are resolved from a static registry. Switching pages waits for a fixed delay before the new content is committed.",
        },
    ),
];

impl PageKey {
    pub const ALL: [Self; 3] = [Self::Home, Self::Gallery, Self::About];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gallery => "Gallery",
            Self::About => "About",
        }
    }
}

/// Returns the registered content for `key`.
pub fn resolve(key: PageKey) -> &'static PageContent {
    PAGES
        .iter()
        .find_map(|(k, page)| (*k == key).then_some(page))
        // Every key is registered; Home is a safe landing page otherwise.
        .unwrap_or(&PAGES[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_registered() {
        for key in PageKey::ALL {
            assert!(PAGES.iter().any(|(k, _)| *k == key), "{key:?} missing");
        }
    }

    #[test]
    fn resolve_returns_matching_page() {
        assert_eq!(resolve(PageKey::Home).title, "Welcome Home");
        assert_eq!(resolve(PageKey::Gallery).title, "Sticker Gallery");
        assert_eq!(resolve(PageKey::About).title, "About This Demo");
    }

    #[test]
    fn resolve_is_stable() {
        assert!(std::ptr::eq(resolve(PageKey::About), resolve(PageKey::About)));
    }
}

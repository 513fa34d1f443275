use anyhow::anyhow;
use gpui::*;
use gpui_component::IconNamed;
use rust_embed::RustEmbed;
use std::borrow::Cow;

pub mod sticker_preview;

#[derive(RustEmbed)]
#[folder = "./assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

pub enum IconName {
    Home,
    Photo,
    Info,
    Sparkles,
    Check,
}

impl IconNamed for IconName {
    fn path(self) -> SharedString {
        match self {
            IconName::Home => "icons/home.svg".into(),
            IconName::Photo => "icons/photo.svg".into(),
            IconName::Info => "icons/information-circle.svg".into(),
            IconName::Sparkles => "icons/sparkles.svg".into(),
            IconName::Check => "icons/check.svg".into(),
        }
    }
}

//! Embedded assets for Cloud Space
//!
//! Uses rust-embed to bundle icons and other assets at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Custom icon names for Cloud Space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    /// Brand logo
    Logo,
    Cloud,
    Bolt,
    ArrowPath,
    Search,
    ShieldCheck,
    CpuChip,
    Beaker,
    Globe,
    /// Password visible
    Eye,
    /// Password masked
    EyeSlash,
    Check,
    Sun,
    Moon,
    Language,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Logo => "icons/logo.svg",
            CustomIconName::Cloud => "icons/cloud.svg",
            CustomIconName::Bolt => "icons/bolt.svg",
            CustomIconName::ArrowPath => "icons/arrow-path.svg",
            CustomIconName::Search => "icons/search.svg",
            CustomIconName::ShieldCheck => "icons/shield-check.svg",
            CustomIconName::CpuChip => "icons/cpu-chip.svg",
            CustomIconName::Beaker => "icons/beaker.svg",
            CustomIconName::Globe => "icons/globe.svg",
            CustomIconName::Eye => "icons/eye.svg",
            CustomIconName::EyeSlash => "icons/eye-slash.svg",
            CustomIconName::Check => "icons/check.svg",
            CustomIconName::Sun => "icons/sun.svg",
            CustomIconName::Moon => "icons/moon.svg",
            CustomIconName::Language => "icons/language.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_custom_icon_is_embedded() {
        let icons = [
            CustomIconName::Logo,
            CustomIconName::Cloud,
            CustomIconName::Bolt,
            CustomIconName::ArrowPath,
            CustomIconName::Search,
            CustomIconName::ShieldCheck,
            CustomIconName::CpuChip,
            CustomIconName::Beaker,
            CustomIconName::Globe,
            CustomIconName::Eye,
            CustomIconName::EyeSlash,
            CustomIconName::Check,
            CustomIconName::Sun,
            CustomIconName::Moon,
            CustomIconName::Language,
        ];
        for icon in icons {
            assert!(Assets::get(&icon.path()).is_some(), "{icon:?} missing");
        }
    }
}

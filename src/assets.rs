//! Badge Assets
//! Store badge images decoded once at startup and uploaded as egui textures.

use crate::config::AppConfig;
use egui::{ColorImage, TextureHandle, TextureOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to load badge {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// The two store badges in the download banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    PlayStore,
    AppStore,
}

impl Badge {
    /// Text shown in place of the image when it cannot be loaded.
    pub fn alt_text(self) -> &'static str {
        match self {
            Badge::PlayStore => "Play Store",
            Badge::AppStore => "App Store",
        }
    }

    fn texture_name(self) -> &'static str {
        match self {
            Badge::PlayStore => "badge_play_store",
            Badge::AppStore => "badge_app_store",
        }
    }
}

/// A badge and its texture, if the image could be loaded.
pub struct BadgeImage {
    pub badge: Badge,
    pub texture: Option<TextureHandle>,
}

impl BadgeImage {
    fn load(ctx: &egui::Context, badge: Badge, path: &Path) -> Self {
        let texture = match decode_image(path) {
            Ok(image) => {
                log::debug!("Loaded {} badge from {}", badge.alt_text(), path.display());
                Some(ctx.load_texture(badge.texture_name(), image, TextureOptions::LINEAR))
            }
            Err(e) => {
                log::warn!("{}, showing alt text", e);
                None
            }
        };
        Self { badge, texture }
    }
}

/// Badge textures for the download banner.
pub struct BadgeAssets {
    pub play_store: BadgeImage,
    pub app_store: BadgeImage,
}

impl BadgeAssets {
    pub fn load(ctx: &egui::Context, config: &AppConfig) -> Self {
        Self {
            play_store: BadgeImage::load(ctx, Badge::PlayStore, &config.play_store_badge),
            app_store: BadgeImage::load(ctx, Badge::AppStore, &config.app_store_badge),
        }
    }

    /// Badges in display order.
    pub fn iter(&self) -> impl Iterator<Item = &BadgeImage> {
        [&self.play_store, &self.app_store].into_iter()
    }
}

/// Decode an image file into RGBA pixels for egui.
pub fn decode_image(path: &Path) -> Result<ColorImage, AssetError> {
    let rgba = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge.png");
        image::RgbaImage::from_pixel(6, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.size, [6, 2]);
        assert_eq!(decoded.pixels[0], egui::Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_missing_badge_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_image(&dir.path().join("missing.png")).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_alt_text() {
        assert_eq!(Badge::PlayStore.alt_text(), "Play Store");
        assert_eq!(Badge::AppStore.alt_text(), "App Store");
    }
}

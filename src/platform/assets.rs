//! Sprite assets
//!
//! The core only needs an image's name and size: the name is handed back to
//! the renderer, the size becomes the entity's rectangle.

use std::collections::HashMap;
use std::path::PathBuf;

use glam::Vec2;

use crate::consts::ENEMY_SPRITE_SIZE;
use crate::error::{Error, Result};
use crate::sim::EnemyKind;

/// Image name of the player ship
pub const PLAYER_SPRITE: &str = "player.png";

/// A loaded image, identified by name
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHandle {
    pub name: String,
    pub size: Vec2,
}

impl ImageHandle {
    pub fn new(name: impl Into<String>, size: Vec2) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Same image drawn at a different size
    pub fn scaled(&self, size: Vec2) -> Self {
        Self {
            name: self.name.clone(),
            size,
        }
    }
}

/// Loads images by name. A missing or unreadable image is an error.
pub trait AssetProvider {
    fn load_image(&mut self, name: &str) -> Result<ImageHandle>;
}

/// Reads images from a directory on disk
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetProvider for DirAssets {
    fn load_image(&mut self, name: &str) -> Result<ImageHandle> {
        let path = self.root.join(name);
        let (width, height) = image::image_dimensions(&path).map_err(|e| Error::Asset {
            name: name.to_string(),
            reason: format!("{}: {e}", path.display()),
        })?;
        log::debug!("Loaded {} ({}x{})", name, width, height);
        Ok(ImageHandle::new(name, Vec2::new(width as f32, height as f32)))
    }
}

/// In-memory image sizes
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    sizes: HashMap<String, Vec2>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, size: Vec2) -> Self {
        self.sizes.insert(name.to_string(), size);
        self
    }

    /// Every image a sprite session needs
    pub fn sprite_set(player_size: Vec2, enemy_size: Vec2) -> Self {
        EnemyKind::ALL
            .iter()
            .fold(Self::new().with(PLAYER_SPRITE, player_size), |assets, kind| {
                assets.with(kind.sprite_name(), enemy_size)
            })
    }
}

impl AssetProvider for StaticAssets {
    fn load_image(&mut self, name: &str) -> Result<ImageHandle> {
        self.sizes
            .get(name)
            .map(|size| ImageHandle::new(name, *size))
            .ok_or_else(|| Error::Asset {
                name: name.to_string(),
                reason: "not found".to_string(),
            })
    }
}

/// Images for a sprite-style session
#[derive(Debug, Clone, PartialEq)]
pub struct Sprites {
    pub player: ImageHandle,
    basic: ImageHandle,
    fast: ImageHandle,
    slow: ImageHandle,
}

impl Sprites {
    /// Load every sprite. Enemy images are scaled to the fixed sprite size;
    /// the player keeps its natural size.
    pub fn load(assets: &mut dyn AssetProvider) -> Result<Self> {
        let enemy_size = Vec2::splat(ENEMY_SPRITE_SIZE);
        let mut enemy = |kind: EnemyKind| -> Result<ImageHandle> {
            Ok(assets.load_image(kind.sprite_name())?.scaled(enemy_size))
        };
        let basic = enemy(EnemyKind::Basic)?;
        let fast = enemy(EnemyKind::Fast)?;
        let slow = enemy(EnemyKind::Slow)?;
        let player = assets.load_image(PLAYER_SPRITE)?;
        Ok(Self {
            player,
            basic,
            fast,
            slow,
        })
    }

    pub fn enemy(&self, kind: EnemyKind) -> &ImageHandle {
        match kind {
            EnemyKind::Basic => &self.basic,
            EnemyKind::Fast => &self.fast,
            EnemyKind::Slow => &self.slow,
        }
    }
}

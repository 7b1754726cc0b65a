use std::{fmt, sync::Arc};

use image::{RgbaImage, imageops::FilterType};

use crate::foundation::core::TextureSize;
use crate::foundation::error::{FilterError, FilterResult};

/// Supported pixel formats for textures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    #[default]
    Rgba8Premul,
}

/// Texture declaration: dimensions, mip chain length and pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TextureDescriptor {
    pub format: PixelFormat,
    pub size: TextureSize,
    pub mip_count: u32,
}

impl TextureDescriptor {
    pub fn new(size: TextureSize) -> Self {
        Self {
            format: PixelFormat::Rgba8Premul,
            size,
            mip_count: 1,
        }
    }

    pub fn with_mip_count(mut self, mip_count: u32) -> Self {
        self.mip_count = mip_count;
        self
    }

    pub fn validate(&self) -> FilterResult<()> {
        if self.size.is_empty() {
            return Err(FilterError::validation(format!(
                "texture size {}x{} must be non-empty",
                self.size.width, self.size.height
            )));
        }
        let max = self.size.mip_count();
        if self.mip_count == 0 || self.mip_count > max {
            return Err(FilterError::validation(format!(
                "mip_count {} must be in 1..={max}",
                self.mip_count
            )));
        }
        Ok(())
    }
}

/// A backend image resource, shared between graph nodes through [`TextureHandle`].
///
/// Only the read-only attributes are queried by filter inputs; pixel access is a backend concern.
pub trait Texture: Send + Sync + fmt::Debug {
    fn descriptor(&self) -> &TextureDescriptor;

    /// Whether the backing storage matches the descriptor.
    fn is_valid(&self) -> bool;

    fn label(&self) -> Option<&str> {
        None
    }

    fn size(&self) -> TextureSize {
        self.descriptor().size
    }

    fn mip_count(&self) -> u32 {
        self.descriptor().mip_count
    }
}

/// Shared, thread-safe reference to a texture.
pub type TextureHandle = Arc<dyn Texture>;

/// CPU texture: one premultiplied RGBA8 image per mip level.
#[derive(Clone, Debug)]
pub struct CpuTexture {
    desc: TextureDescriptor,
    levels: Vec<RgbaImage>,
    label: Option<String>,
}

impl CpuTexture {
    /// Allocate a transparent texture with every level the descriptor declares.
    pub fn new(desc: TextureDescriptor) -> FilterResult<Self> {
        desc.validate()?;
        let levels = (0..desc.mip_count)
            .map(|level| {
                let size = desc.size.mip_size(level)?;
                Ok(RgbaImage::new(size.width, size.height))
            })
            .collect::<FilterResult<Vec<_>>>()?;
        Ok(Self {
            desc,
            levels,
            label: None,
        })
    }

    /// Wrap already premultiplied pixels as a single-level texture.
    pub fn from_image(image: RgbaImage) -> FilterResult<Self> {
        let desc = TextureDescriptor::new(TextureSize::new(image.width(), image.height()));
        desc.validate()?;
        Ok(Self {
            desc,
            levels: vec![image],
            label: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Rebuild the full mip chain from level 0.
    pub fn generate_mipmaps(&mut self) -> FilterResult<()> {
        let base = self
            .levels
            .first()
            .cloned()
            .ok_or_else(|| FilterError::validation("texture has no base level"))?;
        let count = self.desc.size.mip_count();
        let mut levels = Vec::with_capacity(count as usize);
        levels.push(base);
        for level in 1..count {
            let size = self.desc.size.mip_size(level)?;
            let next = image::imageops::resize(
                &levels[levels.len() - 1],
                size.width,
                size.height,
                FilterType::Triangle,
            );
            levels.push(next);
        }
        self.levels = levels;
        self.desc.mip_count = count;
        Ok(())
    }

    pub fn level(&self, level: u32) -> Option<&RgbaImage> {
        self.levels.get(level as usize)
    }

    pub fn into_handle(self) -> TextureHandle {
        Arc::new(self)
    }
}

impl Texture for CpuTexture {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.desc
    }

    fn is_valid(&self) -> bool {
        if self.desc.validate().is_err() || self.levels.len() != self.desc.mip_count as usize {
            return false;
        }
        self.levels.iter().enumerate().all(|(idx, img)| {
            self.desc
                .size
                .mip_size(idx as u32)
                .is_ok_and(|s| s.width == img.width() && s.height == img.height())
        })
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/renderer/texture.rs"]
mod tests;

use crate::foundation::error::{FilterError, FilterResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Pixel dimensions of a texture.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of levels in a full mip chain down to 1x1 (0 for an empty size).
    pub fn mip_count(self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        u32::BITS - self.width.max(self.height).leading_zeros()
    }

    /// Size of mip `level`, clamped to at least one pixel per axis.
    pub fn mip_size(self, level: u32) -> FilterResult<Self> {
        if level >= self.mip_count() {
            return Err(FilterError::validation(format!(
                "mip level {level} out of range for {}x{}",
                self.width, self.height
            )));
        }
        Ok(Self {
            width: (self.width >> level).max(1),
            height: (self.height >> level).max(1),
        })
    }

    /// `[0, 0, width, height]` in pixel space.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

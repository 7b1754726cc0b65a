use crate::{
    foundation::core::{Affine, Point, Rect},
    foundation::geometry::{rect_corners, transform_bounds},
    renderer::sampler::SamplerDescriptor,
    renderer::texture::TextureHandle,
};

#[derive(Clone, Debug)]
/// A texture plus the transform and sampler it should be drawn with.
///
/// Only [`Snapshot::new`] builds one, so the texture always has finite, non-empty bounds under
/// an invertible transform.
pub struct Snapshot {
    texture: TextureHandle,
    transform: Affine,
    sampler_descriptor: SamplerDescriptor,
    opacity: f32,
}

impl Snapshot {
    /// Build a snapshot with the default sampler, or `None` when the texture has no coverage
    /// under `transform`.
    pub fn new(texture: TextureHandle, transform: Affine) -> Option<Self> {
        transform_bounds(texture.size().to_rect(), transform)?;
        Some(Self {
            texture,
            transform,
            sampler_descriptor: SamplerDescriptor::default(),
            opacity: 1.0,
        })
    }

    pub fn with_sampler(mut self, sampler_descriptor: SamplerDescriptor) -> Self {
        self.sampler_descriptor = sampler_descriptor;
        self
    }

    /// Clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    /// Maps texture pixel space into entity space.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn sampler_descriptor(&self) -> &SamplerDescriptor {
        &self.sampler_descriptor
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Bounds of the texture in entity space.
    pub fn coverage(&self) -> Option<Rect> {
        transform_bounds(self.texture.size().to_rect(), self.transform)
    }

    /// Maps entity-space points to normalized texture coordinates.
    pub fn uv_transform(&self) -> Option<Affine> {
        let size = self.texture.size();
        if size.is_empty() {
            return None;
        }
        let to_unit = Affine::scale_non_uniform(
            1.0 / f64::from(size.width),
            1.0 / f64::from(size.height),
        );
        Some(to_unit * self.transform.inverse())
    }

    /// `coverage` corners in UV space: top-left, top-right, bottom-left, bottom-right.
    pub fn coverage_uvs(&self, coverage: Rect) -> Option<[Point; 4]> {
        let uv = self.uv_transform()?;
        Some(rect_corners(coverage).map(|p| uv * p))
    }
}

#[cfg(test)]
#[path = "../tests/unit/snapshot.rs"]
mod tests;

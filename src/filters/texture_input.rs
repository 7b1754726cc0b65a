use crate::{
    entity::Entity,
    filters::input::{FilterInputNode, Input},
    foundation::core::{Affine, Rect},
    foundation::error::{FilterError, FilterResult},
    foundation::geometry::transform_bounds,
    renderer::context::RenderContext,
    renderer::sampler::SamplerDescriptor,
    renderer::texture::TextureHandle,
    snapshot::Snapshot,
};

#[derive(Clone, Debug)]
/// Graph leaf backed by a single texture placed with a fixed local transform.
pub struct TextureFilterInput {
    texture: TextureHandle,
    local_transform: Affine,
}

impl TextureFilterInput {
    pub const TRILINEAR_SAMPLER_LABEL: &'static str = "TextureFilterInput Trilinear Sampler";

    /// Fails when the texture is invalid or its descriptor is empty or malformed.
    pub fn new(texture: TextureHandle, local_transform: Affine) -> FilterResult<Self> {
        if !texture.is_valid() {
            return Err(FilterError::validation(format!(
                "texture filter input requires a valid texture (label: {:?})",
                texture.label()
            )));
        }
        texture.descriptor().validate()?;
        Ok(Self {
            texture,
            local_transform,
        })
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }
}

impl FilterInputNode for TextureFilterInput {
    fn input(&self) -> Input {
        Input::Texture(self.texture.clone())
    }

    #[tracing::instrument(level = "trace", skip_all, fields(mip_count = self.texture.mip_count()))]
    fn snapshot(&self, _ctx: &dyn RenderContext, entity: &Entity) -> Option<Snapshot> {
        // Same bounds check as `coverage`.
        let snapshot = Snapshot::new(self.texture.clone(), self.transform(entity))?;
        if self.texture.mip_count() > 1 {
            tracing::debug!("sampling mipmapped texture trilinearly");
            return Some(
                snapshot.with_sampler(SamplerDescriptor::trilinear(Self::TRILINEAR_SAMPLER_LABEL)),
            );
        }
        Some(snapshot)
    }

    fn coverage(&self, entity: &Entity) -> Option<Rect> {
        transform_bounds(self.texture.size().to_rect(), self.transform(entity))
    }

    fn local_transform(&self, _entity: &Entity) -> Affine {
        self.local_transform
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/texture_input.rs"]
mod tests;

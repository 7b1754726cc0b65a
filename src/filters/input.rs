use std::sync::Arc;

use crate::{
    entity::Entity,
    filters::contents::FilterContents,
    filters::contents_input::ContentsFilterInput,
    filters::texture_input::TextureFilterInput,
    foundation::core::{Affine, Rect},
    foundation::error::FilterResult,
    renderer::context::RenderContext,
    renderer::texture::TextureHandle,
    snapshot::Snapshot,
};

#[derive(Clone, Debug)]
/// The producer behind a filter input.
pub enum Input {
    /// Graph leaf: a backing texture.
    Texture(TextureHandle),
    /// Interior node: the output of another filter.
    FilterContents(Arc<dyn FilterContents>),
}

impl Input {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Input::Texture(_))
    }
}

/// Query surface every filter-graph node exposes to the evaluating engine.
///
/// All queries are pure: repeated calls with the same entity return identical results and leave
/// the node unchanged. `coverage` must agree with the transform `snapshot` produces.
pub trait FilterInputNode {
    /// The underlying producer. Engines recurse on [`Input::FilterContents`].
    fn input(&self) -> Input;

    /// Renderable output in entity space, or `None` when the node contributes nothing.
    fn snapshot(&self, ctx: &dyn RenderContext, entity: &Entity) -> Option<Snapshot>;

    /// Bounds of the node's output in entity space. Never touches the backend.
    fn coverage(&self, entity: &Entity) -> Option<Rect>;

    /// The node's own placement, applied before the entity transform.
    fn local_transform(&self, entity: &Entity) -> Affine;

    fn transform(&self, entity: &Entity) -> Affine {
        entity.transform * self.local_transform(entity)
    }
}

#[derive(Clone, Debug)]
/// A filter-graph node: one of the known input kinds.
pub enum FilterInput {
    Texture(TextureFilterInput),
    Contents(ContentsFilterInput),
}

impl FilterInput {
    /// Wrap `input` with an identity local transform.
    pub fn make(input: Input) -> FilterResult<Self> {
        Ok(match input {
            Input::Texture(texture) => TextureFilterInput::new(texture, Affine::IDENTITY)?.into(),
            Input::FilterContents(contents) => ContentsFilterInput::new(contents).into(),
        })
    }

    pub fn make_vec(inputs: impl IntoIterator<Item = Input>) -> FilterResult<Vec<Self>> {
        inputs.into_iter().map(Self::make).collect()
    }
}

impl From<TextureFilterInput> for FilterInput {
    fn from(value: TextureFilterInput) -> Self {
        FilterInput::Texture(value)
    }
}

impl From<ContentsFilterInput> for FilterInput {
    fn from(value: ContentsFilterInput) -> Self {
        FilterInput::Contents(value)
    }
}

impl FilterInputNode for FilterInput {
    fn input(&self) -> Input {
        match self {
            FilterInput::Texture(i) => i.input(),
            FilterInput::Contents(i) => i.input(),
        }
    }

    fn snapshot(&self, ctx: &dyn RenderContext, entity: &Entity) -> Option<Snapshot> {
        match self {
            FilterInput::Texture(i) => i.snapshot(ctx, entity),
            FilterInput::Contents(i) => i.snapshot(ctx, entity),
        }
    }

    fn coverage(&self, entity: &Entity) -> Option<Rect> {
        match self {
            FilterInput::Texture(i) => i.coverage(entity),
            FilterInput::Contents(i) => i.coverage(entity),
        }
    }

    fn local_transform(&self, entity: &Entity) -> Affine {
        match self {
            FilterInput::Texture(i) => i.local_transform(entity),
            FilterInput::Contents(i) => i.local_transform(entity),
        }
    }

    fn transform(&self, entity: &Entity) -> Affine {
        match self {
            FilterInput::Texture(i) => i.transform(entity),
            FilterInput::Contents(i) => i.transform(entity),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/input.rs"]
mod tests;

use crate::foundation::core::Affine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Blend mode used when the entity's output is composited.
pub enum BlendMode {
    /// Standard “source over destination” (premultiplied alpha).
    #[default]
    SourceOver,
    /// Replace the destination.
    Source,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Caller-owned drawing context.
///
/// Filter inputs only read [`Entity::transform`]; the remaining fields belong to whoever draws
/// the result.
pub struct Entity {
    /// Accumulated transform from the entity's local space to its parent space.
    pub transform: Affine,
    /// Stencil depth of the enclosing clip stack.
    pub clip_depth: u32,
    /// Blend mode for compositing.
    pub blend_mode: BlendMode,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            clip_depth: 0,
            blend_mode: BlendMode::SourceOver,
        }
    }
}

impl Entity {
    /// Entity with the given accumulated transform and default state.
    pub fn new(transform: Affine) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }
}

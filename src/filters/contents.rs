use std::fmt;

use crate::{
    entity::Entity,
    filters::input::{FilterInput, FilterInputNode},
    foundation::core::{Affine, Rect},
    foundation::geometry::union_coverage,
    renderer::context::RenderContext,
    snapshot::Snapshot,
};

/// An effect that produces an image from its own filter inputs.
///
/// Wrapped in [`crate::ContentsFilterInput`] it becomes an interior node of the filter graph.
/// Rendering happens under an entity whose transform already includes
/// [`FilterContents::local_transform`].
pub trait FilterContents: Send + Sync + fmt::Debug {
    /// Diagnostic name.
    fn label(&self) -> &str;

    fn inputs(&self) -> &[FilterInput];

    /// Placement of the effect relative to the parent transform.
    fn local_transform(&self, _parent: Affine) -> Affine {
        Affine::IDENTITY
    }

    fn transform(&self, parent: Affine) -> Affine {
        parent * self.local_transform(parent)
    }

    /// Bounds of the effect's output. Defaults to the union of the input coverages.
    fn filter_coverage(&self, inputs: &[FilterInput], entity: &Entity) -> Option<Rect> {
        union_coverage(inputs.iter().map(|input| input.coverage(entity)))
    }

    /// Produce the effect's output for `coverage`, which is never empty.
    fn render_filter(
        &self,
        ctx: &dyn RenderContext,
        inputs: &[FilterInput],
        entity: &Entity,
        coverage: Rect,
    ) -> Option<Snapshot>;

    fn coverage(&self, entity: &Entity) -> Option<Rect> {
        let local = entity.with_transform(self.transform(entity.transform));
        self.filter_coverage(self.inputs(), &local)
    }

    /// Render unless the effect currently covers nothing.
    fn render_to_snapshot(&self, ctx: &dyn RenderContext, entity: &Entity) -> Option<Snapshot> {
        let local = entity.with_transform(self.transform(entity.transform));
        let Some(coverage) = self.filter_coverage(self.inputs(), &local) else {
            tracing::trace!(filter = self.label(), "empty coverage, skipping render");
            return None;
        };
        self.render_filter(ctx, self.inputs(), &local, coverage)
    }
}

use std::sync::Arc;

use crate::{
    entity::Entity,
    filters::contents::FilterContents,
    filters::input::{FilterInputNode, Input},
    foundation::core::{Affine, Rect},
    renderer::context::RenderContext,
    snapshot::Snapshot,
};

#[derive(Clone, Debug)]
/// Interior node exposing another filter's output as an input.
pub struct ContentsFilterInput {
    contents: Arc<dyn FilterContents>,
}

impl ContentsFilterInput {
    pub fn new(contents: Arc<dyn FilterContents>) -> Self {
        Self { contents }
    }

    pub fn contents(&self) -> &Arc<dyn FilterContents> {
        &self.contents
    }
}

impl FilterInputNode for ContentsFilterInput {
    fn input(&self) -> Input {
        Input::FilterContents(self.contents.clone())
    }

    #[tracing::instrument(level = "trace", skip_all, fields(filter = self.contents.label()))]
    fn snapshot(&self, ctx: &dyn RenderContext, entity: &Entity) -> Option<Snapshot> {
        self.contents.render_to_snapshot(ctx, entity)
    }

    fn coverage(&self, entity: &Entity) -> Option<Rect> {
        self.contents.coverage(entity)
    }

    fn local_transform(&self, entity: &Entity) -> Affine {
        self.contents.local_transform(entity.transform)
    }

    fn transform(&self, entity: &Entity) -> Affine {
        self.contents.transform(entity.transform)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/contents_input.rs"]
mod tests;

//! Filters that only reposition their input.

use crate::{
    entity::Entity,
    filters::contents::FilterContents,
    filters::input::{FilterInput, FilterInputNode},
    foundation::core::{Affine, Rect},
    foundation::geometry::union_coverage,
    renderer::context::RenderContext,
    renderer::sampler::SamplerDescriptor,
    snapshot::Snapshot,
};

#[derive(Debug)]
/// Applies `matrix` in entity space, after the entity transform.
pub struct MatrixFilterContents {
    inputs: Vec<FilterInput>,
    matrix: Affine,
    sampler: Option<SamplerDescriptor>,
}

impl MatrixFilterContents {
    pub fn new(input: FilterInput, matrix: Affine) -> Self {
        Self {
            inputs: vec![input],
            matrix,
            sampler: None,
        }
    }

    /// Override the sampler of the produced snapshot.
    pub fn with_sampler(mut self, sampler: SamplerDescriptor) -> Self {
        self.sampler = Some(sampler);
        self
    }

    fn input_entity(&self, entity: &Entity) -> Entity {
        entity.with_transform(self.matrix * entity.transform)
    }
}

impl FilterContents for MatrixFilterContents {
    fn label(&self) -> &str {
        "MatrixFilter"
    }

    fn inputs(&self) -> &[FilterInput] {
        &self.inputs
    }

    fn filter_coverage(&self, inputs: &[FilterInput], entity: &Entity) -> Option<Rect> {
        let entity = self.input_entity(entity);
        union_coverage(inputs.iter().map(|input| input.coverage(&entity)))
    }

    fn render_filter(
        &self,
        ctx: &dyn RenderContext,
        inputs: &[FilterInput],
        entity: &Entity,
        _coverage: Rect,
    ) -> Option<Snapshot> {
        let snapshot = inputs.first()?.snapshot(ctx, &self.input_entity(entity))?;
        Some(match &self.sampler {
            Some(sampler) => snapshot.with_sampler(sampler.clone()),
            None => snapshot,
        })
    }
}

#[derive(Debug)]
/// Places its input with `matrix` in the entity's local space.
pub struct LocalMatrixFilterContents {
    inputs: Vec<FilterInput>,
    matrix: Affine,
}

impl LocalMatrixFilterContents {
    pub fn new(input: FilterInput, matrix: Affine) -> Self {
        Self {
            inputs: vec![input],
            matrix,
        }
    }
}

impl FilterContents for LocalMatrixFilterContents {
    fn label(&self) -> &str {
        "LocalMatrixFilter"
    }

    fn inputs(&self) -> &[FilterInput] {
        &self.inputs
    }

    fn local_transform(&self, _parent: Affine) -> Affine {
        self.matrix
    }

    fn render_filter(
        &self,
        ctx: &dyn RenderContext,
        inputs: &[FilterInput],
        entity: &Entity,
        _coverage: Rect,
    ) -> Option<Snapshot> {
        inputs.first()?.snapshot(ctx, entity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/matrix.rs"]
mod tests;

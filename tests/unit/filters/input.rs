use super::*;
use crate::{
    filters::matrix::LocalMatrixFilterContents,
    foundation::core::{TextureSize, Vec2},
    renderer::context::{CpuContext, CpuContextOpts},
    renderer::texture::{CpuTexture, TextureDescriptor},
};

fn texture(w: u32, h: u32) -> TextureHandle {
    CpuTexture::new(TextureDescriptor::new(TextureSize::new(w, h)))
        .unwrap()
        .into_handle()
}

#[test]
fn make_picks_variant_from_input_tag() {
    let leaf = FilterInput::make(Input::Texture(texture(4, 4))).unwrap();
    assert!(matches!(leaf, FilterInput::Texture(_)));
    assert!(leaf.input().is_leaf());

    let contents: Arc<dyn FilterContents> = Arc::new(LocalMatrixFilterContents::new(
        leaf.clone(),
        Affine::scale(2.0),
    ));
    let node = FilterInput::make(Input::FilterContents(contents)).unwrap();
    assert!(matches!(node, FilterInput::Contents(_)));
    assert!(!node.input().is_leaf());
}

#[test]
fn make_vec_preserves_order() {
    let inputs = FilterInput::make_vec([
        Input::Texture(texture(4, 4)),
        Input::Texture(texture(8, 2)),
    ])
    .unwrap();
    let entity = Entity::default();
    assert_eq!(inputs.len(), 2);
    assert_eq!(
        inputs[1].coverage(&entity),
        Some(Rect::new(0.0, 0.0, 8.0, 2.0))
    );
}

#[test]
fn enum_dispatch_matches_variant() {
    let leaf =
        TextureFilterInput::new(texture(10, 20), Affine::translate(Vec2::new(1.0, 1.0))).unwrap();
    let node = FilterInput::from(leaf.clone());
    let entity = Entity::new(Affine::rotate(0.3));
    let ctx = CpuContext::new(CpuContextOpts::default()).unwrap();

    assert_eq!(node.coverage(&entity), leaf.coverage(&entity));
    assert_eq!(node.local_transform(&entity), leaf.local_transform(&entity));
    assert_eq!(node.transform(&entity), leaf.transform(&entity));
    assert_eq!(
        node.snapshot(&ctx, &entity).map(|s| s.transform()),
        leaf.snapshot(&ctx, &entity).map(|s| s.transform())
    );
}

#[test]
fn transform_applies_local_before_entity() {
    let local = Affine::translate(Vec2::new(10.0, 0.0));
    let node = FilterInput::from(TextureFilterInput::new(texture(1, 1), local).unwrap());
    let entity = Entity::new(Affine::scale(2.0));
    assert_eq!(node.transform(&entity) * crate::Point::ORIGIN, crate::Point::new(20.0, 0.0));
}

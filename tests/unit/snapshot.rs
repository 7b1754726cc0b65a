use super::*;
use crate::{
    foundation::core::{TextureSize, Vec2},
    renderer::sampler::MipFilter,
    renderer::texture::{CpuTexture, TextureDescriptor},
};

fn texture(w: u32, h: u32) -> TextureHandle {
    CpuTexture::new(TextureDescriptor::new(TextureSize::new(w, h)))
        .unwrap()
        .into_handle()
}

#[test]
fn new_uses_default_sampler_and_full_opacity() {
    let s = Snapshot::new(texture(4, 4), Affine::IDENTITY).unwrap();
    assert_eq!(s.opacity(), 1.0);
    assert_eq!(s.sampler_descriptor().mip_filter, MipFilter::Base);
    assert_eq!(
        s.sampler_descriptor().label.as_deref(),
        Some(SamplerDescriptor::DEFAULT_LABEL)
    );
}

#[test]
fn degenerate_transform_is_refused() {
    assert!(Snapshot::new(texture(4, 4), Affine::scale(0.0)).is_none());
}

#[test]
fn coverage_is_transformed_texture_rect() {
    let t = Affine::translate(Vec2::new(5.0, 5.0)) * Affine::scale(2.0);
    let s = Snapshot::new(texture(10, 20), t).unwrap();
    assert_eq!(s.coverage(), Some(Rect::new(5.0, 5.0, 25.0, 45.0)));
}

#[test]
fn coverage_uvs_map_own_coverage_to_unit_square() {
    let t = Affine::translate(Vec2::new(10.0, 0.0)) * Affine::scale(0.5);
    let s = Snapshot::new(texture(100, 50), t).unwrap();
    let coverage = s.coverage().unwrap();
    let uvs = s.coverage_uvs(coverage).unwrap();
    let expected = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    ];
    for (got, want) in uvs.iter().zip(expected) {
        assert!((got.x - want.x).abs() < 1e-12, "{got:?} vs {want:?}");
        assert!((got.y - want.y).abs() < 1e-12, "{got:?} vs {want:?}");
    }
}

#[test]
fn sub_rect_maps_to_partial_uvs() {
    let s = Snapshot::new(texture(100, 50), Affine::IDENTITY).unwrap();
    let uvs = s.coverage_uvs(Rect::new(50.0, 25.0, 100.0, 50.0)).unwrap();
    assert_eq!(uvs[0], Point::new(0.5, 0.5));
    assert_eq!(uvs[3], Point::new(1.0, 1.0));
}

#[test]
fn overflowing_bounds_are_refused() {
    let extreme = Affine::new([1.7e308, 0.0, 0.0, 1e-308, 0.0, 0.0]);
    assert!(Snapshot::new(texture(2, 2), extreme).is_none());
}

#[test]
fn opacity_is_clamped() {
    let s = Snapshot::new(texture(4, 4), Affine::IDENTITY).unwrap();
    assert_eq!(s.clone().with_opacity(0.25).opacity(), 0.25);
    assert_eq!(s.clone().with_opacity(2.0).opacity(), 1.0);
    assert_eq!(s.with_opacity(-1.0).opacity(), 0.0);
}

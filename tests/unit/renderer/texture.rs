use super::*;

#[test]
fn descriptor_rejects_empty_and_oversized_mip_chains() {
    assert!(TextureDescriptor::new(TextureSize::new(0, 4)).validate().is_err());
    let desc = TextureDescriptor::new(TextureSize::new(8, 4));
    assert!(desc.validate().is_ok());
    assert!(desc.with_mip_count(4).validate().is_ok());
    assert!(desc.with_mip_count(5).validate().is_err());
    assert!(desc.with_mip_count(0).validate().is_err());
}

#[test]
fn new_allocates_every_declared_level() {
    let desc = TextureDescriptor::new(TextureSize::new(8, 4)).with_mip_count(3);
    let tex = CpuTexture::new(desc).unwrap();
    assert!(tex.is_valid());
    assert_eq!(tex.mip_count(), 3);
    assert_eq!(tex.level(2).map(|l| l.dimensions()), Some((2, 1)));
    assert!(tex.level(3).is_none());
}

#[test]
fn generate_mipmaps_builds_full_chain() {
    let mut tex = CpuTexture::from_image(RgbaImage::from_pixel(
        100,
        50,
        image::Rgba([255, 0, 0, 255]),
    ))
    .unwrap();
    assert_eq!(tex.mip_count(), 1);
    tex.generate_mipmaps().unwrap();
    assert_eq!(tex.mip_count(), 7);
    assert!(tex.is_valid());
    assert_eq!(tex.level(6).map(|l| l.dimensions()), Some((1, 1)));
}

#[test]
fn from_image_rejects_empty_pixels() {
    assert!(CpuTexture::from_image(RgbaImage::new(0, 0)).is_err());
}

#[test]
fn labels_are_optional() {
    let tex = CpuTexture::from_image(RgbaImage::new(1, 1)).unwrap();
    assert_eq!(tex.label(), None);
    let tex = tex.with_label("atlas");
    assert_eq!(tex.label(), Some("atlas"));
}

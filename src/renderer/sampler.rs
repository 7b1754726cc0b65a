use std::borrow::Cow;

/// Filtering within a single mip level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinMagFilter {
    Nearest,
    #[default]
    Linear,
}

/// Filtering across mip levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MipFilter {
    /// Sample level 0 only.
    #[default]
    Base,
    Nearest,
    Linear,
}

/// How a snapshot's texture is sampled when drawn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SamplerDescriptor {
    /// Diagnostic name surfaced by backend debuggers.
    pub label: Option<Cow<'static, str>>,
    pub min_filter: MinMagFilter,
    pub mag_filter: MinMagFilter,
    pub mip_filter: MipFilter,
}

impl SamplerDescriptor {
    pub const DEFAULT_LABEL: &'static str = "Default Snapshot Sampler";

    pub fn new(
        label: impl Into<Cow<'static, str>>,
        min_filter: MinMagFilter,
        mag_filter: MinMagFilter,
        mip_filter: MipFilter,
    ) -> Self {
        Self {
            label: Some(label.into()),
            min_filter,
            mag_filter,
            mip_filter,
        }
    }

    /// Bilinear within a level, linear between levels.
    pub fn trilinear(label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(
            label,
            MinMagFilter::Linear,
            MinMagFilter::Linear,
            MipFilter::Linear,
        )
    }

    pub fn uses_mipmaps(&self) -> bool {
        self.mip_filter != MipFilter::Base
    }
}

impl Default for SamplerDescriptor {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_LABEL,
            MinMagFilter::Linear,
            MinMagFilter::Linear,
            MipFilter::Base,
        )
    }
}

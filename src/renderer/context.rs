use crate::{
    foundation::core::TextureSize,
    foundation::error::{FilterError, FilterResult},
    renderer::texture::{CpuTexture, PixelFormat, TextureDescriptor, TextureHandle},
};

/// Static facts about a rendering backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Capabilities {
    pub default_color_format: PixelFormat,
    pub max_texture_size: TextureSize,
    pub supports_mipmaps: bool,
}

/// Backend handle passed through [`crate::FilterInputNode::snapshot`].
///
/// Filter inputs never issue draw calls; interior nodes use the context to allocate the
/// textures their effects render into.
pub trait RenderContext: Send + Sync {
    fn capabilities(&self) -> &Capabilities;

    fn color_attachment_format(&self) -> PixelFormat {
        self.capabilities().default_color_format
    }

    fn create_texture(&self, desc: &TextureDescriptor) -> FilterResult<TextureHandle>;

    /// Single-level texture in the color attachment format, or `None` if the backend refuses.
    fn create_render_target(&self, size: TextureSize) -> Option<TextureHandle> {
        let desc = TextureDescriptor {
            format: self.color_attachment_format(),
            size,
            mip_count: 1,
        };
        self.create_texture(&desc)
            .inspect_err(|err| tracing::warn!(%err, ?size, "render target allocation failed"))
            .ok()
    }
}

/// Configuration for [`CpuContext`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CpuContextOpts {
    pub default_color_format: PixelFormat,
    /// Largest width or height a texture may have.
    pub max_texture_dimension: u32,
    pub mipmaps: bool,
}

impl Default for CpuContextOpts {
    fn default() -> Self {
        Self {
            default_color_format: PixelFormat::Rgba8Premul,
            max_texture_dimension: 8192,
            mipmaps: true,
        }
    }
}

impl CpuContextOpts {
    pub fn from_json(s: &str) -> FilterResult<Self> {
        serde_json::from_str(s).map_err(|e| FilterError::serde(e.to_string()))
    }
}

/// In-memory backend allocating [`CpuTexture`]s.
#[derive(Clone, Debug)]
pub struct CpuContext {
    caps: Capabilities,
}

impl CpuContext {
    pub fn new(opts: CpuContextOpts) -> FilterResult<Self> {
        if opts.max_texture_dimension == 0 {
            return Err(FilterError::validation("max_texture_dimension must be > 0"));
        }
        Ok(Self {
            caps: Capabilities {
                default_color_format: opts.default_color_format,
                max_texture_size: TextureSize::new(
                    opts.max_texture_dimension,
                    opts.max_texture_dimension,
                ),
                supports_mipmaps: opts.mipmaps,
            },
        })
    }
}

impl RenderContext for CpuContext {
    fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    #[tracing::instrument(skip(self))]
    fn create_texture(&self, desc: &TextureDescriptor) -> FilterResult<TextureHandle> {
        let max = self.caps.max_texture_size;
        if desc.size.width > max.width || desc.size.height > max.height {
            return Err(FilterError::backend(format!(
                "texture {}x{} exceeds max {}x{}",
                desc.size.width, desc.size.height, max.width, max.height
            )));
        }
        if desc.mip_count > 1 && !self.caps.supports_mipmaps {
            return Err(FilterError::backend("mipmapped textures are disabled"));
        }
        Ok(CpuTexture::new(*desc)?.into_handle())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/renderer/context.rs"]
mod tests;

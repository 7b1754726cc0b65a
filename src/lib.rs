//! Filter-graph inputs for Wavyte.
//!
//! A filter graph is a directed graph of image effects. Its nodes are [`FilterInput`]s:
//!
//! - [`TextureFilterInput`]: a leaf wrapping one backing texture
//! - [`ContentsFilterInput`]: an interior node wrapping another effect ([`FilterContents`])
//!
//! Every node answers the same four queries through [`FilterInputNode`]: its underlying
//! [`Input`], a [`Snapshot`] (texture + transform + sampler) in entity space, the
//! [`coverage`](FilterInputNode::coverage) rectangle it occupies, and its local transform.
//!
//! Geometry comes from `kurbo`. Empty results are `None`; construction-time precondition
//! failures are [`FilterError`]s.
#![forbid(unsafe_code)]

mod entity;
mod filters;
mod foundation;
mod renderer;
mod snapshot;

pub use entity::{BlendMode, Entity};
pub use filters::contents::FilterContents;
pub use filters::contents_input::ContentsFilterInput;
pub use filters::input::{FilterInput, FilterInputNode, Input};
pub use filters::matrix::{LocalMatrixFilterContents, MatrixFilterContents};
pub use filters::texture_input::TextureFilterInput;
pub use foundation::core::{Affine, Point, Rect, TextureSize, Vec2};
pub use foundation::error::{FilterError, FilterResult};
pub use foundation::geometry::{is_invertible, rect_corners, transform_bounds, union_coverage};
pub use renderer::context::{Capabilities, CpuContext, CpuContextOpts, RenderContext};
pub use renderer::sampler::{MinMagFilter, MipFilter, SamplerDescriptor};
pub use renderer::texture::{CpuTexture, PixelFormat, Texture, TextureDescriptor, TextureHandle};
pub use snapshot::Snapshot;

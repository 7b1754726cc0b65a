pub(crate) mod context;
pub(crate) mod sampler;
pub(crate) mod texture;

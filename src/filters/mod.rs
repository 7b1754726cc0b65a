pub(crate) mod contents;
pub(crate) mod contents_input;
pub(crate) mod input;
pub(crate) mod matrix;
pub(crate) mod texture_input;

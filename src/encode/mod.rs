//! Encoding: frame sinks, the GIF writer, palette reduction and the size guard.

pub(crate) mod budget;
pub(crate) mod gif;
pub(crate) mod quantize;
pub(crate) mod sink;

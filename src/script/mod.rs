//! Script model and the sequence builder's phase logic. Nothing here touches pixels.

pub(crate) mod demo;
pub(crate) mod line;
pub(crate) mod phases;
pub(crate) mod storyboard;
pub(crate) mod transcript;

use crate::foundation::error::{ReelError, ReelResult};

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Return the color as an opaque RGBA8 quadruple.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest edge a GIF logical screen can describe.
    pub const MAX_EDGE: u32 = u16::MAX as u32;

    /// Create a validated canvas: both edges in `1..=65535`.
    pub fn new(width: u32, height: u32) -> ReelResult<Self> {
        if width == 0 || height == 0 {
            return Err(ReelError::validation("canvas width/height must be non-zero"));
        }
        if width > Self::MAX_EDGE || height > Self::MAX_EDGE {
            return Err(ReelError::validation(format!(
                "canvas {width}x{height} exceeds the {max}px limit",
                max = Self::MAX_EDGE
            )));
        }
        Ok(Self { width, height })
    }

    /// Byte length of a tightly packed RGBA8 buffer for this canvas.
    pub fn rgba_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// How long a frame stays on screen, in milliseconds. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameDuration(u32);

impl FrameDuration {
    /// Create a validated duration.
    pub fn new(ms: u32) -> ReelResult<Self> {
        if ms == 0 {
            return Err(ReelError::validation("frame duration must be > 0 ms"));
        }
        Ok(Self(ms))
    }

    /// Duration in milliseconds.
    pub fn as_millis(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

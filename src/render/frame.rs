use crate::foundation::core::{Canvas, FrameDuration};
use crate::foundation::error::{ReelError, ReelResult};

/// A rendered frame as opaque RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major. Alpha is always 255.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Wrap a pixel buffer, checking its length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> ReelResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(ReelError::validation(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGBA8 value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert into an `image` buffer.
    pub fn to_rgba_image(&self) -> ReelResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| ReelError::validation("frame buffer does not match its dimensions"))
    }
}

/// A frame and how long it is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimedFrame {
    /// Pixels.
    pub frame: FrameRGBA,
    /// Display time.
    pub hold: FrameDuration,
}

/// Frames in playback order, all the same size.
#[derive(Clone, Debug)]
pub struct Sequence {
    canvas: Canvas,
    frames: Vec<TimedFrame>,
}

impl Sequence {
    /// An empty sequence whose frames must match `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            frames: Vec::new(),
        }
    }

    /// Append a frame; frames of any other size are rejected.
    pub fn push(&mut self, frame: FrameRGBA, hold: FrameDuration) -> ReelResult<()> {
        if frame.width != self.canvas.width || frame.height != self.canvas.height {
            return Err(ReelError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.canvas.width, self.canvas.height
            )));
        }
        self.frames.push(TimedFrame { frame, hold });
        Ok(())
    }

    /// Shared frame dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[TimedFrame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when the sequence has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Display time of every frame, in order.
    pub fn durations(&self) -> Vec<FrameDuration> {
        self.frames.iter().map(|f| f.hold).collect()
    }

    /// A sequence with the same timing whose frames are `f(frame)`.
    pub fn map_frames(
        &self,
        mut f: impl FnMut(&FrameRGBA) -> ReelResult<FrameRGBA>,
    ) -> ReelResult<Self> {
        let mut out = Self::new(self.canvas);
        for tf in &self.frames {
            out.push(f(&tf.frame)?, tf.hold)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;

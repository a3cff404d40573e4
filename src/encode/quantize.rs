//! Median-cut color quantization.
//!
//! Deterministic: the histogram is sorted before any split, and ties between boxes resolve to the
//! earliest box. Frames that already fit the palette are returned unchanged.

use std::collections::HashMap;

use crate::foundation::error::{ReelError, ReelResult};
use crate::render::frame::{FrameRGBA, Sequence};

type Rgb = [u8; 3];

#[derive(Clone, Debug)]
struct ColorBox {
    /// Distinct colors with their pixel counts.
    colors: Vec<(Rgb, u64)>,
}

impl ColorBox {
    fn population(&self) -> u64 {
        self.colors.iter().map(|(_, n)| n).sum()
    }

    /// Channel with the widest spread and that spread.
    fn widest_channel(&self) -> (usize, u8) {
        let mut lo = [u8::MAX; 3];
        let mut hi = [u8::MIN; 3];
        for (c, _) in &self.colors {
            for ch in 0..3 {
                lo[ch] = lo[ch].min(c[ch]);
                hi[ch] = hi[ch].max(c[ch]);
            }
        }
        (0..3)
            .map(|ch| (ch, hi[ch].saturating_sub(lo[ch])))
            .fold((0, 0), |best, cur| if cur.1 > best.1 { cur } else { best })
    }

    /// Pixel-weighted mean color.
    fn mean(&self) -> Rgb {
        let total = self.population().max(1);
        let mut acc = [0u64; 3];
        for (c, n) in &self.colors {
            for ch in 0..3 {
                acc[ch] += u64::from(c[ch]) * n;
            }
        }
        acc.map(|v| ((v + total / 2) / total).min(255) as u8)
    }

    /// Split at the pixel-weighted median of the widest channel. Both halves are non-empty.
    fn split(mut self) -> (Self, Self) {
        let (ch, _) = self.widest_channel();
        self.colors.sort_by_key(|(c, _)| (c[ch], *c));

        let half = self.population() / 2;
        let mut acc = 0u64;
        let mut at = self.colors.len() - 1;
        for (i, (_, n)) in self.colors.iter().enumerate() {
            acc += n;
            if acc >= half {
                at = i + 1;
                break;
            }
        }
        let at = at.clamp(1, self.colors.len() - 1);
        let upper = self.colors.split_off(at);
        (self, Self { colors: upper })
    }
}

/// Distinct colors of `frame` with pixel counts, sorted by color.
fn histogram(frame: &FrameRGBA) -> Vec<(Rgb, u64)> {
    let mut counts: HashMap<Rgb, u64> = HashMap::new();
    for px in frame.data.chunks_exact(4) {
        *counts.entry([px[0], px[1], px[2]]).or_default() += 1;
    }
    let mut hist: Vec<(Rgb, u64)> = counts.into_iter().collect();
    hist.sort_unstable();
    hist
}

/// Number of distinct RGB colors in `frame`.
pub fn count_colors(frame: &FrameRGBA) -> usize {
    histogram(frame).len()
}

/// Palette of at most `max_colors` entries for `hist`, plus the color -> entry mapping.
fn median_cut(hist: Vec<(Rgb, u64)>, max_colors: usize) -> HashMap<Rgb, Rgb> {
    let mut boxes = vec![ColorBox { colors: hist }];
    while boxes.len() < max_colors {
        let pick = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.colors.len() > 1)
            .map(|(i, b)| (i, b.widest_channel().1, b.population()))
            .fold(None::<(usize, u8, u64)>, |best, cur| match best {
                Some(b) if (b.1, b.2) >= (cur.1, cur.2) => Some(b),
                _ => Some(cur),
            });
        let Some((i, _, _)) = pick else {
            break;
        };
        let (lo, hi) = boxes.remove(i).split();
        boxes.insert(i, hi);
        boxes.insert(i, lo);
    }

    let mut map = HashMap::new();
    for b in &boxes {
        let mean = b.mean();
        for (c, _) in &b.colors {
            map.insert(*c, mean);
        }
    }
    map
}

/// Reduce `frame` to at most `max_colors` colors. The result is opaque RGBA again.
pub fn quantize_frame(frame: &FrameRGBA, max_colors: u16) -> ReelResult<FrameRGBA> {
    if !(2..=256).contains(&max_colors) {
        return Err(ReelError::validation("palette size must be in 2..=256"));
    }
    let hist = histogram(frame);
    if hist.len() <= usize::from(max_colors) {
        return Ok(frame.clone());
    }

    let map = median_cut(hist, usize::from(max_colors));
    let mut data = Vec::with_capacity(frame.data.len());
    for px in frame.data.chunks_exact(4) {
        let c = map
            .get(&[px[0], px[1], px[2]])
            .copied()
            .ok_or_else(|| ReelError::encode("quantizer lost a color (bug)"))?;
        data.extend_from_slice(&[c[0], c[1], c[2], 255]);
    }
    FrameRGBA::new(frame.width, frame.height, data)
}

/// Quantize every frame of `seq`; order and timing are unchanged.
#[tracing::instrument(skip(seq), fields(frames = seq.len()))]
pub fn quantize_sequence(seq: &Sequence, max_colors: u16) -> ReelResult<Sequence> {
    seq.map_frames(|f| quantize_frame(f, max_colors))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/quantize.rs"]
mod tests;

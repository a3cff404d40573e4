use super::*;
use crate::foundation::core::{Canvas, FrameDuration};

fn gradient(w: u32, h: u32) -> FrameRGBA {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8, 255]);
        }
    }
    FrameRGBA::new(w, h, data).unwrap()
}

#[test]
fn many_colors_are_reduced_to_the_target_palette() {
    let f = gradient(32, 32);
    assert_eq!(count_colors(&f), 1024);

    let q = quantize_frame(&f, 64).unwrap();
    assert_eq!((q.width, q.height), (32, 32));
    assert!(count_colors(&q) <= 64);
    assert!(count_colors(&q) > 1);
    assert!(q.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn quantization_is_deterministic() {
    let f = gradient(32, 32);
    assert_eq!(quantize_frame(&f, 16).unwrap(), quantize_frame(&f, 16).unwrap());
}

#[test]
fn frames_within_budget_pass_through() {
    let mut data = Vec::new();
    for i in 0..16u8 {
        data.extend_from_slice(&[i, 0, 0, 255]);
    }
    let f = FrameRGBA::new(4, 4, data).unwrap();
    assert_eq!(quantize_frame(&f, 64).unwrap(), f);
}

#[test]
fn split_halves_are_never_empty() {
    let b = ColorBox {
        colors: vec![([0, 0, 0], 1000), ([255, 0, 0], 1)],
    };
    let (lo, hi) = b.split();
    assert_eq!(lo.colors.len(), 1);
    assert_eq!(hi.colors.len(), 1);
}

#[test]
fn box_mean_is_pixel_weighted() {
    let b = ColorBox {
        colors: vec![([0, 0, 0], 3), ([100, 100, 100], 1)],
    };
    assert_eq!(b.mean(), [25, 25, 25]);
}

#[test]
fn invalid_palette_size_is_rejected() {
    let f = gradient(4, 4);
    assert!(quantize_frame(&f, 1).is_err());
    assert!(quantize_frame(&f, 257).is_err());
}

#[test]
fn sequence_timing_and_order_survive_quantization() {
    let mut seq = Sequence::new(Canvas::new(32, 32).unwrap());
    for ms in [45, 100, 400, 3000] {
        seq.push(gradient(32, 32), FrameDuration::new(ms).unwrap())
            .unwrap();
    }
    let q = quantize_sequence(&seq, 64).unwrap();
    assert_eq!(q.len(), seq.len());
    assert_eq!(q.durations(), seq.durations());
    assert_eq!(q.canvas(), seq.canvas());
}

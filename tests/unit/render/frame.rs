use super::*;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA::new(w, h, rgba.repeat((w * h) as usize)).unwrap()
}

#[test]
fn frame_rejects_wrong_buffer_length() {
    assert!(FrameRGBA::new(2, 2, vec![0; 15]).is_err());
    assert!(FrameRGBA::new(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn pixel_reads_row_major() {
    let mut f = solid(3, 2, [0, 0, 0, 255]);
    let i = (3 + 2) * 4;
    f.data[i..i + 4].copy_from_slice(&[9, 8, 7, 255]);
    assert_eq!(f.pixel(2, 1), Some([9, 8, 7, 255]));
    assert_eq!(f.pixel(3, 0), None);
}

#[test]
fn sequence_rejects_mismatched_frames() {
    let mut seq = Sequence::new(Canvas::new(4, 4).unwrap());
    let hold = FrameDuration::new(100).unwrap();
    seq.push(solid(4, 4, [1, 2, 3, 255]), hold).unwrap();
    assert!(seq.push(solid(4, 5, [1, 2, 3, 255]), hold).is_err());
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.durations(), vec![hold]);
}

#[test]
fn map_frames_keeps_timing() {
    let mut seq = Sequence::new(Canvas::new(2, 2).unwrap());
    for ms in [45, 100, 400] {
        seq.push(solid(2, 2, [5, 5, 5, 255]), FrameDuration::new(ms).unwrap())
            .unwrap();
    }
    let mapped = seq
        .map_frames(|f| Ok(solid(f.width, f.height, [0, 0, 0, 255])))
        .unwrap();
    assert_eq!(mapped.durations(), seq.durations());
    assert_eq!(mapped.frames()[0].frame.pixel(0, 0), Some([0, 0, 0, 255]));
}

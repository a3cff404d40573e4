use super::*;
use image::AnimationDecoder as _;
use image::codecs::gif::GifDecoder;

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> FrameRGBA {
    FrameRGBA::new(w, h, [rgb[0], rgb[1], rgb[2], 255].repeat((w * h) as usize)).unwrap()
}

fn sequence(holds: &[u32]) -> Sequence {
    let mut seq = Sequence::new(Canvas::new(8, 6).unwrap());
    for (i, &ms) in holds.iter().enumerate() {
        let shade = (i * 40) as u8;
        seq.push(solid(8, 6, [shade, 30, 46]), FrameDuration::new(ms).unwrap())
            .unwrap();
    }
    seq
}

fn decoded_delays_ms(bytes: &[u8]) -> Vec<f64> {
    let decoder = GifDecoder::new(std::io::Cursor::new(bytes)).unwrap();
    decoder
        .into_frames()
        .collect_frames()
        .unwrap()
        .iter()
        .map(|f| {
            let (n, d) = f.delay().numer_denom_ms();
            f64::from(n) / f64::from(d)
        })
        .collect()
}

#[test]
fn encoded_gif_keeps_order_timing_and_loops_forever() {
    let seq = sequence(&[400, 300, 100, 3000]);
    let bytes = encode_gif(&seq, 10).unwrap();

    assert_eq!(&bytes[..6], b"GIF89a");
    assert_eq!(bytes.last(), Some(&0x3B));
    assert!(
        bytes.windows(11).any(|w| w == b"NETSCAPE2.0"),
        "loop extension missing"
    );
    assert_eq!(decoded_delays_ms(&bytes), vec![400.0, 300.0, 100.0, 3000.0]);
}

#[test]
fn decoded_frames_match_source_colors() {
    let seq = sequence(&[100, 100]);
    let bytes = encode_gif(&seq, 10).unwrap();
    let frames = GifDecoder::new(std::io::Cursor::new(&bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].buffer().get_pixel(3, 3).0, [40, 30, 46, 255]);
}

#[test]
fn sink_rejects_size_mismatch_and_out_of_order_frames() {
    let mut out = Vec::new();
    let mut sink = GifSink::new(&mut out, 10);
    sink.begin(SinkConfig {
        width: 8,
        height: 6,
        loop_forever: true,
    })
    .unwrap();

    let hold = FrameDuration::new(100).unwrap();
    assert!(sink.push_frame(0, &solid(9, 6, [0, 0, 0]), hold).is_err());
    sink.push_frame(0, &solid(8, 6, [0, 0, 0]), hold).unwrap();
    assert!(sink.push_frame(0, &solid(8, 6, [0, 0, 0]), hold).is_err());
    assert_eq!(sink.frames_written(), 1);
    sink.end().unwrap();
}

#[test]
fn sink_must_be_started_and_non_empty() {
    let mut out = Vec::new();
    let mut sink = GifSink::new(&mut out, 10);
    let hold = FrameDuration::new(100).unwrap();
    assert!(sink.push_frame(0, &solid(8, 6, [0, 0, 0]), hold).is_err());
    assert!(sink.end().is_err());

    let mut out = Vec::new();
    let mut sink = GifSink::new(&mut out, 10);
    sink.begin(SinkConfig {
        width: 8,
        height: 6,
        loop_forever: true,
    })
    .unwrap();
    assert!(sink.end().is_err());
}

#[test]
fn empty_sequence_is_not_encoded() {
    let seq = Sequence::new(Canvas::new(8, 6).unwrap());
    assert!(encode_gif(&seq, 10).is_err());
}

#[test]
fn save_creates_parent_dirs_and_reports_size() {
    let dir = std::env::temp_dir().join(format!("termreel_gif_save_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("out.gif");

    let size = save_gif(&sequence(&[100, 200]), &path, 10).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), size);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn unwritable_path_is_fatal() {
    let file = std::env::temp_dir().join(format!("termreel_gif_block_{}", std::process::id()));
    std::fs::write(&file, b"x").unwrap();
    // A regular file cannot act as a directory.
    let path = file.join("out.gif");
    assert!(save_gif(&sequence(&[100]), &path, 10).is_err());
    let _ = std::fs::remove_file(file);
}

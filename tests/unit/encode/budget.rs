use super::*;

#[test]
fn report_accessors() {
    let kept = SizeReport {
        bytes: 10,
        budget: 20,
        reencoded_bytes: None,
    };
    assert!(!kept.reencoded());
    assert_eq!(kept.final_bytes(), 10);
    assert!(!kept.over_budget());

    let shrunk = SizeReport {
        bytes: 30,
        budget: 20,
        reencoded_bytes: Some(25),
    };
    assert!(shrunk.reencoded());
    assert_eq!(shrunk.final_bytes(), 25);
    assert!(shrunk.over_budget());
}

#[test]
fn mib_matches_binary_megabytes() {
    assert_eq!(mib(5 * 1024 * 1024), 5.0);
    assert_eq!(mib(512 * 1024), 0.5);
}

#[test]
fn missing_artifact_is_an_error() {
    let p = std::env::temp_dir().join("termreel-missing-artifact.gif");
    let _ = std::fs::remove_file(&p);
    assert!(artifact_size(&p).is_err());
}

fn noisy_sequence(holds: &[u32]) -> Sequence {
    use crate::foundation::core::{Canvas, FrameDuration};
    use crate::render::frame::FrameRGBA;

    let (w, h) = (48u32, 32u32);
    let mut seq = Sequence::new(Canvas::new(w, h).unwrap());
    for (i, &ms) in holds.iter().enumerate() {
        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for y in 0..h {
            for x in 0..w {
                let r = (x * 5 + i as u32 * 17) as u8;
                let g = (y * 7) as u8;
                let b = ((x ^ y) * 3) as u8;
                data.extend_from_slice(&[r, g, b, 255]);
            }
        }
        seq.push(FrameRGBA::new(w, h, data).unwrap(), FrameDuration::new(ms).unwrap())
            .unwrap();
    }
    seq
}

fn decoded_delays_ms(path: &Path) -> Vec<u32> {
    use image::AnimationDecoder as _;
    use image::codecs::gif::GifDecoder;

    let bytes = std::fs::read(path).unwrap();
    GifDecoder::new(std::io::Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
        .iter()
        .map(|f| {
            let (n, d) = f.delay().numer_denom_ms();
            n / d
        })
        .collect()
}

fn temp_out(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("termreel_budget_{tag}_{}", std::process::id()))
        .join("demo.gif")
}

#[test]
fn within_budget_leaves_artifact_untouched() {
    let seq = noisy_sequence(&[100, 400]);
    let out = OutputConfig::new(temp_out("keep"));
    let written = save_gif(&seq, &out.path, out.encode_speed).unwrap();
    let before = std::fs::read(&out.path).unwrap();

    let report = enforce_size_budget(&seq, &out).unwrap();
    assert_eq!(report.bytes, written);
    assert!(!report.reencoded());
    assert_eq!(std::fs::read(&out.path).unwrap(), before);

    let _ = std::fs::remove_dir_all(out.path.parent().unwrap());
}

#[test]
fn over_budget_reencodes_once_and_keeps_timing() {
    let holds = [50, 100, 400, 3000];
    let seq = noisy_sequence(&holds);
    let out = OutputConfig::new(temp_out("shrink")).with_size_budget(0);
    let written = save_gif(&seq, &out.path, out.encode_speed).unwrap();

    let report = enforce_size_budget(&seq, &out).unwrap();
    assert_eq!(report.bytes, written);
    let reencoded = report.reencoded_bytes.unwrap();
    assert_eq!(artifact_size(&out.path).unwrap(), reencoded);
    // Budget 0 cannot be met; the guard does not retry.
    assert!(report.over_budget());
    assert_eq!(decoded_delays_ms(&out.path), holds.to_vec());

    let _ = std::fs::remove_dir_all(out.path.parent().unwrap());
}

#[test]
fn console_lines_follow_the_guard_outcome() {
    let budget = 5 * 1024 * 1024;
    let fit = SizeReport {
        bytes: 1024,
        budget,
        reencoded_bytes: None,
    };
    assert!(fit.console_lines().is_empty());

    let shrunk = SizeReport {
        bytes: budget + 1,
        budget,
        reencoded_bytes: Some(budget / 2),
    };
    assert_eq!(
        shrunk.console_lines(),
        vec![
            "  WARNING: File exceeds 5MB target. Applying optimization...".to_string(),
            "  Optimized size: 2.50 MB".to_string(),
        ]
    );

    let still_big = SizeReport {
        bytes: budget * 2,
        budget,
        reencoded_bytes: Some(budget + budget / 2),
    };
    let lines = still_big.console_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "  Optimized size: 7.50 MB");
    assert_eq!(lines[2], "  WARNING: Optimized file still exceeds 5MB target.");
}

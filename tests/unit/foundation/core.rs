use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_edges() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(800, 720).unwrap();
    assert_eq!(c.rgba_len(), 800 * 720 * 4);
}

#[test]
fn frame_duration_must_be_positive() {
    assert!(FrameDuration::new(0).is_err());
    assert_eq!(FrameDuration::new(45).unwrap().as_millis(), 45);
}

#[test]
fn rgb8_is_opaque_when_widened() {
    assert_eq!(Rgb8::new(1, 2, 3).to_rgba8(), [1, 2, 3, 255]);
    assert_eq!(Rgb8::from([9, 8, 7]), Rgb8::new(9, 8, 7));
}

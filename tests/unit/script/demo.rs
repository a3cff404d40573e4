use super::*;

fn board() -> (Storyboard, Timing) {
    let theme = Theme::default();
    let timing = Timing::default();
    let board = DemoScript::markupr(&theme)
        .storyboard(&theme, &timing)
        .unwrap();
    (board, timing)
}

#[test]
fn demo_has_the_expected_shot_count() {
    let (board, _) = board();
    // 6 blink + 40 keystrokes + echo + banner + analyzing + 3 phases * 4 + 6 summary beats.
    assert_eq!(board.len(), 67);
}

#[test]
fn line_counts_never_decrease() {
    let (board, _) = board();
    let lens: Vec<usize> = board.shots().iter().map(|s| s.transcript.len()).collect();
    assert!(lens.windows(2).all(|w| w[0] <= w[1]), "{lens:?}");
    assert_eq!(lens.first(), Some(&1));
    assert_eq!(lens.last(), Some(&30));
}

#[test]
fn final_shot_has_the_longest_hold() {
    let (board, timing) = board();
    let holds = board.holds();
    let (last, rest) = holds.split_last().unwrap();
    assert_eq!(last.as_millis(), timing.final_hold_ms);
    assert!(rest.iter().all(|h| h < last));
}

#[test]
fn transcript_fits_the_default_canvas() {
    let (board, _) = board();
    let geometry = crate::config::Geometry::default();
    let rows = board.shots().last().unwrap().transcript.len() as f32;
    assert!(geometry.padding_y + rows * geometry.line_height <= geometry.height as f32);
}

#[test]
fn later_phases_are_separated_by_a_blank_row() {
    let (board, _) = board();
    let last = board.shots().last().unwrap().transcript.clone();
    let lines = last.lines();
    let idx = lines
        .iter()
        .position(|l| l.text().ends_with("Frame Extraction"))
        .unwrap();
    assert!(lines[idx - 1].is_blank());

    let first = lines
        .iter()
        .position(|l| l.text().ends_with("Transcription"))
        .unwrap();
    assert!(lines[first - 1].is_blank(), "analyzing row is followed by a blank");
    assert!(!lines[first - 2].is_blank());
}

#[test]
fn empty_command_is_rejected() {
    let theme = Theme::default();
    let mut script = DemoScript::markupr(&theme);
    script.command.clear();
    assert!(script.storyboard(&theme, &Timing::default()).is_err());
}

use crate::{
    config::{OutputConfig, ReelConfig},
    encode::gif::save_gif,
    foundation::error::{ReelError, ReelResult},
    render::canvas::CanvasRenderer,
    render::font::resolve_font,
    render::frame::Sequence,
    script::demo::DemoScript,
    script::storyboard::Storyboard,
};

/// Render every shot of `board` with `renderer`, in order.
///
/// Frame `i` shows shot `i`'s transcript for shot `i`'s hold.
pub fn render_storyboard(
    board: &Storyboard,
    renderer: &mut CanvasRenderer,
) -> ReelResult<Sequence> {
    if board.is_empty() {
        return Err(ReelError::validation("storyboard must contain at least one shot"));
    }
    let mut seq = Sequence::new(renderer.canvas());
    for (i, shot) in board.shots().iter().enumerate() {
        let frame = renderer.render(shot.transcript.lines())?;
        tracing::debug!(
            frame = i,
            lines = shot.transcript.len(),
            hold_ms = shot.hold.as_millis(),
            "frame rendered"
        );
        seq.push(frame, shot.hold)?;
    }
    Ok(seq)
}

/// Build the whole demo animation in memory.
///
/// Pipeline:
/// 1. validate `cfg`
/// 2. resolve the font once ([`resolve_font`](crate::resolve_font)); without one only the chrome
///    is drawn
/// 3. lay out the demo storyboard
/// 4. render one frame per shot
#[tracing::instrument(skip_all, fields(width = cfg.geometry.width, height = cfg.geometry.height))]
pub fn build_sequence(cfg: &ReelConfig) -> ReelResult<Sequence> {
    cfg.validate()?;
    let font = resolve_font(&cfg.font);
    let mut renderer = CanvasRenderer::new(cfg, font.as_ref())?;

    let board = DemoScript::markupr(&cfg.theme).storyboard(&cfg.theme, &cfg.timing)?;
    let seq = render_storyboard(&board, &mut renderer)?;
    tracing::info!(frames = seq.len(), "sequence built");
    Ok(seq)
}

/// Encode `seq` as a looping GIF at `out.path`, replacing any existing file. Returns the byte
/// size written.
pub fn save_sequence(seq: &Sequence, out: &OutputConfig) -> ReelResult<u64> {
    save_gif(seq, &out.path, out.encode_speed)
}

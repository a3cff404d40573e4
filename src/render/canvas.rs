use vello_cpu::kurbo::{Affine, Circle, Rect, Shape};

use crate::config::{Geometry, ReelConfig, Theme};
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::font::ResolvedFont;
use crate::render::frame::FrameRGBA;
use crate::render::text::TextLayoutEngine;
use crate::script::line::Line;

/// Caption centered in the header bar.
pub const CAPTION: &str = "Terminal -- markupr";

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Draws one terminal frame: background, header bar with window controls and caption, then the
/// transcript lines top to bottom.
///
/// Every frame from one renderer has the configured canvas size.
pub struct CanvasRenderer {
    canvas: Canvas,
    width_px: u16,
    height_px: u16,
    geometry: Geometry,
    theme: Theme,
    body_size_px: f32,
    caption_size_px: f32,
    text: Option<TextLayoutEngine>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CanvasRenderer {
    /// Build a renderer for `cfg`.
    ///
    /// With `font == None`, or a font Parley cannot register, text is skipped and only the chrome
    /// is drawn.
    pub fn new(cfg: &ReelConfig, font: Option<&ResolvedFont>) -> ReelResult<Self> {
        cfg.validate()?;
        let canvas = cfg.geometry.canvas()?;
        let width_px = u16::try_from(canvas.width)
            .map_err(|_| ReelError::validation("canvas width exceeds u16"))?;
        let height_px = u16::try_from(canvas.height)
            .map_err(|_| ReelError::validation("canvas height exceeds u16"))?;

        let text = font.and_then(|f| match TextLayoutEngine::new(f) {
            Ok(engine) => Some(engine),
            Err(e) => {
                tracing::warn!(error = %e, family = %f.family, "font unusable, drawing without text");
                None
            }
        });

        Ok(Self {
            canvas,
            width_px,
            height_px,
            geometry: cfg.geometry,
            theme: cfg.theme,
            body_size_px: cfg.font.body_size_px,
            caption_size_px: cfg.font.caption_size_px,
            text,
            ctx: None,
        })
    }

    /// Size of every frame this renderer produces.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// `true` when text is actually drawn.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// Advance width of `text` at body size; `0.0` without a font.
    pub fn text_width(&mut self, text: &str) -> ReelResult<f32> {
        let size = self.body_size_px;
        match self.text.as_mut() {
            Some(engine) => engine.advance(text, size),
            None => Ok(0.0),
        }
    }

    /// Render `lines` into a frame.
    pub fn render(&mut self, lines: &[Line]) -> ReelResult<FrameRGBA> {
        let (w, h) = (self.width_px, self.height_px);
        let data = self.with_ctx_mut(w, h, |this, ctx| {
            this.draw_chrome(ctx)?;

            let mut y = this.geometry.padding_y;
            for line in lines {
                this.draw_line(ctx, line, y)?;
                y += this.geometry.line_height;
            }

            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap.data_as_u8_slice().to_vec())
        })?;
        FrameRGBA::new(self.canvas.width, self.canvas.height, data)
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> ReelResult<R>,
    ) -> ReelResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_chrome(&mut self, ctx: &mut vello_cpu::RenderContext) -> ReelResult<()> {
        let g = self.geometry;
        let width = f64::from(self.canvas.width);
        let bar_h = f64::from(g.title_bar_height);

        ctx.set_transform(Affine::IDENTITY);
        fill_rect(
            ctx,
            Rect::new(0.0, 0.0, width, f64::from(self.canvas.height)),
            self.theme.background,
        );
        fill_rect(ctx, Rect::new(0.0, 0.0, width, bar_h), self.theme.title_bar);
        fill_rect(ctx, Rect::new(0.0, bar_h, width, bar_h + 1.0), self.theme.border);

        let cy = f64::from(g.title_bar_height / 2);
        for (i, color) in self.theme.dots.into_iter().enumerate() {
            let cx = f64::from(g.dot_origin_x) + (i as f64) * f64::from(g.dot_spacing);
            let dot = Circle::new((cx, cy), f64::from(g.dot_radius)).to_path(CIRCLE_TOLERANCE);
            set_color(ctx, color);
            ctx.fill_path(&dot);
        }

        let size = self.caption_size_px;
        let caption_w = match self.text.as_mut() {
            Some(engine) => engine.advance(CAPTION, size)?,
            None => 0.0,
        };
        let x = (self.canvas.width as f32 - caption_w) / 2.0;
        self.draw_text(ctx, CAPTION, self.theme.dim, size, x, g.caption_y)?;
        Ok(())
    }

    fn draw_line(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        line: &Line,
        y: f32,
    ) -> ReelResult<()> {
        let size = self.body_size_px;
        let mut x = self.geometry.padding_x;
        match line {
            Line::Plain(text) => {
                self.draw_text(ctx, text, self.theme.text, size, x, y)?;
            }
            Line::Styled(segments) => {
                for seg in segments {
                    x += self.draw_text(ctx, &seg.text, seg.color, size, x, y)?;
                }
            }
        }
        Ok(())
    }

    /// Draw `text` with its layout box's top-left at `(x, y)`; returns the advance width.
    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        color: Rgb8,
        size_px: f32,
        x: f32,
        y: f32,
    ) -> ReelResult<f32> {
        let Some(engine) = self.text.as_mut() else {
            return Ok(0.0);
        };
        if text.is_empty() {
            return Ok(0.0);
        }

        let layout = engine.layout_line(text, size_px, color.into())?;
        ctx.set_transform(Affine::translate((f64::from(x), f64::from(y))));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(engine.font())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(Affine::IDENTITY);
        Ok(layout.full_width())
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgb8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
}

fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: Rect, color: Rgb8) {
    set_color(ctx, color);
    ctx.fill_rect(&rect);
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;

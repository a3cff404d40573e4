use std::path::Path;

use anyhow::Context as _;

use crate::config::OutputConfig;
use crate::encode::gif::save_gif;
use crate::encode::quantize::quantize_sequence;
use crate::foundation::error::ReelResult;
use crate::render::frame::Sequence;

/// Outcome of the size check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeReport {
    /// Size of the artifact as first written.
    pub bytes: u64,
    /// Budget it was checked against.
    pub budget: u64,
    /// Size after palette reduction, when that ran.
    pub reencoded_bytes: Option<u64>,
}

impl SizeReport {
    /// `true` when the artifact was rewritten.
    pub fn reencoded(&self) -> bool {
        self.reencoded_bytes.is_some()
    }

    /// Size of the artifact now on disk.
    pub fn final_bytes(&self) -> u64 {
        self.reencoded_bytes.unwrap_or(self.bytes)
    }

    /// `true` when even the final artifact exceeds the budget.
    pub fn over_budget(&self) -> bool {
        self.final_bytes() > self.budget
    }

    /// Console lines describing what the guard did; empty when the first encode fit.
    pub fn console_lines(&self) -> Vec<String> {
        let Some(reencoded) = self.reencoded_bytes else {
            return Vec::new();
        };
        let target = mib(self.budget);
        let mut lines = vec![
            format!("  WARNING: File exceeds {target:.0}MB target. Applying optimization..."),
            format!("  Optimized size: {:.2} MB", mib(reencoded)),
        ];
        if self.over_budget() {
            lines.push(format!(
                "  WARNING: Optimized file still exceeds {target:.0}MB target."
            ));
        }
        lines
    }
}

/// Size of `bytes` in MiB.
pub fn mib(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Byte size of the file at `path`.
pub fn artifact_size(path: &Path) -> ReelResult<u64> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("failed to stat '{}'", path.display()))?;
    Ok(meta.len())
}

/// Quantize every frame to `out.quantize_colors` colors and overwrite `out.path`, keeping frame
/// order, durations and looping. Returns the new size.
///
/// Single pass: the result is not checked against the budget again.
#[tracing::instrument(skip(seq, out), fields(frames = seq.len(), colors = out.quantize_colors))]
pub fn reencode_with_palette(seq: &Sequence, out: &OutputConfig) -> ReelResult<u64> {
    let reduced = quantize_sequence(seq, out.quantize_colors)?;
    save_gif(&reduced, &out.path, out.encode_speed)
}

/// Check the artifact at `out.path` against the budget and re-encode it once if it is larger.
///
/// Within budget the file is left untouched.
#[tracing::instrument(skip(seq, out), fields(path = %out.path.display()))]
pub fn enforce_size_budget(seq: &Sequence, out: &OutputConfig) -> ReelResult<SizeReport> {
    let bytes = artifact_size(&out.path)?;
    let budget = out.size_budget_bytes;
    if bytes <= budget {
        return Ok(SizeReport {
            bytes,
            budget,
            reencoded_bytes: None,
        });
    }

    tracing::warn!(bytes, budget, "artifact over budget, reducing palette");
    let reencoded = reencode_with_palette(seq, out)?;
    if reencoded > budget {
        tracing::warn!(bytes = reencoded, budget, "artifact still over budget");
    }
    Ok(SizeReport {
        bytes,
        budget,
        reencoded_bytes: Some(reencoded),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/budget.rs"]
mod tests;

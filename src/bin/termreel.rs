use anyhow::Context as _;
use termreel::{ReelConfig, build_sequence, enforce_size_budget, mib, save_sequence};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cfg = ReelConfig::default();

    println!("Generating frames...");
    let seq = build_sequence(&cfg).context("failed to build frames")?;
    println!("  {} frames generated", seq.len());

    println!("Saving GIF...");
    let out = &cfg.output;
    let bytes = save_sequence(&seq, out)
        .with_context(|| format!("failed to save '{}'", out.path.display()))?;
    let canvas = seq.canvas();
    println!("  Saved to: {}", out.path.display());
    println!("  Size: {:.2} MB", mib(bytes));
    println!("  Dimensions: {}x{}", canvas.width, canvas.height);
    println!("  Frames: {}", seq.len());

    let report = enforce_size_budget(&seq, out).context("failed to apply the size budget")?;
    for line in report.console_lines() {
        println!("{line}");
    }

    Ok(())
}

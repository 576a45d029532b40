use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stickyscroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the built-in page definition as JSON.
    Page(PageArgs),
    /// Replay a scroll script and write per-frame snapshots as JSON.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Page definition JSON. Defaults to the built-in page.
    #[arg(long)]
    page: Option<PathBuf>,

    /// Scroll script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Host frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Keep every Nth snapshot (the last frame is always kept).
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Page(args) => cmd_page(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_page(args: PageArgs) -> anyhow::Result<()> {
    let json = stickyscroll::PageDef::paris().to_json_pretty()?;
    write_output(&args.out, json.as_bytes())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let page = match &args.page {
        Some(path) => stickyscroll::PageDef::from_path(path)?,
        None => stickyscroll::PageDef::paris(),
    };
    let script = stickyscroll::ScrollScript::from_path(&args.script)?;
    let viewport = stickyscroll::Viewport::new(args.width, args.height)?;

    let frames = stickyscroll::replay(page, viewport, &script, args.fps)?;
    let step = args.every.max(1);
    let last = frames.len().saturating_sub(1);
    let kept: Vec<_> = frames
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last)
        .map(|(_, f)| f)
        .collect();

    let json = serde_json::to_vec_pretty(&kept).context("serialize snapshots")?;
    write_output(&args.out, &json)?;
    eprintln!("wrote {} frames to {}", kept.len(), args.out.display());
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

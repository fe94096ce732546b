use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glitchswap::{
    BeginOutcome, FxRng, HeadlessHost, Rect, SessionState, Surface, TransitionConfig,
    begin_transition, compose_frame, draw_border, drive_frame, seeded_rng, stepped_backdrop,
    time_seeded_rng,
};

#[derive(Parser, Debug)]
#[command(name = "glitchswap", version)]
struct Cli {
    /// Log at debug level (overridable via `RUST_LOG`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single effect frame over the page backdrop as a PNG.
    Frame(FrameArgs),
    /// Run a full transition headlessly and write every presented frame as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Effect intensity in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    intensity: f64,

    /// Session progress driving the border pulse.
    #[arg(long, default_value_t = 0.5)]
    progress: f64,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Random seed; omit for a time-seeded run.
    #[arg(long)]
    seed: Option<u64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Viewport width; at or below the narrow breakpoint the narrow layout is used.
    #[arg(long, default_value_t = 1200.0)]
    viewport_width: f64,

    /// Content panel width.
    #[arg(long, default_value_t = 900.0)]
    panel_width: f64,

    /// Content panel height.
    #[arg(long, default_value_t = 600.0)]
    panel_height: f64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Random seed; omit for a time-seeded run.
    #[arg(long)]
    seed: Option<u64>,

    /// Transition config JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn rng_for(seed: Option<u64>) -> FxRng {
    seed.map_or_else(time_seeded_rng, seeded_rng)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut effect = Surface::new(args.width, args.height);
    let mut rng = rng_for(args.seed);
    let report = compose_frame(&mut effect, args.intensity, &mut rng);
    draw_border(&mut effect, args.progress);
    tracing::debug!(?report, "frame composed");

    write_over_backdrop(&effect, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => TransitionConfig::from_path(path)?,
        None => TransitionConfig::default(),
    };
    let panel = Rect::new(0.0, 0.0, args.panel_width, args.panel_height);
    let mut host = HeadlessHost::at_fps(args.viewport_width, panel, args.fps)
        .with_content("<p>before</p>");

    let mut session = match begin_transition(
        &mut host,
        &cfg,
        "<p>before</p>".to_owned(),
        "<p>after</p>".to_owned(),
        rng_for(args.seed),
    )? {
        BeginOutcome::Animating(session) => session,
        BeginOutcome::Replaced { reason } => anyhow::bail!("transition not played: {reason}"),
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0usize;
    loop {
        let state = drive_frame(&mut host, &mut session);
        let frame = host.last_frame().context("host presented no frame")?;
        let path = args.out_dir.join(format!("frame_{written:04}.png"));
        write_over_backdrop(frame, &path)?;
        written += 1;
        if state == SessionState::Completed {
            break;
        }
    }

    eprintln!(
        "wrote {written} frames to {} (content: {})",
        args.out_dir.display(),
        host.content()
    );
    Ok(())
}

/// Composite `effect` over the stepped page backdrop and save it as an opaque PNG.
fn write_over_backdrop(effect: &Surface, out: &Path) -> anyhow::Result<()> {
    let mut canvas = Surface::with_size(effect.size());
    stepped_backdrop(&mut canvas);
    canvas.draw_surface(effect)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        canvas.data(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

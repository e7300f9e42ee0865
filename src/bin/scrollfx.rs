use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scrollfx::{Fps, HostEvent, Showcase, ShowcaseConfig, ShowcaseSession, Size};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    /// Log engine events to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved showcase frame for one scroll position.
    Frame(FrameArgs),
    /// Scroll through a range with a simulated clock, printing one JSON frame per line.
    Sweep(SweepArgs),
    /// Replay host events from a JSON array, printing one JSON frame per event.
    Replay(ReplayArgs),
    /// Print the default configuration.
    Config,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Viewport size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800", value_parser = parse_viewport)]
    viewport: (f64, f64),

    /// Showcase configuration JSON (defaults are used for missing fields).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Vertical scroll offset in px.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Seconds elapsed after scrolling.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// First scroll offset in px.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset in px (inclusive).
    #[arg(long)]
    to: f64,

    /// Scroll increment per step in px.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Host frames to advance after each scroll step.
    #[arg(long, default_value_t = 6)]
    hold_frames: u64,

    /// Host refresh rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// JSON file holding an array of host events.
    #[arg(long)]
    events: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Replay(args) => cmd_replay(args),
        Command::Config => cmd_config(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_viewport(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return Err(format!("viewport must be positive, got '{s}'"));
    }
    Ok((w, h))
}

fn read_config(path: Option<&Path>) -> anyhow::Result<ShowcaseConfig> {
    let Some(path) = path else {
        return Ok(ShowcaseConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = ShowcaseConfig::from_json(&s)
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn mount(view: &ViewArgs) -> anyhow::Result<ShowcaseSession> {
    let cfg = read_config(view.config.as_deref())?;
    let (w, h) = view.viewport;
    let session = ShowcaseSession::mount(cfg, w, h).context("mount showcase")?;
    Ok(session)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.view.config.as_deref())?;
    let (w, h) = args.view.viewport;
    let showcase = Showcase::with_config(cfg)?;
    let frame = showcase
        .render(Size::new(w, h), args.scroll, args.time)
        .context("render frame")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &frame)?;
    } else {
        serde_json::to_writer(&mut out, &frame)?;
    }
    writeln!(out)?;
    Ok(())
}

const MAX_SWEEP_STEPS: f64 = 1_000_000.0;

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be > 0");
    }
    if !(args.from.is_finite() && args.to.is_finite()) {
        anyhow::bail!("--from and --to must be finite");
    }
    if args.to < args.from {
        anyhow::bail!("--to must be >= --from");
    }
    let span = ((args.to - args.from) / args.step).floor();
    if span >= MAX_SWEEP_STEPS {
        anyhow::bail!("sweep would take more than {MAX_SWEEP_STEPS} steps; raise --step");
    }
    let fps = Fps::new(args.fps, 1)?;
    let mut session = mount(&args.view)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    let mut frame_no: u64 = 0;
    let steps = span as u64;
    for i in 0..=steps {
        let y = args.from + i as f64 * args.step;
        session.handle(HostEvent::Scroll { y })?;
        for _ in 0..args.hold_frames {
            frame_no += 1;
            session.handle(HostEvent::Tick {
                time: fps.frames_to_secs(frame_no),
            })?;
        }
        serde_json::to_writer(&mut out, &session.frame())?;
        writeln!(out)?;
    }
    out.flush()?;
    tracing::debug!(steps = steps + 1, frames = frame_no, "sweep finished");
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let f = File::open(&args.events)
        .with_context(|| format!("open events '{}'", args.events.display()))?;
    let events: Vec<HostEvent> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| "parse host events JSON")?;
    let mut session = mount(&args.view)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for (i, event) in events.into_iter().enumerate() {
        session
            .handle(event)
            .with_context(|| format!("apply event #{i}"))?;
        serde_json::to_writer(&mut out, &session.frame())?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &ShowcaseConfig::default())?;
    writeln!(out)?;
    Ok(())
}

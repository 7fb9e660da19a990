use std::{
    fs::File,
    io::{BufReader, Read as _, Write as _},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "blobdrift", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Advance the animation and write a single frame as SVG or PNG.
    Frame(FrameArgs),
    /// Write consecutive frames into a directory.
    Sequence(SequenceArgs),
    /// Print one JSON object per frame to stdout.
    Trace(TraceArgs),
    /// Write the built-in scene as JSON, to use as a starting point for `--scene`.
    Scene(SceneArgs),
    /// Run the live ticker for a fixed duration, rewriting an SVG file on every tick.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct SceneSource {
    /// Scene JSON; the built-in warm/cool scene when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Random seed. Omit to seed from the operating system.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SceneSource,

    /// Number of ticks to advance before writing.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Output path; format is chosen by extension (.svg or .png).
    #[arg(long)]
    out: PathBuf,

    /// Raster width for PNG output.
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Raster height for PNG output.
    #[arg(long, default_value_t = 1000)]
    height: u32,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    source: SceneSource,

    /// Number of frames to write.
    #[arg(long)]
    frames: u64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatChoice::Svg)]
    format: FormatChoice,

    #[arg(long, default_value_t = 500)]
    width: u32,

    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Rasterization threads (PNG only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    source: SceneSource,

    #[arg(long)]
    frames: u64,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    source: SceneSource,

    /// How long to run before stopping the ticker.
    #[arg(long)]
    duration_ms: u64,

    /// Overrides the scene's tick interval.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// SVG file rewritten with the latest frame.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
}

impl From<FormatChoice> for blobdrift::OutputFormat {
    fn from(v: FormatChoice) -> Self {
        match v {
            FormatChoice::Svg => Self::Svg,
            FormatChoice::Png => Self::Png,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<blobdrift::SceneConfig> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let mut s = String::new();
    BufReader::new(f)
        .read_to_string(&mut s)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    let scene = blobdrift::SceneConfig::from_json_str(&s)
        .with_context(|| format!("parse scene '{}'", path.display()))?;
    Ok(scene)
}

fn make_animator(source: &SceneSource) -> anyhow::Result<blobdrift::Animator> {
    let scene = match &source.scene {
        Some(path) => read_scene_json(path)?,
        None => blobdrift::SceneConfig::default(),
    };
    let animator = match source.seed {
        Some(seed) => blobdrift::Animator::seeded(scene, seed)?,
        None => blobdrift::Animator::from_os_rng(scene)?,
    };
    Ok(animator)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let format = blobdrift::OutputFormat::from_path(&args.out)?;
    let mut animator = make_animator(&args.source)?;
    animator.step_n(args.ticks);

    let svg = blobdrift::render_svg(animator.scene(), animator.current());
    ensure_parent_dir(&args.out)?;
    match format {
        blobdrift::OutputFormat::Svg => std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?,
        blobdrift::OutputFormat::Png => {
            blobdrift::rasterize_svg(&svg, args.width, args.height)?.save_png(&args.out)?
        }
    }

    tracing::info!(tick = animator.ticks(), "wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let mut animator = make_animator(&args.source)?;
    let opts = blobdrift::SequenceOpts {
        frames: args.frames,
        format: args.format.into(),
        width: args.width,
        height: args.height,
        threads: args.threads,
    };
    let paths = blobdrift::export_sequence(&mut animator, &args.out_dir, &opts)?;

    tracing::info!(
        frames = paths.len(),
        "wrote sequence to {}",
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut animator = make_animator(&args.source)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.frames {
        let frame = animator.step();
        serde_json::to_writer(&mut out, frame).context("serialize frame")?;
        writeln!(out).context("write stdout")?;
    }
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let json = blobdrift::SceneConfig::default().to_json_string()?;
    match args.out {
        Some(path) => {
            ensure_parent_dir(&path)?;
            std::fs::write(&path, json)
                .with_context(|| format!("write scene '{}'", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let animator = make_animator(&args.source)?;
    let ticker = match args.interval_ms {
        Some(ms) => blobdrift::Ticker::new(Duration::from_millis(ms))?,
        None => blobdrift::Ticker::from_scene(animator.scene())?,
    };

    if let Some(out) = &args.out {
        ensure_parent_dir(out)?;
    }

    let scene = animator.scene().clone();
    let out = args.out.clone();
    let write_error = Arc::new(Mutex::new(None::<anyhow::Error>));
    let write_error_slot = Arc::clone(&write_error);

    let handle = ticker.start(animator, move |frame| {
        let Some(path) = &out else {
            return;
        };
        let svg = blobdrift::render_svg(&scene, frame);
        if let Err(e) = std::fs::write(path, svg) {
            tracing::warn!(tick = frame.tick.0, "write failed: {e}");
            if let Ok(mut slot) = write_error_slot.lock() {
                slot.get_or_insert_with(|| {
                    anyhow::Error::new(e).context(format!("write svg '{}'", path.display()))
                });
            }
        }
    })?;

    std::thread::sleep(Duration::from_millis(args.duration_ms));
    let animator = handle.stop()?;

    if let Some(e) = write_error.lock().ok().and_then(|mut slot| slot.take()) {
        return Err(e);
    }

    tracing::info!(ticks = animator.ticks(), "ticker finished");
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use tailfin::{SceneConfig, SceneMode, SceneSession, ScrollInput, Viewport};

#[derive(Parser, Debug)]
#[command(name = "tailfin", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame sequence as numbered PNGs.
    Render(RenderArgs),
    /// Write the built-in scene configuration as JSON.
    DumpConfig(DumpConfigArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene configuration JSON; omit for the built-in scene.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Page scroll position as a fraction of the full scroll range.
    #[arg(long, default_value_t = 0.0)]
    scroll: f32,

    /// Override the time-of-day scalar instead of deriving it from scroll.
    #[arg(long)]
    time_of_day: Option<f32>,

    /// Camera mode.
    #[arg(long, value_enum, default_value_t = ModeChoice::Cover)]
    mode: ModeChoice,

    /// Simulated seconds of animation before the frame is taken.
    #[arg(long, default_value_t = 0.0)]
    warmup: f64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Scene configuration JSON; omit for the built-in scene.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Output directory for numbered PNGs.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 48)]
    frames: u32,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 24)]
    fps: u32,

    /// Scroll fraction at the first frame.
    #[arg(long, default_value_t = 0.0)]
    scroll_from: f32,

    /// Scroll fraction at the last frame.
    #[arg(long, default_value_t = 1.0)]
    scroll_to: f32,

    /// Camera mode.
    #[arg(long, value_enum, default_value_t = ModeChoice::Cover)]
    mode: ModeChoice,
}

#[derive(Parser, Debug)]
struct DumpConfigArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Cover,
    Explore,
}

impl From<ModeChoice> for SceneMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Cover => SceneMode::Cover,
            ModeChoice::Explore => SceneMode::Explore,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::DumpConfig(args) => cmd_dump_config(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(p) => SceneConfig::from_path(p)
            .with_context(|| format!("load scene config '{}'", p.display())),
        None => Ok(SceneConfig::vintage_1959()),
    }
}

/// A synthetic page: one hero viewport plus five editorial spreads.
fn scroll_input(fraction: f32, viewport_h: f32) -> ScrollInput {
    let document_h = viewport_h * 6.0;
    ScrollInput {
        scroll_y: fraction.clamp(0.0, 1.0) * (document_h - viewport_h),
        viewport_h,
        document_h,
        hero_h: viewport_h,
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.config_path.as_ref())?;
    let viewport = Viewport::new(args.width, args.height)?;
    let mut session = SceneSession::new(config, viewport)?;

    session.set_mode(args.mode.into());
    session.on_scroll(scroll_input(args.scroll, args.height as f32));

    // Drive the clock in fixed steps so warmup is deterministic.
    let step = 1.0 / 60.0;
    let mut now = 0.0;
    while now <= args.warmup {
        session.advance(now);
        now += step;
    }
    if let Some(t) = args.time_of_day {
        session.set_time_of_day(t);
    }

    let frame = session.render()?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be >= 1");
    }
    if args.fps == 0 {
        anyhow::bail!("--fps must be >= 1");
    }

    let config = load_config(args.config_path.as_ref())?;
    let viewport = Viewport::new(args.width, args.height)?;
    let mut session = SceneSession::new(config, viewport)?;
    session.set_mode(args.mode.into());

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let frame_dt = 1.0 / f64::from(args.fps);
    for i in 0..args.frames {
        let progress = if args.frames > 1 {
            i as f32 / (args.frames - 1) as f32
        } else {
            0.0
        };
        let fraction = args.scroll_from + (args.scroll_to - args.scroll_from) * progress;
        session.on_scroll(scroll_input(fraction, args.height as f32));
        session.advance(f64::from(i) * frame_dt);

        let frame = session.render()?;
        let path = args.out.join(format!("frame_{i:05}.png"));
        frame.save_png(&path)?;
    }
    eprintln!("wrote {} frames to {}", args.frames, args.out.display());
    Ok(())
}

fn cmd_dump_config(args: DumpConfigArgs) -> anyhow::Result<()> {
    let json = SceneConfig::vintage_1959().to_json_string()?;
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("write config '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

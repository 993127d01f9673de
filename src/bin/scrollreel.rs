use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollreel::{Presentation, PresentationOpts, Progress, SceneAnimator, Story};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one frame and print it as JSON.
    Frame(FrameArgs),
    /// Normalize a scroll offset and report the selected scene.
    Scroll(ScrollArgs),
    /// Print one JSON line per evenly spaced progress step.
    Sweep(SweepArgs),
    /// Validate a story JSON file.
    Validate(ValidateArgs),
    /// Print the built-in story as JSON.
    Story(StoryArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Story JSON (defaults to the built-in story).
    #[arg(long)]
    story: Option<PathBuf>,

    /// Scroll progress in [0, 1]; out-of-range values are clamped.
    #[arg(long, allow_hyphen_values = true)]
    progress: f64,

    /// Presentation clock in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Override the story seed for particle fields.
    #[arg(long)]
    seed: Option<u64>,

    /// Report audio as playing.
    #[arg(long, default_value_t = false)]
    audio: bool,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    /// Story JSON (defaults to the built-in story).
    #[arg(long)]
    story: Option<PathBuf>,

    /// Pixels scrolled into the container.
    #[arg(long, allow_hyphen_values = true)]
    offset: f64,

    /// Scrollable height of the container in pixels.
    #[arg(long)]
    height: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Story JSON (defaults to the built-in story).
    #[arg(long)]
    story: Option<PathBuf>,

    /// Number of intervals between progress 0 and 1.
    #[arg(long, default_value_t = 20)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Story JSON to check.
    #[arg(long)]
    story: PathBuf,
}

#[derive(Parser, Debug)]
struct StoryArgs {
    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Scroll(args) => cmd_scroll(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Story(args) => cmd_story(args),
    }
}

fn init_tracing(verbose: u8) {
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

fn load_story(path: Option<&Path>) -> anyhow::Result<Story> {
    match path {
        Some(p) => Story::from_path(p).with_context(|| format!("load story '{}'", p.display())),
        None => Ok(Story::compassion()?),
    }
}

fn write_output(out: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let story = load_story(args.story.as_deref())?;
    let opts = PresentationOpts {
        seed: args.seed,
        audio_playing: args.audio,
    };
    let mut pres = Presentation::new(story, opts)?;
    pres.seek(Progress::new(args.progress));
    pres.tick(args.time)?;

    let json = serde_json::to_string_pretty(&pres.frame())?;
    write_output(args.out.as_deref(), &json)
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    let story = load_story(args.story.as_deref())?;
    let progress = Progress::from_scroll(args.offset, args.height);
    let index = SceneAnimator::current_scene(&story, progress);
    let scene = story
        .scenes
        .get(index)
        .context("ladder selected a scene outside the story")?;

    let json = serde_json::json!({
        "progress": progress,
        "current_scene": index,
        "scene": scene.id,
        "label": scene.label,
    });
    println!("{json}");
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be > 0");
    }
    let story = load_story(args.story.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..=args.steps {
        let progress = Progress::new(f64::from(i) / f64::from(args.steps));
        let styles = SceneAnimator::eval_scenes(&story, progress);
        let opacity: serde_json::Map<String, serde_json::Value> = styles
            .iter()
            .map(|s| (s.id.clone(), serde_json::json!(s.opacity)))
            .collect();
        let line = serde_json::json!({
            "progress": progress,
            "current_scene": SceneAnimator::current_scene(&story, progress),
            "opacity": opacity,
        });
        writeln!(out, "{line}").context("write sweep line")?;
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let story = Story::from_path(&args.story)
        .with_context(|| format!("validate '{}'", args.story.display()))?;
    eprintln!(
        "ok: '{}' ({} scenes, {} particle fields)",
        story.title,
        story.scenes.len(),
        story.particles.len()
    );
    Ok(())
}

fn cmd_story(args: StoryArgs) -> anyhow::Result<()> {
    let json = Story::compassion()?.to_json_pretty()?;
    write_output(args.out.as_deref(), &json)
}

//! `krishi-scene` command-line tool: inspect and validate scroll
//! choreographies without a browser.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use krishi_scene::util::frame_timing::FrameTiming;
use krishi_scene::{
    FrameOutcome, Options, ScrollProgress, ScrollTimeline, SceneComposer,
    TimelineSample, UniformSurface,
};

#[derive(Parser)]
#[command(name = "krishi-scene", about = "Scroll-driven scene tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print camera poses at evenly spaced scroll positions
    Sample {
        /// Number of samples, including both ends
        #[arg(long, default_value_t = 11)]
        steps: usize,
        /// Options file (TOML); defaults when omitted
        #[arg(long)]
        options: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Print the default options as TOML
    Defaults,
    /// Print the JSON schema for the options file
    Schema,
    /// Load an options file and validate its timeline
    Check {
        /// Options file (TOML)
        path: PathBuf,
    },
    /// Scroll from top to bottom headlessly and report each stage entered
    Play {
        /// Length of the simulated scroll, in seconds
        #[arg(long, default_value_t = 3.0)]
        seconds: f32,
        /// Frame rate cap
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Options file (TOML); defaults when omitted
        #[arg(long)]
        options: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn load_options(path: Option<&Path>) -> Result<Options> {
    match path {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(Options::default()),
    }
}

fn sample(steps: usize, options: &Options, format: Format) -> Result<()> {
    if steps < 2 {
        bail!("need at least 2 steps, got {steps}");
    }
    let timeline = options.build_timeline()?;
    let mut out = std::io::stdout().lock();
    if matches!(format, Format::Table) {
        writeln!(
            out,
            "{:>8}  {:<10} {:>26}  {:>26}  {:>8}",
            "progress", "stage", "position", "look_at", "rotation"
        )?;
    }
    for i in 0..steps {
        let p = i as f32 / (steps - 1) as f32;
        let s = timeline.sample_at(p);
        let stage = &timeline.segments()[s.segment].stage;
        match format {
            Format::Table => writeln!(
                out,
                "{:>8.3}  {:<10} {:>26}  {:>26}  {:>8.3}",
                s.progress.get(),
                stage,
                fmt_vec(s.pose.position.to_array()),
                fmt_vec(s.pose.look_at.to_array()),
                s.rotation
            )?,
            Format::Json => writeln!(out, "{}", sample_json(&s, stage))?,
        }
    }
    Ok(())
}

fn fmt_vec(v: [f32; 3]) -> String {
    format!("({:.3}, {:.3}, {:.3})", v[0], v[1], v[2])
}

fn sample_json(s: &TimelineSample, stage: &str) -> serde_json::Value {
    serde_json::json!({
        "progress": s.progress.get(),
        "stage": stage,
        "local_progress": s.local_progress,
        "position": s.pose.position.to_array(),
        "look_at": s.pose.look_at.to_array(),
        "rotation": s.rotation,
    })
}

fn check(path: &Path) -> Result<()> {
    let options = load_options(Some(path))?;
    let timeline = options
        .build_timeline()
        .with_context(|| format!("invalid timeline in {}", path.display()))?;
    report_timeline(&timeline)
}

fn report_timeline(timeline: &ScrollTimeline) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "ok: {} stages", timeline.segments().len())?;
    for seg in timeline.segments() {
        writeln!(
            out,
            "  {:<10} {:.3} -> {:.3}  {:?}",
            seg.stage, seg.start_progress, seg.end_progress, seg.easing
        )?;
    }
    Ok(())
}

fn play(seconds: f32, fps: u32, options: &Options) -> Result<()> {
    if !(seconds.is_finite() && seconds > 0.0) {
        bail!("--seconds must be positive, got {seconds}");
    }
    let mut composer = SceneComposer::new(options)?;
    composer.mount(UniformSurface::new());

    let mut clock = FrameTiming::new(fps);
    let mut stage = None;
    let mut out = std::io::stdout().lock();
    loop {
        std::thread::sleep(clock.until_next_frame());
        let t = clock.elapsed().as_secs_f32();
        composer.set_progress(ScrollProgress::new(t / seconds));

        let FrameOutcome::Rendered(sample) = composer.frame(clock.elapsed())
        else {
            bail!("composer stopped rendering");
        };
        if stage != Some(sample.segment) {
            stage = Some(sample.segment);
            let seg = &composer.timeline().segments()[sample.segment];
            writeln!(
                out,
                "{:>6.2}s  {:<10} eye {}",
                t,
                seg.stage,
                fmt_vec(composer.camera().eye.to_array())
            )?;
        }
        let _ = clock.end_frame();
        if sample.progress == ScrollProgress::END {
            break;
        }
    }

    let revision = composer.surface().map_or(0, UniformSurface::revision);
    writeln!(
        out,
        "{} frames at {:.1} fps, {revision} surface updates",
        clock.frame_count(),
        clock.fps()
    )?;
    drop(out);
    let _ = composer.teardown();
    // Stray frames after teardown must be inert.
    if composer.frame(Duration::ZERO) != FrameOutcome::Inactive {
        bail!("composer still live after teardown");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Sample {
            steps,
            options,
            format,
        } => sample(steps, &load_options(options.as_deref())?, format),
        Command::Defaults => {
            let toml = Options::default().to_toml()?;
            write!(std::io::stdout().lock(), "{toml}")?;
            Ok(())
        }
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            writeln!(std::io::stdout().lock(), "{schema}")?;
            Ok(())
        }
        Command::Check { path } => check(&path),
        Command::Play {
            seconds,
            fps,
            options,
        } => play(seconds, fps, &load_options(options.as_deref())?),
    }
}

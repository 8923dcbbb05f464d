use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use easy_animator::{RunConfig, ViewKind};

#[derive(Parser, Debug)]
#[command(name = "easy-animator", version, about = "Render shape animation scripts")]
struct Cli {
    /// Input animation script.
    #[arg(long = "in", visible_alias = "if")]
    in_path: PathBuf,

    /// What to produce.
    #[arg(long, visible_alias = "iv", value_enum)]
    view: ViewKind,

    /// Output file; `out` or omitted means stdout. Ignored by the visual view.
    #[arg(long, short = 'o')]
    out: Option<String>,

    /// Playback speed in ticks per second.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    speed: i64,

    /// Visual view: write every frame as a PNG into this directory.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Visual view: print only this tick.
    #[arg(long, allow_negative_numbers = true)]
    tick: Option<i64>,

    /// Log level for diagnostics on stderr.
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = RunConfig::new(&cli.in_path, cli.view, cli.out.as_deref(), cli.speed)?
        .with_frames_dir(cli.frames_dir)
        .with_tick(cli.tick);

    let mut stdout = std::io::stdout().lock();
    easy_animator::run(&cfg, &mut stdout)
        .with_context(|| format!("animate '{}'", cli.in_path.display()))?;

    if let easy_animator::OutputTarget::File(path) = &cfg.output {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

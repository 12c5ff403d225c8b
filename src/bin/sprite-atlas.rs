use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sprite-atlas",
    version,
    about = "Split a sprite atlas into PNGs or rebuild it from edited sprites"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log debug details.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create one PNG file per atlas frame.
    Extract(ExtractArgs),
    /// Rebuild an atlas from edited sprite PNGs.
    Apply(ApplyArgs),
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Atlas PNG image. Defaults to the manifest's `meta.image`, next to the manifest.
    #[arg(long)]
    atlas: Option<String>,

    /// Atlas JSON manifest.
    #[arg(long)]
    data: String,

    /// Output directory for exported sprites.
    #[arg(long)]
    out: String,

    /// Process several characters; every path argument must contain `{char}`.
    #[arg(long, num_args = 1.., value_name = "NAME")]
    characters: Vec<String>,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Atlas JSON manifest.
    #[arg(long)]
    data: String,

    /// Directory holding the edited sprite PNGs.
    #[arg(long)]
    sprites: String,

    /// Destination path for the rebuilt atlas PNG.
    #[arg(long)]
    out: String,

    /// Base atlas PNG to start from; otherwise a transparent canvas is used.
    #[arg(long)]
    base: Option<String>,

    /// Fail when a sprite's size differs from its frame instead of resizing it.
    #[arg(long)]
    strict: bool,

    /// Process several characters; `--data`, `--sprites` and `--out` must contain `{char}`.
    #[arg(long, num_args = 1.., value_name = "NAME")]
    characters: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    match cli.cmd {
        Command::Extract(args) => cmd_extract(args),
        Command::Apply(args) => cmd_apply(args),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let template = sprite_atlas::ExtractTemplate {
        atlas: args
            .atlas
            .map(|a| sprite_atlas::PathTemplate::new("atlas", a)),
        data: sprite_atlas::PathTemplate::new("data", args.data),
        out: sprite_atlas::PathTemplate::new("out", args.out),
    };

    for job in template.jobs(&args.characters)? {
        let report = job
            .run()
            .with_context(|| format!("extract from '{}'", job.data.display()))?;
        eprintln!(
            "extracted {} sprites to {}",
            report.written.len(),
            job.out.display()
        );
    }
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let template = sprite_atlas::ApplyTemplate {
        data: sprite_atlas::PathTemplate::new("data", args.data),
        sprites: sprite_atlas::PathTemplate::new("sprites", args.sprites),
        out: sprite_atlas::PathTemplate::new("out", args.out),
        base: args
            .base
            .map(|b| sprite_atlas::PathTemplate::new("base", b)),
    };
    let opts = sprite_atlas::ComposeOpts {
        strict_size: args.strict,
    };

    for job in template.jobs(&args.characters)? {
        let report = job
            .run(&opts)
            .with_context(|| format!("apply sprites from '{}'", job.sprites.display()))?;
        eprintln!(
            "wrote {} ({}x{}, {} sprites, {} resized)",
            job.out.display(),
            report.width,
            report.height,
            report.applied,
            report.resized
        );
    }
    Ok(())
}

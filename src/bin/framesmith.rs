use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "framesmith", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a report into a node-tree JSON document.
    Compile(CompileArgs),
    /// Rasterize the compiled screens into a PNG preview.
    Preview(PreviewArgs),
    /// Print the structural fingerprint of the compiled document.
    Fingerprint(InputArgs),
    /// Dry-run the document through an in-memory node factory.
    Apply(ApplyArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input report JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Compile configuration JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CompileArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per document unit.
    #[arg(long, default_value_t = 0.25)]
    scale: f64,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Font families the in-memory host can load.
    #[arg(long = "font", default_values_t = ["Inter".to_string(), "Roboto".to_string()])]
    fonts: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
        Command::Apply(args) => cmd_apply(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load(input: &InputArgs) -> anyhow::Result<(framesmith::CompiledDocument, framesmith::CompileConfig)> {
    let config = match &input.config {
        Some(path) => framesmith::CompileConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => framesmith::CompileConfig::default(),
    };
    let report = framesmith::Report::from_path(&input.in_path)
        .with_context(|| format!("load report '{}'", input.in_path.display()))?;
    let doc = framesmith::ScreenCompiler::new(config.clone()).compile(&report)?;
    Ok((doc, config))
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let (doc, _) = load(&args.input)?;
    match &args.out {
        Some(out) => {
            create_parent_dir(out)?;
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &doc).context("serialize document")?;
            w.flush().with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &doc).context("serialize document")?;
            writeln!(w).context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let (doc, _) = load(&args.input)?;
    let opts = framesmith::PreviewOpts {
        scale: args.scale,
        ..framesmith::PreviewOpts::default()
    };
    let img = framesmith::render_preview(&doc, &opts)?;

    create_parent_dir(&args.out)?;
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} ({}x{})", args.out.display(), img.width(), img.height());
    Ok(())
}

fn cmd_fingerprint(args: InputArgs) -> anyhow::Result<()> {
    let (doc, _) = load(&args)?;
    println!("{}", framesmith::fingerprint_document(&doc));
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let (doc, config) = load(&args.input)?;
    let mut host = framesmith::MemoryFactory::new(args.fonts);
    let report = framesmith::apply(&doc, &mut host, &config.fonts)?;
    println!("page:      {}", host.page_name());
    println!("font:      {}", report.font_family);
    println!("roots:     {}", report.roots);
    println!("nodes:     {}", report.nodes);
    println!("reactions: {}", report.reactions);
    Ok(())
}

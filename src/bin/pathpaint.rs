use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pathpaint", version)]
struct Cli {
    /// Log at debug level (`RUST_LOG` overrides).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load an image, replay a command script, export PNG.
    Edit(EditArgs),
    /// Apply one named filter to an image at its native size.
    Filter(FilterArgs),
}

#[derive(Parser, Debug)]
struct EditArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// JSON array of editor commands.
    #[arg(long)]
    script: Option<PathBuf>,

    /// TTF/OTF font used for path text.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Editor options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = pathpaint::EXPORT_FILE_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// grayscale, sepia, warm, cool, vintage, fade, bright, dark or dramatic.
    #[arg(long)]
    filter: pathpaint::Filter,

    /// Output PNG path.
    #[arg(long, default_value = pathpaint::EXPORT_FILE_NAME)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Edit(args) => cmd_edit(args),
        Command::Filter(args) => cmd_filter(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_opts(path: Option<&Path>) -> anyhow::Result<pathpaint::EditorOpts> {
    let Some(path) = path else {
        return Ok(pathpaint::EditorOpts::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    pathpaint::EditorOpts::from_json(&json)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn read_script(path: &Path) -> anyhow::Result<Vec<pathpaint::Command>> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let cmds: Vec<pathpaint::Command> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse script '{}'", path.display()))?;
    Ok(cmds)
}

fn write_png(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_edit(args: EditArgs) -> anyhow::Result<()> {
    let opts = read_opts(args.config.as_deref())?;
    let mut state = pathpaint::EditorState::new(opts)?;

    if let Some(font_path) = &args.font {
        let bytes = std::fs::read(font_path)
            .with_context(|| format!("read font '{}'", font_path.display()))?;
        let glyphs = pathpaint::ParleyGlyphRasterizer::from_font_bytes(bytes)
            .with_context(|| format!("register font '{}'", font_path.display()))?;
        tracing::info!(family = glyphs.family_name(), "font registered");
        state.set_glyphs(Box::new(glyphs));
    }

    let image = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;
    let loaded =
        pathpaint::apply_command(&mut state, pathpaint::Command::LoadImage { bytes: image })?;
    if loaded == pathpaint::Outcome::Ignored {
        anyhow::bail!("could not decode image '{}'", args.in_path.display());
    }

    if let Some(script) = &args.script {
        let cmds = read_script(script)?;
        let n = cmds.len();
        pathpaint::apply_all(&mut state, cmds)
            .with_context(|| format!("run script '{}'", script.display()))?;
        eprintln!("applied {n} commands");
    }

    let png = pathpaint::encode_png(state.main())?;
    write_png(&args.out, &png)?;

    eprintln!(
        "wrote {} ({}x{}, {} history entries)",
        args.out.display(),
        state.main().width(),
        state.main().height(),
        state.history().len()
    );
    Ok(())
}

fn cmd_filter(args: FilterArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;
    let mut buf = pathpaint::decode_image(&bytes)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?;
    args.filter.apply(&mut buf);
    let png = pathpaint::encode_png(&buf)?;
    write_png(&args.out, &png)?;

    eprintln!("wrote {} ({})", args.out.display(), args.filter);
    Ok(())
}

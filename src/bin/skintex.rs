use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "skintex", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log layout decisions and classifier signals to stderr.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a skin to the modern square layout and write it as PNG.
    Skin(ConvertArgs),
    /// Normalize a cape to its 64x32 grid canvas and write it as PNG.
    Cape(ConvertArgs),
    /// Print the arm model of a skin.
    Model(ModelArgs),
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Resampling filter for scaled draws.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,

    /// Surface settings JSON; `--filter` wins over the file.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input texture (any format the image crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels; the normalized texture is resampled with the surface filter.
    #[arg(long)]
    size: Option<u32>,

    #[command(flatten)]
    surface: SurfaceArgs,
}

#[derive(Parser, Debug)]
struct ModelArgs {
    /// Input skin texture.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print a JSON report instead of the bare model name.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    surface: SurfaceArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

#[derive(Debug, serde::Serialize)]
struct ModelReport {
    source_width: u32,
    source_height: u32,
    layout: skintex::SkinLayout,
    model: skintex::ModelType,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Skin(args) => cmd_skin(args),
        Command::Cape(args) => cmd_cape(args),
        Command::Model(args) => cmd_model(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn make_surface(args: &SurfaceArgs) -> anyhow::Result<skintex::RgbaSurface> {
    let mut settings = match &args.settings {
        Some(path) => read_settings(path)?,
        None => skintex::SurfaceSettings::default(),
    };
    if let Some(choice) = args.filter {
        settings.filter = match choice {
            FilterChoice::Nearest => skintex::ResampleFilter::Nearest,
            FilterChoice::Triangle => skintex::ResampleFilter::Triangle,
            FilterChoice::CatmullRom => skintex::ResampleFilter::CatmullRom,
            FilterChoice::Gaussian => skintex::ResampleFilter::Gaussian,
            FilterChoice::Lanczos3 => skintex::ResampleFilter::Lanczos3,
        };
    }
    Ok(skintex::RgbaSurface::new(settings))
}

fn rescaled(
    surface: skintex::RgbaSurface,
    size: Option<u32>,
) -> anyhow::Result<skintex::RgbaSurface> {
    let Some(width) = size else {
        return Ok(surface);
    };
    let mut out = skintex::RgbaSurface::new(surface.settings());
    skintex::resample_to_width(&mut out, &surface, width)?;
    Ok(out)
}

fn read_settings(path: &Path) -> anyhow::Result<skintex::SurfaceSettings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("open settings '{}'", path.display()))?;
    Ok(skintex::SurfaceSettings::from_json_str(&json)?)
}

fn cmd_skin(args: ConvertArgs) -> anyhow::Result<()> {
    let source = skintex::load_texture_file(&args.in_path)?;
    let mut surface = make_surface(&args.surface)?;

    let layout = skintex::load_skin(&mut surface, &source)?;
    let model = skintex::infer_model_type(&surface)?;
    let surface = rescaled(surface, args.size)?;
    skintex::save_png_file(&args.out, surface.as_image())?;

    eprintln!(
        "wrote {} ({layout} source, {model} model)",
        args.out.display()
    );
    Ok(())
}

fn cmd_cape(args: ConvertArgs) -> anyhow::Result<()> {
    let source = skintex::load_texture_file(&args.in_path)?;
    let mut surface = make_surface(&args.surface)?;

    let cape = skintex::load_cape(&mut surface, &source)?;
    let surface = rescaled(surface, args.size)?;
    let out = surface.as_image();
    skintex::save_png_file(&args.out, out)?;

    eprintln!(
        "wrote {} ({}x{}, {:?} grid)",
        args.out.display(),
        out.width(),
        out.height(),
        cape.grid
    );
    Ok(())
}

fn cmd_model(args: ModelArgs) -> anyhow::Result<()> {
    let source = skintex::load_texture_file(&args.in_path)?;
    let mut surface = make_surface(&args.surface)?;

    let layout = skintex::load_skin(&mut surface, &source)?;
    let model = skintex::infer_model_type(&surface)?;

    if args.json {
        let report = ModelReport {
            source_width: source.width(),
            source_height: source.height(),
            layout,
            model,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{model}");
    }
    Ok(())
}

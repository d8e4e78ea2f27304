use std::{
    cell::Cell,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "scratch-reveal", version)]
struct Cli {
    /// Log stroke-level diagnostics.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint a fresh overlay and write it as a PNG.
    Paint(PaintArgs),
    /// Replay a scripted input session and write the composed frame as a PNG.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Preset supplying raster size, erase radius and default style.
    #[arg(long, value_enum, default_value_t = PresetChoice::MultiStage)]
    preset: PresetChoice,

    /// Style JSON overriding the preset style.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Skip the text label (no font lookup).
    #[arg(long)]
    no_label: bool,
}

#[derive(Parser, Debug)]
struct PaintArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Coverage fraction that must be exceeded to reveal.
    #[arg(long)]
    threshold: Option<f64>,

    /// Coverage measurement strategy.
    #[arg(long, value_enum, default_value_t = StrategyChoice::FullScan)]
    strategy: StrategyChoice,

    /// Content PNG shown under the overlay (resized to the raster). Defaults to ivory.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    MultiStage,
    Circular,
}

impl From<PresetChoice> for scratch_reveal::SurfacePreset {
    fn from(c: PresetChoice) -> Self {
        match c {
            PresetChoice::MultiStage => Self::MultiStage,
            PresetChoice::Circular => Self::Circular,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    FullScan,
    Incremental,
}

impl From<StrategyChoice> for scratch_reveal::CoverageStrategy {
    fn from(c: StrategyChoice) -> Self {
        match c {
            StrategyChoice::FullScan => Self::FullScan,
            StrategyChoice::Incremental => Self::Incremental,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Paint(args) => cmd_paint(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_style_json(path: &Path) -> anyhow::Result<scratch_reveal::SurfaceStyle> {
    let f = File::open(path).with_context(|| format!("open style '{}'", path.display()))?;
    let r = BufReader::new(f);
    let style: scratch_reveal::SurfaceStyle =
        serde_json::from_reader(r).with_context(|| "parse style JSON")?;
    Ok(style)
}

fn resolve_style(args: &SurfaceArgs) -> anyhow::Result<scratch_reveal::SurfaceStyle> {
    let preset: scratch_reveal::SurfacePreset = args.preset.into();
    let style = match &args.style {
        Some(path) => read_style_json(path)?,
        None => preset.style(),
    };
    Ok(if args.no_label {
        style.without_label()
    } else {
        style
    })
}

fn load_content(
    path: Option<&Path>,
    size: scratch_reveal::RasterSize,
) -> anyhow::Result<scratch_reveal::FrameRGBA> {
    let Some(path) = path else {
        return Ok(scratch_reveal::FrameRGBA::solid(
            size,
            scratch_reveal::Rgba8Premul::from_straight_rgba(255, 250, 240, 255),
        ));
    };
    let img = image::open(path)
        .with_context(|| format!("open content '{}'", path.display()))?
        .to_rgba8();
    let img = if img.dimensions() == (size.width(), size.height()) {
        img
    } else {
        image::imageops::resize(
            &img,
            size.width(),
            size.height(),
            image::imageops::FilterType::Triangle,
        )
    };
    Ok(scratch_reveal::FrameRGBA::from_rgba_image(&img))
}

fn write_png(img: &image::RgbaImage, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_paint(args: PaintArgs) -> anyhow::Result<()> {
    let style = resolve_style(&args.surface)?;
    let opts = scratch_reveal::ScratchOpts::for_preset(args.surface.preset.into());
    let surface = scratch_reveal::ScratchSurface::mount(opts, style, (), || {})?;

    write_png(&surface.raster().to_rgba_image(), &args.out)?;
    eprintln!(
        "painted {}x{} overlay -> {}",
        opts.size.width(),
        opts.size.height(),
        args.out.display()
    );
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let script = scratch_reveal::ReplayScript::from_path(&args.script)?;
    let style = resolve_style(&args.surface)?;

    let mut opts = scratch_reveal::ScratchOpts::for_preset(args.surface.preset.into())
        .with_strategy(args.strategy.into());
    if let Some(t) = args.threshold {
        opts = opts.with_threshold(scratch_reveal::CoverageThreshold::new(t)?);
    }

    let content = load_content(args.content.as_deref(), opts.size)?;
    let fired = Rc::new(Cell::new(false));
    let fired_cb = Rc::clone(&fired);
    let mut surface =
        scratch_reveal::ScratchSurface::mount(opts, style, content, move || fired_cb.set(true))?;

    let report = scratch_reveal::replay(&mut surface, &script);
    eprintln!(
        "events={} strokes={} ignored={} skipped={} cleared={} coverage={:.4}",
        report.events,
        report.stats.strokes,
        report.stats.ignored_moves,
        report.stats.skipped_moves,
        report.stats.pixels_cleared,
        report.coverage,
    );
    match report.revealed_at_event {
        Some(i) => eprintln!("revealed at event {i} (callback fired: {})", fired.get()),
        None => eprintln!("not revealed"),
    }

    let frame = surface.compose_over(surface.content())?;
    write_png(&frame.to_rgba_image()?, &args.out)?;
    Ok(())
}

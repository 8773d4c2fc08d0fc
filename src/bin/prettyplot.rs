use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use prettyplot::viz::fonts;
use prettyplot::{BarLayout, FontConfig, GrayBarsOptions, Orientation, gray_bars, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "prettyplot",
    version,
    about = "Render sorted gray bar charts and grayscale color ramps"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a sorted gray bar chart from a CSV or JSON file.
    Bars(BarsArgs),
    /// Print `n` ramp colors as hex, one per line.
    Ramp {
        /// Number of colors.
        n: usize,
    },
    /// Print (or save) the computed bar layout as CSV.
    Layout(LayoutArgs),
}

#[derive(Args, Debug)]
struct BarsArgs {
    /// Input data: CSV with `label,value` header, or a JSON object.
    #[arg(short, long)]
    input: PathBuf,
    /// Output image (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    /// JSON file with chart options (font, order, max_height, ...). Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Lowest value first instead of highest.
    #[arg(long, default_value_t = false)]
    ascending: bool,
    /// Fix the category axis to room for this many bars.
    #[arg(long)]
    max_height: Option<f64>,
    /// Vertical bars instead of horizontal.
    #[arg(long, default_value_t = false)]
    vertical: bool,
    /// Width of the image in pixels.
    #[arg(long)]
    width: Option<u32>,
    /// Height of the image in pixels.
    #[arg(long)]
    height: Option<u32>,
    /// Font family name.
    #[arg(long)]
    font_family: Option<String>,
    /// Font size in pixels.
    #[arg(long)]
    font_size: Option<f64>,
    /// TTF/OTF file to draw text with.
    #[arg(long)]
    font_file: Option<PathBuf>,
    /// Chart title.
    #[arg(long)]
    title: Option<String>,
    /// Locale for tick labels (en, de, fr, ...).
    #[arg(long)]
    locale: Option<String>,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Input data: CSV with `label,value` header, or a JSON object.
    #[arg(short, long)]
    input: PathBuf,
    /// Lowest value first instead of highest.
    #[arg(long, default_value_t = false)]
    ascending: bool,
    /// Save to this CSV file instead of printing.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Bars(args) => cmd_bars(args),
        Command::Ramp { n } => cmd_ramp(n),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn build_options(args: &BarsArgs) -> Result<GrayBarsOptions> {
    let mut opts = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?;
            GrayBarsOptions::from_json(&value)?
        }
        None => GrayBarsOptions::default(),
    };

    if args.ascending {
        opts.order = false;
    }
    if let Some(h) = args.max_height {
        opts.max_height = Some(h);
    }
    if args.vertical {
        opts.orientation = Orientation::Vertical;
    }
    if let Some(w) = args.width {
        opts.size.0 = w;
    }
    if let Some(h) = args.height {
        opts.size.1 = h;
    }
    if args.font_family.is_some() || args.font_size.is_some() {
        let mut font = opts.font.take().unwrap_or_default();
        if let Some(f) = &args.font_family {
            font.family = f.clone();
        }
        if let Some(s) = args.font_size {
            font.size = s;
        }
        opts.font = Some(font);
    }
    if let Some(t) = &args.title {
        opts.title = Some(t.clone());
    }
    if let Some(l) = &args.locale {
        opts.locale = l.clone();
    }
    Ok(opts)
}

fn cmd_bars(args: BarsArgs) -> Result<()> {
    let opts = build_options(&args)?;
    let data = storage::load(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    if let Some(path) = &args.font_file {
        let family = opts
            .font
            .as_ref()
            .map(|f| f.family.clone())
            .unwrap_or_else(|| FontConfig::default().family);
        fonts::register_font_file(&family, path)
            .with_context(|| format!("registering font {}", path.display()))?;
    }

    let fig = gray_bars(&data, &opts)?;
    fig.save(&args.out)?;
    eprintln!("Wrote {} bars to {}", data.len(), args.out.display());
    Ok(())
}

fn cmd_ramp(n: usize) -> Result<()> {
    for c in prettyplot::gray_sequentials(n)? {
        println!("{}", c.hex());
    }
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> Result<()> {
    let data = storage::load(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    let layout = BarLayout::compute(&data, !args.ascending)?;

    if let Some(path) = &args.out {
        storage::save_layout_csv(&layout, path)?;
        eprintln!("Saved {} rows to {}", layout.len(), path.display());
        return Ok(());
    }
    storage::write_layout_csv(&layout, std::io::stdout().lock())?;
    Ok(())
}

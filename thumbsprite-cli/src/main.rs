//! Thumbsprite CLI Tool
//!
//! Command-line interface for checking sprite-sheet preview configurations and
//! computing the tooltip style for a hover position.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use thumbsprite_core::{format_timestamp, NaturalSize, PreviewConfig, StyleMap, TooltipLayout};
use thumbsprite_preview::{
    FileImageMetadata, HostUi, ImageMetadataProvider, PointerEventKind, PointerMove,
    PreviewController, PreviewOutcome, StaticImageMetadata, Surface,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thumbsprite")]
#[command(about = "Sprite-sheet thumbnail previews for media player seek bars")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a preview configuration file
    Validate {
        /// Configuration JSON path
        config: PathBuf,
    },

    /// Compute the tooltip style for a pointer position
    Preview {
        /// Configuration JSON path
        config: PathBuf,

        /// Pointer offset from the track's left edge in pixels
        #[arg(long)]
        offset: f64,

        /// Track width in pixels
        #[arg(long)]
        track_width: f64,

        /// Media duration in seconds
        #[arg(long)]
        duration: f64,

        /// Player width in pixels
        #[arg(long)]
        viewport_width: f64,

        /// Top edge of the control bar
        #[arg(long, default_value = "0")]
        controls_top: f64,

        /// Top edge of the seek bar
        #[arg(long, default_value = "0")]
        seek_bar_top: f64,

        /// Sprite sheet size as WIDTHxHEIGHT instead of reading the image
        #[arg(long, value_parser = parse_size)]
        sheet_size: Option<NaturalSize>,

        /// Print the style as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => validate_config(&config)?,

        Commands::Preview {
            config,
            offset,
            track_width,
            duration,
            viewport_width,
            controls_top,
            seek_bar_top,
            sheet_size,
            json,
        } => {
            let mut host = HeadlessHost {
                duration,
                viewport_width,
                layout: TooltipLayout {
                    controls_top,
                    seek_bar_top,
                },
                style: None,
            };
            preview(&config, &mut host, PointerMove::new(offset, track_width), sheet_size, json)?
        }
    }

    Ok(())
}

fn parse_size(s: &str) -> std::result::Result<NaturalSize, String> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let width = width.trim().parse().map_err(|e| format!("invalid width: {e}"))?;
    let height = height.trim().parse().map_err(|e| format!("invalid height: {e}"))?;
    Ok(NaturalSize::new(width, height))
}

fn load_config(path: &Path) -> Result<PreviewConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    PreviewConfig::from_json(&json).context("Failed to parse configuration")
}

fn validate_config(path: &Path) -> Result<()> {
    println!("Validating configuration: {}", path.display());

    let config = load_config(path)?;
    let sprites = config.sprite_set().context("Invalid sprite configuration")?;

    println!("\n=== Sprites ({}) ===", sprites.len());
    for (i, sprite) in sprites.iter().enumerate() {
        println!(
            "  [{}] {} covers {} - {} ({} cells of {}x{}, every {}s)",
            i,
            sprite.url,
            format_timestamp(sprite.start),
            format_timestamp(sprite.end()),
            sprite.cell_count(),
            sprite.width,
            sprite.height,
            sprite.interval
        );
    }

    if config.responsive_width_limit > 0.0 {
        println!("Responsive width limit: {}px", config.responsive_width_limit);
    } else {
        println!("Responsive scaling disabled");
    }
    println!("Uncovered timestamps: {:?}", config.uncovered);

    Ok(())
}

fn preview(
    path: &Path,
    host: &mut HeadlessHost,
    event: PointerMove,
    sheet_size: Option<NaturalSize>,
    json: bool,
) -> Result<()> {
    let config = load_config(path)?;

    let images: Box<dyn ImageMetadataProvider> = match sheet_size {
        Some(size) => {
            let mut sizes = StaticImageMetadata::new();
            for url in config.sprites.iter().filter_map(|s| s.url.as_deref()) {
                sizes.insert(url, size);
            }
            Box::new(sizes)
        }
        None => {
            let root = path.parent().unwrap_or_else(|| Path::new("."));
            Box::new(FileImageMetadata::new(root))
        }
    };

    let Some(mut controller) = PreviewController::attach(&config, host, images)
        .context("Invalid sprite configuration")?
    else {
        bail!("Preview host is missing required surfaces");
    };

    match controller.on_pointer_move(host, event) {
        PreviewOutcome::Applied { url, label, .. } => {
            let style = host.style.take().context("No style was applied")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&style)?);
            } else {
                println!("Preview at {} from {}", label, url);
                for (property, value) in style.iter() {
                    println!("  {}: {};", property, value);
                }
            }
        }
        PreviewOutcome::Pending { url } => {
            bail!("Could not read sprite sheet size for {url}, pass --sheet-size");
        }
    }

    controller.detach(host);
    Ok(())
}

/// Host with fixed layout values that keeps the last applied style
struct HeadlessHost {
    duration: f64,
    viewport_width: f64,
    layout: TooltipLayout,
    style: Option<StyleMap>,
}

impl HostUi for HeadlessHost {
    fn has_surface(&self, _surface: Surface) -> bool {
        true
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn tooltip_layout(&self) -> TooltipLayout {
        self.layout
    }

    fn listen(&mut self, _kind: PointerEventKind) {}

    fn unlisten(&mut self, _kind: PointerEventKind) {}

    fn add_class(&mut self, _class: &str) {}

    fn set_tooltip_style(&mut self, style: &StyleMap) {
        self.style = Some(style.clone());
    }
}

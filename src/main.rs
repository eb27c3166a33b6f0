use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use photostamp::codec::{EncodedImage, ImageSource};
use photostamp::config::Config;
use photostamp::layout::LayoutConfig;
use photostamp::logging::{init_subscriber, LogFormat};
use std::path::{Path, PathBuf};

/// Photostamp - stretch a watermark over a photo, or fit text onto a template
#[derive(Parser, Debug)]
#[command(name = "photostamp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log output format (text or json)
    #[arg(long, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Overlay the watermark image on a photo
    Watermark {
        /// Photo to stamp
        #[arg(long)]
        photo: PathBuf,

        /// Watermark image (overrides watermark.path)
        #[arg(long)]
        watermark: Option<PathBuf>,

        /// Output file (defaults to result.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fit text onto the template image
    Text {
        /// Text to render
        #[arg(long)]
        text: String,

        /// Template image (overrides text.template_path)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Font file (overrides text.font_path)
        #[arg(long)]
        font: Option<PathBuf>,

        /// Stretch-justify lines
        #[arg(long)]
        justify: bool,

        /// Output file (defaults to text.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_subscriber(args.log_format)
        .map_err(|e| anyhow!("Failed to initialize logging subsystem: {}", e))?;

    let config = match &args.config {
        Some(path) => {
            let config = Config::from_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!(
                config_file = %path.display(),
                watermark = config.watermark.is_some(),
                text = config.text.is_some(),
                "Configuration loaded successfully"
            );
            config
        }
        None => Config::default(),
    };

    match args.command {
        Command::Watermark {
            photo,
            watermark,
            output,
        } => {
            let watermark = watermark
                .or_else(|| config.watermark.map(|w| w.path))
                .ok_or_else(|| anyhow!("No watermark given: pass --watermark or set watermark.path"))?;

            let photo_bytes = std::fs::read(&photo)
                .with_context(|| format!("Failed to read photo {}", photo.display()))?;

            let encoded = photostamp::composite(&photo_bytes, &watermark)?;
            write_output(&encoded, output.as_deref())
        }
        Command::Text {
            text,
            template,
            font,
            justify,
            output,
        } => {
            let (config_template, mut layout) = match config.text {
                Some(settings) => (Some(settings.template_path), Some(settings.layout)),
                None => (None, None),
            };

            if let Some(font) = font {
                match &mut layout {
                    Some(layout) => layout.font_path = font,
                    None => layout = Some(LayoutConfig::new(font)),
                }
            }
            let mut layout = layout
                .ok_or_else(|| anyhow!("No font given: pass --font or set text.font_path"))?;
            layout.justify |= justify;

            let template = template.or(config_template).ok_or_else(|| {
                anyhow!("No template given: pass --template or set text.template_path")
            })?;

            let render =
                photostamp::layout_and_render(ImageSource::Path(&template), &text, &layout)?;

            write_output(&render.image, output.as_deref())
        }
    }
}

fn write_output(encoded: &EncodedImage, output: Option<&Path>) -> anyhow::Result<()> {
    let path = output.unwrap_or_else(|| Path::new(encoded.name));
    std::fs::write(path, &encoded.data)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(output = %path.display(), bytes = encoded.len(), "Wrote output");
    Ok(())
}

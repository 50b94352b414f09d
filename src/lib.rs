//! Welcome to the code-documentation of segmentcut!
//!
//! Drag across a displayed image to select an axis-aligned region of interest. The
//! [`viewer::Viewer`] turns the gesture events of a display surface into a [`Rectangle`]
//! whose top left corner is always the minimum corner, whichever way the user dragged.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::Context;
use clap::crate_name;
use cli::{Cli, Command, LogLevel, OutputFormat};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use xdg::BaseDirectories;

use config::Config;
use shape::{point::Point, rectangle::Rectangle};
use viewer::{ImageSource, Viewer};

pub mod cli;
pub mod config;
pub mod overlay;
pub mod replay;
pub mod shape;
pub mod tool;
pub mod viewer;

static XDG: OnceLock<BaseDirectories> = OnceLock::new();

// The following paths must be relative to `XDG`!
const LOG_FILENAME: &str = "log.log";
const CONFIG_FILENAME: &str = "config.toml";

/// Shown if neither the config nor the command line names an image.
const PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// An enum error which contains all possible error sources while executing segmentcut.
///
/// # Convention
/// Just click on the `Error` value of each error-enum-value to get more information about them.
///
/// ## Example
/// If you want to understand what [`Error::Replay`] catches, then just click
/// on its `Error` type and you should get to [`replay::Error`] where a more detailed
/// description waits for you!
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An error occured in the config")]
    Config(#[from] config::Error),

    #[error("An error occured while replaying gestures")]
    Replay(#[from] replay::Error),
}

pub fn init_logging(level: &LogLevel, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Couldn't create the log directory")?;
    }
    let log_file = File::create(path).context("Couldn't create and open log path")?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(LevelFilter::from(level))
        .without_time()
        .with_ansi(true)
        .with_target(false)
        .with_file(true);

    if std::env::var_os("RUST_LOG").is_some() {
        subscriber_builder
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        subscriber_builder.init();
    }

    tracing::debug!("Logger initialised");
    Ok(())
}

pub fn get_xdg() -> &'static BaseDirectories {
    XDG.get_or_init(|| {
        xdg::BaseDirectories::with_prefix(crate_name!()).expect("Couldn't access XDG")
    })
}

pub fn get_default_log_path() -> PathBuf {
    get_xdg().get_state_file(LOG_FILENAME)
}

pub fn get_default_config_path() -> PathBuf {
    get_xdg().get_config_file(CONFIG_FILENAME)
}

pub fn start(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_or_default(&cli.config).map_err(Error::from)?;
    tracing::debug!("Using config: {:?}", config);

    run(
        cli.command,
        config,
        std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )
}

/// Executes `command`. A replay script named `-` is read from `stdin`.
fn run<R: BufRead, W: Write>(
    command: Command,
    config: Config,
    stdin: R,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Normalize { x1, y1, x2, y2 } => {
            let rectangle = Rectangle::from_points(Point::new(x1, y1), Point::new(x2, y2));
            writeln!(out, "{}", rectangle)?;
        }
        Command::Replay {
            script,
            image,
            format,
        } => {
            let default_image = ImageSource::Path(
                config
                    .image
                    .default
                    .unwrap_or_else(|| PathBuf::from(PLACEHOLDER_IMAGE)),
            );
            let mut viewer = Viewer::new(default_image, image.as_deref(), config.overlay);
            tracing::info!("Displaying {}", viewer.image());

            let events = read_script(&script, stdin)?;
            let rectangles = replay::run(&mut viewer, events);

            let report = Report {
                image: viewer.image().to_string(),
                rectangles,
                overlay: viewer.overlay(),
            };
            out.write_all(report.render(format)?.as_bytes())?;
        }
    }

    Ok(())
}

fn read_script<R: BufRead>(path: &Path, stdin: R) -> anyhow::Result<Vec<tool::GestureEvent>> {
    let events = if path == Path::new("-") {
        replay::parse(stdin)
    } else {
        let file = File::open(path)
            .with_context(|| format!("Couldn't open gesture script '{}'", path.display()))?;
        replay::parse(BufReader::new(file))
    };

    events.map_err(|e| Error::from(e).into())
}

/// What `replay` prints once every gesture has been handled.
#[derive(Debug, Serialize)]
struct Report {
    image: String,
    #[serde(rename = "rectangle")]
    rectangles: Vec<Rectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<overlay::Overlay>,
}

impl Report {
    fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Toml => {
                toml::to_string(self).context("Couldn't serialize the replay report")
            }
            OutputFormat::Text => {
                let mut out = format!("image: {}\n", self.image);

                for rectangle in &self.rectangles {
                    out.push_str(&format!("{}\n", rectangle));
                }

                if let Some(overlay) = &self.overlay {
                    out.push_str(&format!(
                        "overlay: left={} top={} width={} height={}\n",
                        overlay.left, overlay.top, overlay.width, overlay.height
                    ));
                }

                Ok(out)
            }
        }
    }
}

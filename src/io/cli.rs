//! Command-line front end: load, select, generate and package in one run

use crate::io::configuration::{
    ARCHIVE_PREFIX, DEFAULT_PROCESSING_DELAY_MS, FOLDER_PREFIX, PREVIEW_FRAME_DELAY_MS,
    PREVIEW_SUFFIX, SHEET_FRAMES,
};
use crate::io::error::Result;
use crate::io::package::PackNaming;
use crate::io::progress::ProcessingIndicator;
use crate::io::session::Session;
use crate::io::visualization::export_sheet_preview;
use crate::policy::{Category, LayoutKind};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "tilepack")]
#[command(
    author,
    version,
    about = "Build Redot asset packs from a single reference image"
)]
/// Command-line arguments for the pack builder
pub struct Cli {
    /// Reference image to build the pack from
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Asset category: terrain_basic, structure, liquid or nature_prop
    #[arg(short, long, default_value = "terrain_basic")]
    pub category: Category,

    /// Layout overriding the category default: atlas, sheet or single
    #[arg(short, long)]
    pub layout: Option<LayoutKind>,

    /// Directory for the pack archive (defaults to the image's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Simulated processing time in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_PROCESSING_DELAY_MS)]
    pub delay_ms: u64,

    /// Also write an animated GIF preview when the layout is a sheet
    #[arg(short, long)]
    pub preview: bool,

    /// Prefix of the archive file name
    #[arg(long, default_value = ARCHIVE_PREFIX)]
    pub archive_prefix: String,

    /// Prefix of the folder inside the archive
    #[arg(long, default_value = FOLDER_PREFIX)]
    pub folder_prefix: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug details of every drawing phase
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Directory the pack is written to
    pub fn output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.image
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }

    /// Archive and folder naming from the prefix flags
    pub fn naming(&self) -> PackNaming {
        PackNaming {
            archive_prefix: self.archive_prefix.clone(),
            folder_prefix: self.folder_prefix.clone(),
        }
    }

    /// Layout the run will use: the override if given, else the category default
    pub fn effective_layout(&self) -> LayoutKind {
        self.layout
            .unwrap_or_else(|| crate::policy::default_layout_for(self.category))
    }
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flag. Returns `false` when a
/// subscriber was already installed, in which case that one keeps receiving
/// events.
pub fn init_tracing(verbose: bool) -> bool {
    let filter = if verbose { "debug" } else { "info" };
    match tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "keeping the existing tracing subscriber");
            false
        }
    }
}

/// Files produced by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutcome {
    /// Written zip archive
    pub archive: PathBuf,
    /// Animated preview, when requested for a sheet
    pub preview: Option<PathBuf>,
}

/// Drives one session from the parsed arguments
pub struct PackBuilder {
    cli: Cli,
    indicator: ProcessingIndicator,
}

impl PackBuilder {
    /// Create a builder for the given arguments
    pub fn new(cli: Cli) -> Self {
        let indicator = ProcessingIndicator::for_quiet(!cli.should_show_progress());
        Self { cli, indicator }
    }

    /// Parsed arguments
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Load the image, generate the layout and write the pack
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image cannot be read or decoded
    /// - The archive or preview cannot be written
    pub async fn run(&self) -> Result<PackOutcome> {
        match self.build().await {
            Ok(outcome) => {
                self.indicator
                    .finish(&format!("Pack written to {}", outcome.archive.display()));
                Ok(outcome)
            }
            Err(err) => {
                self.indicator.abandon();
                if err.is_user_error() {
                    warn!(%err, "pack not built");
                } else {
                    error!(%err, "pack not built");
                }
                Err(err)
            }
        }
    }

    async fn build(&self) -> Result<PackOutcome> {
        let mut session = Session::new(self.cli.category)
            .with_processing_delay(Duration::from_millis(self.cli.delay_ms));

        let hint = session.select_category(self.cli.category);
        info!("{hint}");
        if let Some(layout) = self.cli.layout {
            session.override_layout(layout);
        }

        session.load_image(&self.cli.image)?;

        self.indicator.start("Processing geometry...");
        session.generate().await?;

        self.indicator.stage("Packaging assets...");
        let output_dir = self.cli.output_dir();
        let naming = self.cli.naming();
        let archive = session.package(&naming, &output_dir)?;

        let preview = self.write_preview(&session, &naming, &output_dir)?;

        Ok(PackOutcome { archive, preview })
    }

    fn write_preview(
        &self,
        session: &Session,
        naming: &PackNaming,
        output_dir: &Path,
    ) -> Result<Option<PathBuf>> {
        if !self.cli.preview {
            return Ok(None);
        }
        let Some(result) = session.last_result() else {
            return Ok(None);
        };
        if result.layout != LayoutKind::Sheet {
            warn!(layout = %result.layout, "preview is only produced for sheet layouts");
            return Ok(None);
        }

        let archive_name = naming.archive_name(result.category);
        let stem = archive_name.trim_end_matches(".zip");
        let path = output_dir.join(format!("{stem}{PREVIEW_SUFFIX}.gif"));
        export_sheet_preview(&result.raster, SHEET_FRAMES, PREVIEW_FRAME_DELAY_MS, &path)?;
        info!(preview = %path.display(), "sheet preview written");
        Ok(Some(path))
    }
}

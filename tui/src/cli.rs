use clap::Parser;
use std::path::PathBuf;

/// Render a personal portfolio as a scrollable terminal page.
#[derive(Parser, Debug, Default)]
#[command(name = "folio", version)]
pub struct Cli {
    /// GitHub account whose public repositories fill the projects section.
    #[arg(long, short = 'u', value_name = "NAME")]
    pub user: Option<String>,

    /// Directory holding config.toml, profile.toml, and the gallery.
    /// Defaults to $FOLIO_HOME, then ~/.folio.
    #[arg(long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Fraction of a section that must be visible before it reveals (0.0-1.0).
    #[arg(long, value_name = "RATIO")]
    pub threshold: Option<f32>,

    /// Directory holding gallery images (image-01.png, image-02.png, ...).
    #[arg(long = "gallery-dir", value_name = "DIR")]
    pub gallery_dir: Option<PathBuf>,
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ticket::TicketStatus;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tickets: TicketsConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Ticket batch generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TicketsConfig {
    /// Number of tickets in the batch.
    #[serde(default = "default_total_count")]
    pub total_count: u32,
    /// Prefix for every ticket link. The ticket ID is appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Status written to every generated row.
    #[serde(default)]
    pub status: TicketStatus,
    /// Track issued IDs and reroll on collision instead of relying on the
    /// size of the ID space alone.
    #[serde(default = "default_true")]
    pub reroll_duplicates: bool,
}

impl Default for TicketsConfig {
    fn default() -> Self {
        Self {
            total_count: default_total_count(),
            base_url: default_base_url(),
            status: TicketStatus::default(),
            reroll_duplicates: true,
        }
    }
}

fn default_total_count() -> u32 {
    1500
}

fn default_base_url() -> String {
    "https://tantalize.lk/t/".to_string()
}

fn default_true() -> bool {
    true
}

/// File locations shared by the generator and the renderer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// CSV written by the generator and read by the renderer.
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    /// Directory receiving one `{ID}.png` per ticket.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("tantalize_tickets.csv")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("qr_images_normal")
}

/// QR rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Pixel edge length of one QR module.
    #[serde(default = "default_box_size")]
    pub box_size: u32,
    /// Quiet zone width, in modules.
    #[serde(default = "default_border")]
    pub border: u32,
    /// Pixels with R, G and B all strictly above this become transparent.
    #[serde(default = "default_threshold")]
    pub transparency_threshold: u8,
    /// Emit a progress line every this many images.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            box_size: default_box_size(),
            border: default_border(),
            transparency_threshold: default_threshold(),
            progress_interval: default_progress_interval(),
        }
    }
}

fn default_box_size() -> u32 {
    10
}

fn default_border() -> u32 {
    2
}

fn default_threshold() -> u8 {
    240
}

fn default_progress_interval() -> usize {
    100
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments. Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Render the Glint demo scene to PNG frames")]
pub struct Args {
    /// JSON file with render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// OBJ file for the main mesh (a cube when omitted)
    #[arg(short, long)]
    pub mesh: Option<PathBuf>,

    /// Directory the frames are written to
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of animation frames to render
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Grid slices per axis for the sphere mesh (0 disables the grid)
    #[arg(long)]
    pub slices: Option<usize>,

    /// Subdivision level of the sphere mesh
    #[arg(long)]
    pub subdivisions: Option<u32>,

    /// Render on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Cancel rendering after this many milliseconds
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

use std::path::PathBuf;

use clap::Parser;

use crate::cga::image::{self, Limits};

/// Shows a CGA text image scaled and centred in a fixed-size window
#[derive(Parser, Debug)]
#[command(name = "cgaview", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
    /// Window width in pixels
    #[clap(long, default_value_t=800)]
    pub width: u32,
    /// Window height in pixels
    #[clap(long, default_value_t=600)]
    pub height: u32,
    /// Maximum number of image rows accepted
    #[clap(long, default_value_t=image::MAX_ROWS)]
    pub max_rows: usize,
    /// Maximum length of a single input line
    #[clap(long, default_value_t=image::MAX_LINE_LENGTH)]
    pub max_line_length: usize,
    /// Write the frame to this BMP file instead of opening a window
    #[clap(long)]
    pub export: Option<PathBuf>,
    /// Image file
    pub file: PathBuf,
}

impl Cli {
    pub fn limits(&self) -> Limits {
        Limits{ max_rows: self.max_rows, max_line_length: self.max_line_length }
    }
}

/// Exit code for a failed parse: 0 for help and version output, 1 otherwise.
pub fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

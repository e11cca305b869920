use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CgaError {
    #[error("cannot open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("line {line} is longer than {limit} bytes")]
    LineTooLong { line: usize, limit: usize },
    #[error("image has more than {limit} rows")]
    TooManyRows { limit: usize },
    #[error("window {width}x{height} is too large")]
    WindowTooLarge { width: u32, height: u32 },
    #[error("degenerate image: {0}")]
    DegenerateImage(Degenerate),
}

/// Why an image cannot be given a positive integer zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
    /// No line carried a terminator.
    Empty,
    /// Rows exist, but every one of them is empty.
    ZeroWidth,
    /// Image too large to display at any positive integer scale.
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degenerate::Empty => { write!(f, "no rows") },
            Degenerate::ZeroWidth => { write!(f, "all rows are empty") },
            Degenerate::TooLarge{ width, height } => {
                write!(f, "{}x{} does not fit the window at any positive scale", width, height)
            },
        }
    }
}

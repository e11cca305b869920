//! Parser for the line-oriented CGA text format.
//!
//! Every line holding a `;` contributes one row: the bytes in front of the
//! first terminator. Anything after it, and lines without a terminator at
//! all, are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::CgaError;

pub const TERMINATOR: u8 = b';';
pub const MAX_ROWS: usize = 1024;
pub const MAX_LINE_LENGTH: usize = 1024;

/// Upper bounds enforced while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_rows: usize,
    /// Bytes per line, excluding the line ending.
    pub max_line_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self{ max_rows: MAX_ROWS, max_line_length: MAX_LINE_LENGTH }
    }
}

pub struct CgaImage {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl CgaImage {
    pub fn load<P: AsRef<Path>>(path: P, limits: &Limits) -> Result<Self, CgaError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CgaError::FileOpen{ path: path.to_path_buf(), source })?;
        Self::parse(BufReader::new(file), limits)
    }

    pub fn parse<R: BufRead>(mut rdr: R, limits: &Limits) -> Result<Self, CgaError> {
        let mut rows = Vec::new();
        let mut width: usize = 0;
        let mut line = Vec::new();
        let mut line_nr: usize = 0;
        // room for the longest allowed line plus "\r\n"
        let cap = (limits.max_line_length as u64).saturating_add(2);
        loop {
            line.clear();
            if rdr.by_ref().take(cap).read_until(b'\n', &mut line)? == 0 { break; }
            line_nr += 1;
            if line.last() == Some(&b'\n') { line.pop(); }
            if line.last() == Some(&b'\r') { line.pop(); }

            // a capped read without newline also lands here
            if line.len() > limits.max_line_length {
                return Err(CgaError::LineTooLong{ line: line_nr, limit: limits.max_line_length });
            }

            let Some(end) = line.iter().position(|&b| b == TERMINATOR) else {
                log::trace!("line {}: no terminator, skipped", line_nr);
                continue;
            };
            if rows.len() == limits.max_rows {
                return Err(CgaError::TooManyRows{ limit: limits.max_rows });
            }
            width = std::cmp::max(width, end);
            rows.push(line[..end].to_vec());
        }
        log::debug!("parsed {} lines into {} rows, width {}", line_nr, rows.len(), width);
        Ok(Self{ rows, width })
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of accepted rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        self.rows.get(y).map(|row| row.as_slice())
    }
}

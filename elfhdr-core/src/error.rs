//! Error type shared by every stage of the header reader.
//!
//! Every error is fatal. The binary prints the `Display` form as a single
//! line on stderr and exits with [`HeaderError::exit_status`].

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Process exit status used for every failure.
pub const EXIT_FAILURE: u8 = 98;

#[derive(Debug)]
pub enum HeaderError {
    /// Wrong number of command-line arguments.
    Usage,

    /// The input path could not be opened for reading.
    FileOpen { path: PathBuf, source: io::Error },

    /// Reading the header bytes failed.
    Read { path: PathBuf, source: io::Error },

    /// Closing the descriptor failed.
    Close { fd: i32, source: io::Error },

    /// The first four bytes are not `\x7fELF` (strict mode only).
    NotElf,

    /// A header slice is shorter than the layout requires.
    Truncated { needed: usize, got: usize },
}

impl HeaderError {
    pub fn exit_status(&self) -> u8 {
        EXIT_FAILURE
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::Usage => write!(f, "Usage: elf_header filename"),
            HeaderError::FileOpen { path, .. } => {
                write!(f, "Error: Can't read file {}", path.display())
            }
            HeaderError::Read { path, .. } => {
                write!(f, "Error: Can't read from file {}", path.display())
            }
            HeaderError::Close { fd, .. } => write!(f, "Error: Can't close fd {fd}"),
            HeaderError::NotElf => write!(
                f,
                "Error: Not an ELF file - it has the wrong magic bytes at the start"
            ),
            HeaderError::Truncated { needed, got } => {
                write!(f, "Error: ELF header truncated: need {needed} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::FileOpen { source, .. }
            | HeaderError::Read { source, .. }
            | HeaderError::Close { source, .. } => Some(source),
            _ => None,
        }
    }
}

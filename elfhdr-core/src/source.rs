use crate::error::HeaderError;
use crate::header::elf::ELF64_HEADER_SIZE;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// The first bytes of a file, zero-filled past `len` when the file is
/// shorter than an ELF64 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    pub bytes: [u8; ELF64_HEADER_SIZE],
    pub len: usize,
}

impl RawHeader {
    pub fn is_truncated(&self) -> bool {
        self.len < ELF64_HEADER_SIZE
    }
}

/// An input file opened for a single header read.
///
/// `close` consumes the handle, so nothing can touch the descriptor after it
/// has been released.
#[derive(Debug)]
pub struct ElfFile {
    path: PathBuf,
    file: File,
}

impl ElfFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HeaderError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| HeaderError::FileOpen {
            path: path.clone(),
            source,
        })?;
        log::debug!("opened {}", path.display());
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads up to one ELF64 header worth of bytes from the current position.
    ///
    /// A short file is not an error; the missing tail reads as zeroes and
    /// `RawHeader::len` records how much was actually there.
    pub fn read_header(&mut self) -> Result<RawHeader, HeaderError> {
        let mut buf = Vec::with_capacity(ELF64_HEADER_SIZE);
        self.file
            .by_ref()
            .take(ELF64_HEADER_SIZE as u64)
            .read_to_end(&mut buf)
            .map_err(|source| HeaderError::Read {
                path: self.path.clone(),
                source,
            })?;

        let mut bytes = [0u8; ELF64_HEADER_SIZE];
        bytes[..buf.len()].copy_from_slice(&buf);
        let raw = RawHeader {
            bytes,
            len: buf.len(),
        };

        if raw.is_truncated() {
            log::warn!(
                "{}: only {} of {} header bytes present, rest zero-filled",
                self.path.display(),
                raw.len,
                ELF64_HEADER_SIZE
            );
        } else {
            log::debug!("read {} header bytes", raw.len);
        }
        Ok(raw)
    }

    #[cfg(unix)]
    pub fn close(self) -> Result<(), HeaderError> {
        use std::io;
        use std::os::unix::io::IntoRawFd;

        let fd = self.file.into_raw_fd();
        // SAFETY: `into_raw_fd` gave up ownership, so this is the only close of `fd`.
        if unsafe { libc::close(fd) } == -1 {
            return Err(HeaderError::Close {
                fd,
                source: io::Error::last_os_error(),
            });
        }
        log::debug!("closed fd {fd} ({})", self.path.display());
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn close(self) -> Result<(), HeaderError> {
        drop(self.file);
        log::debug!("closed {}", self.path.display());
        Ok(())
    }
}

/// Opens `path`, reads its header bytes and closes it again.
///
/// Close is attempted whenever the open succeeded. If both the read and the
/// close fail, the read error is returned.
pub fn read_raw_header<P: AsRef<Path>>(path: P) -> Result<RawHeader, HeaderError> {
    let mut file = ElfFile::open(path)?;
    let read = file.read_header();
    let closed = file.close();

    let raw = read?;
    closed?;
    Ok(raw)
}

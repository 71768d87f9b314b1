use crate::error::{ProcessingError, Result};
use memmap::Mmap;
use std::fmt;
use std::fs::{self, File};
use std::ops::Deref;
use std::path::Path;

/// How the input file is brought into memory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LoadMode {
    /// Read the whole file into a heap buffer.
    #[default]
    Read,
    /// Map the file into the address space.
    Mmap,
}

/// The complete, immutable content of the input file.
pub enum Input {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Owned(_) => "Owned",
            Self::Mapped(_) => "Mapped",
        };
        f.debug_struct("Input")
            .field("kind", &kind)
            .field("len", &self.len())
            .finish()
    }
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Mapped(map) => map,
        }
    }
}

/// Loads `path` completely before any scanning starts. Every I/O failure is
/// reported here.
pub fn load(path: &Path, mode: LoadMode) -> Result<Input> {
    let io_error = |source| ProcessingError::Io {
        path: path.to_path_buf(),
        source,
    };

    match mode {
        LoadMode::Read => fs::read(path).map(Input::Owned).map_err(io_error),
        LoadMode::Mmap => {
            let file = File::open(path).map_err(io_error)?;
            // zero-length mappings are rejected by the OS
            if file.metadata().map_err(io_error)?.len() == 0 {
                return Ok(Input::Owned(Vec::new()));
            }
            // SAFETY: the mapping is read-only. The file must not be truncated
            // while it is mapped.
            let map = unsafe { Mmap::map(&file) }.map_err(io_error)?;
            Ok(Input::Mapped(map))
        }
    }
}

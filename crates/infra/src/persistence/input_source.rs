// crates/infra/src/persistence/input_source.rs
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Cursor, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use wordtally_shared_kernel::{InfraResult, InfrastructureError};

/// A seekable byte source: a named file, or bytes already in memory.
///
/// Standard input cannot be rewound, so it is drained into memory up front
/// and served from a cursor like any other in-memory input.
#[derive(Debug)]
pub enum InputSource {
    File { path: PathBuf, reader: BufReader<File> },
    Memory { label: String, cursor: Cursor<Vec<u8>> },
}

impl InputSource {
    /// Opens `path`, or reads stdin when no path is given.
    ///
    /// # Errors
    ///
    /// [`InfrastructureError::FileOpen`] if the file cannot be opened,
    /// [`InfrastructureError::Read`] if stdin cannot be drained.
    pub fn open(path: Option<&Path>) -> InfraResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::from_stdin(),
        }
    }

    pub fn from_path(path: &Path) -> InfraResult<Self> {
        let file = File::open(path).map_err(|source| InfrastructureError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened input file");
        Ok(Self::File {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    pub fn from_stdin() -> InfraResult<Self> {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|source| InfrastructureError::Read { source })?;
        tracing::debug!(bytes = buf.len(), "buffered standard input");
        Ok(Self::from_bytes("<stdin>", buf))
    }

    pub fn from_bytes(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Memory {
            label: label.into(),
            cursor: Cursor::new(bytes),
        }
    }

    /// Human-readable name for diagnostics.
    pub fn label(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::Memory { label, .. } => label.clone(),
        }
    }
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File { reader, .. } => reader.read(buf),
            Self::Memory { cursor, .. } => cursor.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::File { reader, .. } => reader.fill_buf(),
            Self::Memory { cursor, .. } => cursor.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::File { reader, .. } => reader.consume(amt),
            Self::Memory { cursor, .. } => cursor.consume(amt),
        }
    }
}

impl Seek for InputSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Self::File { reader, .. } => reader.seek(pos),
            Self::Memory { cursor, .. } => cursor.seek(pos),
        }
    }
}

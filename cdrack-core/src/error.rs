use std::{error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    InvalidIdFormat(String),
    FileNotFound(PathBuf),
    CorruptSnapshot(Box<dyn error::Error + Send>),
    EntryNotFound(i64),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdFormat(text) => write!(f, "ID {:?} is not an integer", text),
            Self::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::CorruptSnapshot(err) => write!(f, "Corrupt inventory file: {}", err),
            Self::EntryNotFound(id) => write!(f, "No entry with ID {}", id),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Error {
        Error::CorruptSnapshot(err)
    }
}

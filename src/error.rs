use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dictionary is not valid UTF-8: {}", .0)]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("{}", .0)]
    Io(#[from] std::io::Error),
}

use std::path::PathBuf;

use tokio::{
    io::{AsyncRead, AsyncReadExt},
    sync::Mutex,
};
use tracing::{debug, info};

use crate::error::DictionaryError;

/// The words used when no dictionary is supplied.
pub const SAMPLE_WORDS: [&str; 8] = [
    "Trophy", "Sunday", "Troop", "Trot", "Trap", "Running", "Apple", "Abundant",
];

/// Somewhere a list of dictionary words can be loaded from.
#[async_trait::async_trait]
pub trait WordSource {
    async fn load(&self) -> Result<Vec<String>, DictionaryError>;
}

/// The built-in demonstration dictionary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleDictionary;

#[async_trait::async_trait]
impl WordSource for SampleDictionary {
    async fn load(&self) -> Result<Vec<String>, DictionaryError> {
        Ok(SAMPLE_WORDS.iter().map(|w| w.to_string()).collect())
    }
}

/// A word list file with one word per line.
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl WordSource for FileDictionary {
    async fn load(&self) -> Result<Vec<String>, DictionaryError> {
        let buf = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DictionaryError::Read {
                path: self.path.clone(),
                source,
            })?;
        let words = parse_words(&String::from_utf8(buf)?);
        info!("Loaded {} words from {}", words.len(), self.path.display());
        Ok(words)
    }
}

/// A word list read to completion from an async reader, such as stdin.
///
/// The reader is consumed by the first `load`; later calls see no words.
#[derive(Debug)]
pub struct ReaderDictionary<R> {
    reader: Mutex<R>,
}

impl<R> ReaderDictionary<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

#[async_trait::async_trait]
impl<R> WordSource for ReaderDictionary<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn load(&self) -> Result<Vec<String>, DictionaryError> {
        let mut buf = Vec::with_capacity(256);
        self.reader.lock().await.read_to_end(&mut buf).await?;
        let words = parse_words(&String::from_utf8(buf)?);
        debug!("Read {} words from stream", words.len());
        Ok(words)
    }
}

/// Splits a word list into words.
///
/// Each line is trimmed. Blank lines and lines starting with `#` are skipped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let text = "# fruit\nApple\n\n  Banana  \r\n#Cherry\nDate";
        assert_eq!(parse_words(text), vec!["Apple", "Banana", "Date"]);
    }

    #[test]
    fn test_parse_words_empty() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n  \n# nothing here\n").is_empty());
    }

    #[tokio::test]
    async fn test_sample_dictionary() {
        let words = SampleDictionary.load().await.unwrap();
        assert_eq!(words.len(), 8);
        assert!(words.iter().any(|w| w == "Trophy"));
    }

    #[tokio::test]
    async fn test_reader_dictionary() {
        let source = ReaderDictionary::new(&b"Trot\nTrap\n"[..]);
        assert_eq!(source.load().await.unwrap(), vec!["Trot", "Trap"]);
        assert!(source.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reader_dictionary_invalid_utf8() {
        let source = ReaderDictionary::new(&[0x66u8, 0xff, 0x0a][..]);
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidUtf8(_)));
    }

    #[tokio::test]
    async fn test_file_dictionary() {
        let path =
            std::env::temp_dir().join(format!("autocomplete-dict-{}.txt", std::process::id()));
        tokio::fs::write(&path, "# words\nTroop\nTrot\n").await.unwrap();

        let words = FileDictionary::new(&path).load().await;
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(words.unwrap(), vec!["Troop", "Trot"]);
    }

    #[tokio::test]
    async fn test_file_dictionary_missing() {
        let path = std::env::temp_dir().join("autocomplete-does-not-exist.txt");
        let err = FileDictionary::new(&path).load().await.unwrap_err();
        match err {
            DictionaryError::Read { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}

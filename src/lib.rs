//! Prefix-tree autocomplete over a dictionary of words.
//!
//! ```
//! use autocomplete::Trie;
//!
//! let trie = Trie::new(["Trophy", "Troop", "Trot", "Trap"]);
//! let words: Vec<_> = trie.autocomplete("Tro").into_iter().collect();
//! assert_eq!(words, ["Troop", "Trophy", "Trot"]);
//! ```

pub mod dictionary;
pub mod error;
pub mod trie;

pub use dictionary::{FileDictionary, ReaderDictionary, SampleDictionary, WordSource};
pub use error::DictionaryError;
pub use trie::{Trie, TrieNode};

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

/// A node in the trie.
///
/// The path of characters from the root to a node spells the prefix the node stands for.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    // The children of this node, keyed by the next character
    children: HashMap<char, TrieNode>,
    // Whether the prefix spelled by this node is itself a dictionary word
    is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a node with no children that does not end a word.
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            is_end_of_word: false,
        }
    }

    /// Inserts `word` below this node, treating the node as the prefix already consumed.
    ///
    /// An empty `word` is ignored.
    pub fn insert(&mut self, word: &str) {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return;
        };

        let child = self.children.entry(first).or_default();
        let rest = chars.as_str();
        if rest.is_empty() {
            child.is_end_of_word = true;
        } else {
            child.insert(rest);
        }
    }

    /// Returns the child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Iterates over the outgoing edges in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A prefix tree built from a dictionary of words, answering autocomplete queries.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Builds a trie holding every word of `dictionary`.
    ///
    /// Order and duplicates in `dictionary` do not affect the result.
    pub fn new<I, S>(dictionary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie {
            root: TrieNode::new(),
        };
        trie.extend(dictionary);
        trie
    }

    /// Inserts a single word. Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        trace!("Inserting {:?}", word);
        self.root.insert(word);
    }

    /// Returns `true` if `word` was inserted as a whole word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_end_of_word)
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns every dictionary word starting with `prefix`, sorted.
    ///
    /// An empty prefix yields the whole dictionary, and a prefix no word starts with
    /// yields an empty set.
    pub fn autocomplete(&self, prefix: &str) -> BTreeSet<String> {
        let mut suggestions = BTreeSet::new();
        let mut node = &self.root;
        let mut curr = String::with_capacity(prefix.len());

        for c in prefix.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => {
                    debug!("No words start with {:?}", prefix);
                    return suggestions;
                }
            }
            curr.push(c);
        }

        Self::suggest(node, &mut suggestions, &mut curr);
        debug!("{} suggestions for {:?}", suggestions.len(), prefix);
        suggestions
    }

    /// Collects every word in the subtree under `node` into `suggestions`.
    ///
    /// `curr` holds the prefix spelled by `node` and is left unchanged on return.
    pub fn suggest(node: &TrieNode, suggestions: &mut BTreeSet<String>, curr: &mut String) {
        if node.is_end_of_word {
            suggestions.insert(curr.clone());
        }
        if node.is_leaf() {
            return;
        }

        for (c, child) in node.children() {
            curr.push(c);
            Self::suggest(child, suggestions, curr);
            curr.pop();
        }
    }

    /// Follows `prefix` from the root, returning the node it ends on.
    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Trie::new(iter)
    }
}

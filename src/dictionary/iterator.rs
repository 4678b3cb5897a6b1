//! Subtree iteration over the phonetic trie.
//!
//! The words stored below a node are exactly the dictionary words whose
//! pronunciation ends with the node's path, so walking a subtree is how a
//! suffix match becomes a rhyme set.
//!
//! ```rust,ignore
//! let node = trie.search(&phones("AO1 G")).unwrap();
//! for word in SubtreeWords::new(node) {
//!     println!("{}", word);
//! }
//! ```

use super::trie::TrieNode;

/// Depth-first iterator over the terminal words of a node and all of its
/// descendants.
///
/// Words are yielded as borrowed `&str` in no particular order. Each word
/// is yielded once, since every word is attached to exactly one node.
pub struct SubtreeWords<'a> {
    /// DFS stack of nodes still to visit.
    stack: Vec<&'a TrieNode>,
    /// Terminal words of the node being drained.
    pending: std::slice::Iter<'a, String>,
}

impl<'a> SubtreeWords<'a> {
    /// Start iterating at `node`.
    pub fn new(node: &'a TrieNode) -> Self {
        // Reversed-phone paths are short; 16 covers most depths without
        // reallocating.
        let mut stack = Vec::with_capacity(16);
        stack.push(node);
        Self {
            stack,
            pending: Default::default(),
        }
    }
}

impl<'a> Iterator for SubtreeWords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.next() {
                return Some(word.as_str());
            }

            let node = self.stack.pop()?;
            self.stack.extend(node.children().map(|(_, child)| child));
            self.pending = node.terminal_words().iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::trie::PhoneticTrie;
    use crate::phonetic::phones;
    use std::collections::HashSet;

    #[test]
    fn test_subtree_includes_node_and_descendants() {
        let trie = PhoneticTrie::from_entries(vec![
            ("DO", phones("D UW1")),
            ("TWO", phones("T UW1")),
            ("DUDE", phones("D UW1 D")),
        ]);
        let node = trie.search(&phones("UW1")).expect("suffix exists");
        let words: HashSet<&str> = SubtreeWords::new(node).collect();
        assert_eq!(words, HashSet::from(["DO", "TWO"]));

        let words: HashSet<&str> = SubtreeWords::new(trie.root()).collect();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_empty_trie_yields_nothing() {
        let trie = PhoneticTrie::default();
        assert_eq!(SubtreeWords::new(trie.root()).count(), 0);
    }
}

//! Reversed-phone trie for suffix (rhyme) queries.
//!
//! Pronunciations are inserted last phone first, so a path from the root
//! spells a word's *ending*. Consuming `reverse(suffix)` from the root
//! reaches the node whose subtree holds every word that ends with `suffix`,
//! whatever precedes it. This turns prefix matching in reversed space into
//! suffix matching in natural word order.

use super::iterator::SubtreeWords;
use crate::phonetic::Phone;
use rustc_hash::FxHashMap;
use std::collections::HashSet;

/// A node of the phonetic trie.
///
/// Each node exclusively owns its children; there is no sharing and no
/// back-reference, since traversal always runs root to leaf.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: FxHashMap<Phone, TrieNode>,
    words: Vec<String>,
}

impl TrieNode {
    /// Child reached by consuming `phone`.
    #[inline]
    pub fn child(&self, phone: &Phone) -> Option<&TrieNode> {
        self.children.get(phone)
    }

    /// Outgoing edges as `(phone, child)` pairs, in arbitrary order.
    pub fn children(&self) -> impl Iterator<Item = (&Phone, &TrieNode)> + '_ {
        self.children.iter()
    }

    /// Number of outgoing edges.
    pub fn edge_count(&self) -> usize {
        self.children.len()
    }

    /// Words whose full pronunciation ends exactly at this node.
    pub fn terminal_words(&self) -> &[String] {
        &self.words
    }

    /// Whether any word ends exactly at this node.
    pub fn is_final(&self) -> bool {
        !self.words.is_empty()
    }

    /// Descend through `phones` in the order given.
    ///
    /// Callers holding a forward-order suffix must pass it reversed.
    pub fn descend<'p, I>(&self, phones: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = &'p Phone>,
    {
        phones
            .into_iter()
            .try_fold(self, |node, phone| node.child(phone))
    }

    /// Terminal words of this node and of every descendant.
    pub fn subtree_words(&self) -> SubtreeWords<'_> {
        SubtreeWords::new(self)
    }
}

/// Immutable suffix index over a pronunciation dictionary.
///
/// Built once with [`from_entries`](Self::from_entries) and read-only
/// afterwards, so any number of threads may query it without locking.
///
/// # Performance
///
/// - **Construction**: O(total phones across the dictionary)
/// - **`contains` / `search`**: O(query length), no allocation
/// - **`words_ending_with`**: O(size of the matching subtree)
#[derive(Debug, Default, Clone)]
pub struct PhoneticTrie {
    root: TrieNode,
    word_count: usize,
    node_count: usize,
}

impl PhoneticTrie {
    /// Build a trie from `(word, phones)` pairs.
    ///
    /// Phones are given in natural order; the trie stores them reversed.
    /// Words with an empty pronunciation are skipped, since they would match
    /// every suffix query.
    pub fn from_entries<I, W, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, P)>,
        W: Into<String>,
        P: AsRef<[Phone]>,
    {
        let mut trie = PhoneticTrie {
            root: TrieNode::default(),
            word_count: 0,
            node_count: 1,
        };
        for (word, phones) in entries {
            trie.insert(word.into(), phones.as_ref());
        }
        trie
    }

    fn insert(&mut self, word: String, phones: &[Phone]) {
        if phones.is_empty() {
            return;
        }

        let mut created = 0;
        let mut node = &mut self.root;
        for phone in phones.iter().rev() {
            node = node.children.entry(phone.clone()).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
        }
        node.words.push(word);
        self.node_count += created;
        self.word_count += 1;
    }

    /// The root node. Its subtree holds every word.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Whether some dictionary word ends with `phones`.
    ///
    /// This is the pruning oracle used during candidate generation; it
    /// walks the trie and allocates nothing.
    #[inline]
    pub fn contains(&self, phones: &[Phone]) -> bool {
        self.search(phones).is_some()
    }

    /// Node reached by consuming `reverse(phones)`, if that path exists.
    pub fn search(&self, phones: &[Phone]) -> Option<&TrieNode> {
        self.root.descend(phones.iter().rev())
    }

    /// Every word attached to `node` or one of its descendants.
    pub fn words_ending_with(&self, node: &TrieNode) -> HashSet<String> {
        node.subtree_words().map(str::to_owned).collect()
    }

    /// Number of words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Reconstruct every `(word, phones)` pair, phones in natural order.
    pub fn entries(&self) -> Vec<(String, Vec<Phone>)> {
        let mut entries = Vec::with_capacity(self.word_count);
        let mut path = Vec::with_capacity(16);

        fn dfs(node: &TrieNode, path: &mut Vec<Phone>, out: &mut Vec<(String, Vec<Phone>)>) {
            for word in &node.words {
                out.push((word.clone(), path.iter().rev().cloned().collect()));
            }
            for (phone, child) in &node.children {
                path.push(phone.clone());
                dfs(child, path, out);
                path.pop();
            }
        }

        dfs(&self.root, &mut path, &mut entries);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::phones;

    fn trie() -> PhoneticTrie {
        PhoneticTrie::from_entries(vec![
            ("DOG", phones("D AO1 G")),
            ("LOG", phones("L AO1 G")),
            ("FOG", phones("F AO1 G")),
            ("BIG", phones("B IH1 G")),
            ("DO", phones("D UW1")),
        ])
    }

    #[test]
    fn test_trie_counts() {
        let trie = trie();
        assert_eq!(trie.word_count(), 5);
        // root + G, AO1, D, L, F, IH1, B, UW1, D
        assert_eq!(trie.node_count(), 10);
        assert!(!trie.is_empty());
    }

    #[test]
    fn test_contains_matches_suffixes_only() {
        let trie = trie();
        assert!(trie.contains(&phones("G")));
        assert!(trie.contains(&phones("AO1 G")));
        assert!(trie.contains(&phones("D AO1 G")));
        assert!(trie.contains(&phones("UW1")));
        // A prefix of a word is not a suffix of any word
        assert!(!trie.contains(&phones("D AO1")));
        assert!(!trie.contains(&phones("K AO1 G")));
    }

    #[test]
    fn test_search_and_closure() {
        let trie = trie();
        let node = trie.search(&phones("AO1 G")).expect("suffix exists");
        assert!(!node.is_final());
        let words = trie.words_ending_with(node);
        assert_eq!(
            words,
            HashSet::from(["DOG".to_string(), "LOG".to_string(), "FOG".to_string()])
        );

        let node = trie.search(&phones("G")).expect("suffix exists");
        assert_eq!(trie.words_ending_with(node).len(), 4);

        assert!(trie.search(&phones("Z")).is_none());
    }

    #[test]
    fn test_full_pronunciation_reaches_terminal() {
        let trie = trie();
        let node = trie.search(&phones("D AO1 G")).expect("word exists");
        assert!(node.is_final());
        assert_eq!(node.terminal_words(), ["DOG".to_string()]);
    }

    #[test]
    fn test_homophones_share_a_node() {
        let trie = PhoneticTrie::from_entries(vec![
            ("READ", phones("R EH1 D")),
            ("RED", phones("R EH1 D")),
        ]);
        let node = trie.search(&phones("R EH1 D")).expect("word exists");
        assert_eq!(node.terminal_words().len(), 2);
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn test_empty_pronunciation_skipped() {
        let trie = PhoneticTrie::from_entries(vec![("NOTHING", Vec::<Phone>::new())]);
        assert!(trie.is_empty());
        assert!(!trie.root().is_final());
    }

    #[test]
    fn test_entries_round_trip() {
        let trie = trie();
        let mut entries = trie.entries();
        entries.sort();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], ("BIG".to_string(), phones("B IH1 G")));

        let rebuilt = PhoneticTrie::from_entries(entries);
        assert_eq!(rebuilt.word_count(), trie.word_count());
        assert_eq!(rebuilt.node_count(), trie.node_count());
    }

    #[test]
    fn test_descend_steps_through_given_order() {
        let trie = trie();
        let g = trie.root().child(&Phone::new("G")).expect("edge G");
        let via_descend = trie.root().descend([&Phone::new("G"), &Phone::new("AO1")]);
        assert!(via_descend.is_some());
        assert_eq!(g.edge_count(), 2);
    }
}

//! Prefix tree over the dictionary.
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`],
//! so the tree can be walked from any node without borrowing its parent.

use std::collections::HashMap;

/// Handle to a node inside a [`Trie`].
///
/// A handle is only meaningful for the trie that issued it. Lookups with a
/// handle from another trie never panic, but their answers are meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    end_of_word: bool,
}

/// A prefix tree built once from a word list and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the root (the empty prefix).
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Insert a word, reusing any prefix already present.
    /// The empty word marks the root itself.
    pub fn insert(&mut self, word: &str) {
        let mut node = self.root();
        for c in word.chars() {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.0].children.insert(c, next);
                    next
                }
            };
        }
        let end = &mut self.nodes[node.0].end_of_word;
        if !*end {
            *end = true;
            self.words += 1;
        }
    }

    /// Exact-word lookup. A missing edge is a plain `false`.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .map(|node| self.is_end_of_word(node))
            .unwrap_or(false)
    }

    /// Whether any inserted word starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes.get(node.0)?.children.get(&c).copied()
    }

    pub fn is_end_of_word(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.end_of_word)
    }

    pub fn has_children(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| !n.children.is_empty())
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn walk(&self, path: &str) -> Option<NodeId> {
        path.chars()
            .try_fold(self.root(), |node, c| self.child(node, c))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

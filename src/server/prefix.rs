//! Indentation prefix stack
//!
//! The prefix is plain text concatenation: each push appends a fragment and
//! records its length, each pop removes the most recently pushed fragment.
//! Callers balance pushes and pops themselves.

use tracing::trace;

/// Accumulated indentation text plus the lengths of the fragments it was built from.
///
/// Invariant: the stacked lengths always sum to `text.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixStack {
    text: String,
    lengths: Vec<usize>,
}

impl PrefixStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current indentation text.
    pub fn current(&self) -> &str {
        &self.text
    }

    /// Number of fragments currently pushed.
    pub fn depth(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Replace the whole prefix with a single fragment.
    pub fn set(&mut self, fragment: &str) {
        self.text.clear();
        self.lengths.clear();
        self.push(fragment);
    }

    /// Push one tab.
    pub fn push_tab(&mut self) {
        self.push("\t");
    }

    /// Push `fragment` verbatim.
    pub fn push(&mut self, fragment: &str) {
        self.text.push_str(fragment);
        self.lengths.push(fragment.len());
        trace!(depth = self.lengths.len(), len = self.text.len(), "prefix push");
    }

    /// Drop the most recent fragment. Does nothing when the stack is empty.
    pub fn pop(&mut self) {
        let Some(len) = self.lengths.pop() else {
            return;
        };
        // Fragments were appended whole, so this is always a char boundary.
        let end = self.text.len() - len;
        self.text.truncate(end);
        trace!(depth = self.lengths.len(), len = self.text.len(), "prefix pop");
    }

    /// Clear every fragment.
    pub fn clear(&mut self) {
        self.text.clear();
        self.lengths.clear();
    }
}

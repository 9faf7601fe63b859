use std::ops::Index;
use std::str::FromStr;

use crate::{Result, SuffixError, Symbol};

/// A text followed by a terminator symbol that occurs nowhere else in it.
///
/// The terminator guarantees that no suffix is a prefix of another, so every
/// suffix ends at its own leaf in a suffix tree or trie.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TerminatedText<S: Symbol> {
    /// Text symbols with the terminator as the last element.
    symbols: Vec<S>,
}

impl<S: Symbol> TerminatedText<S> {
    /// Terminates `text` with [`Symbol::DEFAULT_TERMINATOR`].
    ///
    /// # Errors
    ///
    /// Returns [`SuffixError::TerminatorInText`] if the text already contains
    /// the terminator.
    pub fn new(text: impl IntoIterator<Item = S>) -> Result<Self> {
        Self::with_terminator(text, S::DEFAULT_TERMINATOR)
    }

    /// Terminates `text` with `terminator`.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixError::TerminatorInText`] if the text already contains
    /// `terminator`.
    pub fn with_terminator(text: impl IntoIterator<Item = S>, terminator: S) -> Result<Self> {
        let mut symbols: Vec<S> = text.into_iter().collect();
        if let Some(position) = symbols.iter().position(|&s| s == terminator) {
            return Err(SuffixError::TerminatorInText { position });
        }
        symbols.push(terminator);
        Ok(Self { symbols })
    }

    /// The terminator symbol.
    #[inline]
    pub fn terminator(&self) -> S {
        // Never empty: construction always pushes the terminator.
        self.symbols[self.symbols.len() - 1]
    }

    /// Number of symbols, terminator included.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a terminated text holds at least the terminator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All symbols, terminator included.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }

    /// Symbols of the text without the terminator.
    #[inline]
    pub fn text(&self) -> &[S] {
        &self.symbols[..self.symbols.len() - 1]
    }

    /// The `len` symbols starting at `start`.
    ///
    /// # Panics
    ///
    /// If the span runs past the terminator.
    #[inline]
    pub fn span(&self, start: usize, len: usize) -> &[S] {
        &self.symbols[start..start + len]
    }

    /// The suffix starting at `start`, terminator included.
    #[inline]
    pub fn suffix(&self, start: usize) -> &[S] {
        &self.symbols[start..]
    }
}

impl FromStr for TerminatedText<char> {
    type Err = SuffixError;

    /// Terminates a string with the default `'$'` terminator.
    fn from_str(text: &str) -> Result<Self> {
        Self::new(text.chars())
    }
}

impl<S: Symbol> Index<usize> for TerminatedText<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.symbols[index]
    }
}

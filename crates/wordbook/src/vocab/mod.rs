//! # Word Vocabulary
//!
//! [`WordVocab`] owns the forward (`word -> id`) and inverse (`id -> word`)
//! mappings. Ids are assigned by position in the lexicographically sorted
//! unique-word sequence, so two builds from the same corpus always produce
//! the same mapping, independent of platform or hash seed.
//!
//! A vocabulary is immutable once built or loaded; there is no incremental
//! mutation. Rebuilding means constructing a new value.

pub mod io;

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::errors::{WbResult, WordbookError};
use crate::segmentation::WhitespaceSegmenter;
use crate::types::{TokenType, WbHashMap};

/// Sorted word vocabulary with forward and inverse token mappings.
///
/// Invariants, upheld by every constructor:
/// * ids are contiguous in `[0, len)`,
/// * `forward` and `inverse` are mutual inverses over that range,
/// * the word at id `i` is the `i`-th word in ascending byte order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordVocab<T: TokenType> {
    /// Forward mapping: word to token id.
    forward: WbHashMap<String, T>,

    /// Inverse mapping: token id (as index) to word.
    inverse: Vec<String>,
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary from raw corpus text.
    ///
    /// Lowercases, splits on whitespace runs, dedupes, sorts, and assigns
    /// each word its index in the sorted sequence. Empty or all-whitespace
    /// input yields an empty vocabulary, not an error.
    ///
    /// ## Arguments
    /// * `text` - The corpus text.
    ///
    /// ## Returns
    /// The new vocabulary, or [`WordbookError::VocabCapacity`] when the
    /// unique word count exceeds what `T` can index.
    pub fn build<S: AsRef<str>>(text: S) -> WbResult<Self> {
        // BTreeSet dedupes and sorts in one pass.
        let words: BTreeSet<String> = WhitespaceSegmenter.split(text).into_iter().collect();

        let size = words.len();
        let mut forward = WbHashMap::with_capacity(size);
        let mut inverse = Vec::with_capacity(size);

        for (index, word) in words.into_iter().enumerate() {
            let token =
                T::from_index(index).ok_or(WordbookError::VocabCapacity { size })?;
            forward.insert(word.clone(), token);
            inverse.push(word);
        }

        Ok(Self { forward, inverse })
    }

    /// Assemble a vocabulary from already-verified mappings.
    ///
    /// Callers must have established the invariants; snapshot loading does
    /// so before calling this.
    pub(crate) fn from_parts(
        forward: WbHashMap<String, T>,
        inverse: Vec<String>,
    ) -> Self {
        Self { forward, inverse }
    }

    /// The number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.inverse.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.inverse.is_empty()
    }

    /// Look up the token id for a word.
    ///
    /// ## Returns
    /// `None` when the word is not in the vocabulary.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.forward.get(word).copied()
    }

    /// Look up the word for a token id.
    ///
    /// ## Returns
    /// `None` when the id is outside `[0, len)`.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        token
            .to_index()
            .and_then(|index| self.inverse.get(index))
            .map(String::as_str)
    }

    /// Iterate the words in ascending id order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.inverse.iter().map(String::as_str)
    }
}

/// Where a vocabulary comes from.
///
/// A vocabulary is either built fresh from corpus text or restored from a
/// snapshot; the enum makes a "neither" state unrepresentable, so no
/// half-built vocabulary can ever be observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VocabSource {
    /// Build a fresh vocabulary from corpus text.
    Corpus(String),

    /// Load a previously saved snapshot.
    Snapshot(PathBuf),
}

impl VocabSource {
    /// Open the vocabulary this source describes.
    ///
    /// ## Returns
    /// The built or loaded vocabulary; load failures surface as
    /// [`WordbookError::NotFound`] or [`WordbookError::Corrupt`].
    pub fn open<T: TokenType>(self) -> WbResult<WordVocab<T>> {
        match self {
            VocabSource::Corpus(text) => WordVocab::build(text),
            VocabSource::Snapshot(path) => io::load_vocab_path(path),
        }
    }
}

//! # Text Segmentation
//!
//! This module exists to factor out word splitting.
//!
//! The split policy is deliberately simple: lowercase fold, then split on
//! runs of whitespace. Punctuation stays attached to its neighboring word
//! (`"high."` is one word). There is no sub-word segmentation.

mod whitespace_segmenter;

#[doc(inline)]
pub use whitespace_segmenter::*;

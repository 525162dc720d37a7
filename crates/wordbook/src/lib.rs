//! # Wordbook
//!
//! A whitespace word-level tokenizer vocabulary library.
//!
//! Wordbook builds a deterministic word vocabulary from a text corpus,
//! encodes text into integer token ids and back, and persists the
//! vocabulary as a versioned snapshot for reuse.
//!
//! ## Building and Using a Vocab
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordbook::{TokenDecoder, TokenEncoder, VocabDecoder, VocabEncoder, WordVocab};
//!
//! fn example() -> wordbook::WbResult<()> {
//!     let vocab: Arc<WordVocab<u32>> = WordVocab::build("The bird flew high.")?.into();
//!
//!     let encoder = VocabEncoder::init(vocab.clone());
//!     let decoder = VocabDecoder::init(vocab.clone());
//!
//!     let tokens = encoder.try_encode("The bird flew high.").unwrap();
//!     assert_eq!(decoder.try_decode(&tokens).unwrap(), "the bird flew high.");
//!
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod corpus;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::{TokenDecoder, VocabDecoder};
#[doc(inline)]
pub use encoders::{TokenEncoder, VocabEncoder};
#[doc(inline)]
pub use errors::{WbResult, WordbookError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{VocabSource, WordVocab};

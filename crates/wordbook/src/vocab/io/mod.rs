//! # Vocabulary IO
//!
//! Versioned snapshot format for [`WordVocab`](crate::vocab::WordVocab):
//! line-oriented UTF-8, words base64-encoded so arbitrary word bytes stay
//! newline- and space-safe.
//!
//! ```text
//! wordbook/v1
//! stoi <n>
//! <base64(word)> <id>     (n lines)
//! itos <n>
//! <id> <base64(word)>     (n lines)
//! ```
//!
//! Both mappings are persisted; loading verifies that they are mutual
//! inverses over contiguous ids `[0, n)` and rejects the snapshot as
//! corrupt otherwise.
//!
//! ## Saving and Loading
//!
//! ```rust,no_run
//! use wordbook::WordVocab;
//! use wordbook::vocab::io::{load_vocab_path, save_vocab_path};
//!
//! fn example() -> wordbook::WbResult<()> {
//!     let vocab: WordVocab<u32> = WordVocab::build("The bird flew high.")?;
//!     save_vocab_path(&vocab, "vocab.wb")?;
//!
//!     let reloaded: WordVocab<u32> = load_vocab_path("vocab.wb")?;
//!     assert_eq!(vocab, reloaded);
//!     Ok(())
//! }
//! ```

mod snapshot;

#[doc(inline)]
pub use snapshot::*;

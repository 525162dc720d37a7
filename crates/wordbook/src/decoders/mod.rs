//! # Token Decoders

mod token_decoder;
mod vocab_decoder;

#[doc(inline)]
pub use token_decoder::*;
#[doc(inline)]
pub use vocab_decoder::*;

//! # Token Encoders

mod token_encoder;
mod vocab_encoder;

#[doc(inline)]
pub use token_encoder::*;
#[doc(inline)]
pub use vocab_encoder::*;

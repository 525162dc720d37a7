//! # Token Decoder Trait

use crate::types::TokenType;

/// Trait for decoding token ids back into text.
///
/// Smart pointer types that implement `Deref<Target: TokenDecoder<T>>`
/// (such as `Arc<T>` and `Box<T>`) automatically implement `TokenDecoder`
/// through a blanket implementation.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode token ids into a space-joined string.
    ///
    /// ## Arguments
    /// * `tokens` - The token ids to decode, in order.
    ///
    /// ## Returns
    /// The decoded text. Every id must resolve; unknown ids are an error,
    /// never skipped.
    fn try_decode(
        &self,
        tokens: &[T],
    ) -> anyhow::Result<String>;
}

// Blanket implementation for any type that derefs to a TokenDecoder.
impl<T, D> TokenDecoder<T> for D
where
    T: TokenType,
    D: core::ops::Deref + Send + Sync,
    D::Target: TokenDecoder<T>,
{
    fn try_decode(
        &self,
        tokens: &[T],
    ) -> anyhow::Result<String> {
        self.deref().try_decode(tokens)
    }
}

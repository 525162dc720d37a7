//! # Token Encoder Trait

use crate::types::TokenType;

/// Trait for encoding text into token ids.
///
/// Smart pointer types that implement `Deref<Target: TokenEncoder<T>>`
/// (such as `Arc<T>` and `Box<T>`) automatically implement `TokenEncoder`
/// through a blanket implementation.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode text, appending token ids to `tokens`.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> anyhow::Result<()>;

    /// Encode text into a fresh token buffer.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The encoded token ids.
    fn try_encode(
        &self,
        text: &str,
    ) -> anyhow::Result<Vec<T>> {
        let mut tokens = Vec::new();
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }
}

// Blanket implementation for any type that derefs to a TokenEncoder.
impl<T, D> TokenEncoder<T> for D
where
    T: TokenType,
    D: core::ops::Deref + Send + Sync,
    D::Target: TokenEncoder<T>,
{
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> anyhow::Result<()> {
        self.deref().try_encode_append(text, tokens)
    }
}

//! # Vocabulary Decoder

use std::sync::Arc;

use crate::decoders::TokenDecoder;
use crate::errors::WordbookError;
use crate::types::TokenType;
use crate::vocab::WordVocab;

/// Dictionary decoder over a [`WordVocab`].
///
/// Decoding reconstructs only the lowercase word stream: words are joined
/// with single spaces, so original punctuation spacing and case are not
/// recovered.
#[derive(Clone, Debug)]
pub struct VocabDecoder<T: TokenType> {
    /// Shared vocabulary.
    pub vocab: Arc<WordVocab<T>>,
}

impl<T: TokenType> VocabDecoder<T> {
    /// Initialize a decoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to decode against.
    ///
    /// ## Returns
    /// A new `VocabDecoder` instance.
    pub fn init<V: Into<Arc<WordVocab<T>>>>(vocab: V) -> Self {
        Self {
            vocab: vocab.into(),
        }
    }
}

impl<T: TokenType> TokenDecoder<T> for VocabDecoder<T> {
    fn try_decode(
        &self,
        tokens: &[T],
    ) -> anyhow::Result<String> {
        let mut words = Vec::with_capacity(tokens.len());
        for &token in tokens {
            let word =
                self.vocab
                    .lookup_word(token)
                    .ok_or_else(|| WordbookError::UnknownId {
                        id: token.to_string(),
                    })?;
            words.push(word);
        }

        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_decoder<T: TokenType>() -> VocabDecoder<T> {
        VocabDecoder::init(WordVocab::build("The bird flew high.").unwrap())
    }

    fn tokens<T: TokenType>(indices: &[usize]) -> Vec<T> {
        indices
            .iter()
            .map(|&index| T::from_index(index).unwrap())
            .collect()
    }

    fn test_decode<T: TokenType>() {
        let decoder = sample_decoder::<T>();

        assert_eq!(
            decoder.try_decode(&tokens::<T>(&[3, 0, 1, 2])).unwrap(),
            "the bird flew high.",
        );
    }

    #[test]
    fn test_decode_u16() {
        test_decode::<u16>();
    }

    #[test]
    fn test_decode_u32() {
        test_decode::<u32>();
    }

    #[test]
    fn test_decode_unknown_id() {
        let decoder = sample_decoder::<u32>();

        let err = decoder.try_decode(&[999]).unwrap_err();
        let err = err.downcast_ref::<WordbookError>().unwrap();
        assert!(matches!(err, WordbookError::UnknownId { .. }));
    }

    #[test]
    fn test_decode_empty() {
        let decoder = sample_decoder::<u32>();

        assert_eq!(decoder.try_decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_decode_repeated_ids() {
        let decoder = sample_decoder::<u32>();

        assert_eq!(
            decoder.try_decode(&tokens::<u32>(&[0, 0, 3])).unwrap(),
            "bird bird the",
        );
    }
}

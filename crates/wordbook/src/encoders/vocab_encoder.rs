//! # Vocabulary Encoder

use std::sync::Arc;

use crate::encoders::TokenEncoder;
use crate::segmentation::WhitespaceSegmenter;
use crate::types::TokenType;
use crate::vocab::WordVocab;

/// Dictionary encoder over a [`WordVocab`].
///
/// Words absent from the vocabulary are silently dropped, so the output may
/// be shorter than the input word count. This lossy policy is deliberate
/// and asymmetric with decoding, which fails on unknown ids.
#[derive(Clone, Debug)]
pub struct VocabEncoder<T: TokenType> {
    /// Shared vocabulary.
    pub vocab: Arc<WordVocab<T>>,

    /// Word splitter.
    pub segmenter: WhitespaceSegmenter,
}

impl<T: TokenType> VocabEncoder<T> {
    /// Initialize an encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to encode against.
    ///
    /// ## Returns
    /// A new `VocabEncoder` instance.
    pub fn init<V: Into<Arc<WordVocab<T>>>>(vocab: V) -> Self {
        Self {
            vocab: vocab.into(),
            segmenter: WhitespaceSegmenter,
        }
    }
}

impl<T: TokenType> TokenEncoder<T> for VocabEncoder<T> {
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> anyhow::Result<()> {
        tokens.extend(
            self.segmenter
                .split(text)
                .iter()
                .filter_map(|word| self.vocab.lookup_token(word)),
        );

        Ok(())
    }
}

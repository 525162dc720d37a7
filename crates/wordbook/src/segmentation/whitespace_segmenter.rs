//! # Whitespace Segmenter

/// Lowercasing whitespace-run splitter.
///
/// Both vocabulary construction and encoding route text through this one
/// splitter, so the two can never disagree on word boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WhitespaceSegmenter;

impl WhitespaceSegmenter {
    /// Split text into lowercased words.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// The words, in source order. Empty or all-whitespace input yields an
    /// empty vector.
    pub fn split<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<String> {
        text.as_ref()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// Rewrite text by splitting and re-joining with single spaces.
    ///
    /// This is the surface form a decode of the full encoded word stream
    /// reproduces: lowercased, whitespace-normalized.
    pub fn rewrite<S: AsRef<str>>(
        &self,
        text: S,
    ) -> String {
        self.split(text).join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let segmenter = WhitespaceSegmenter;

        assert_eq!(
            segmenter.split("The bird\tflew\n  high."),
            vec!["the", "bird", "flew", "high."],
        );

        assert!(segmenter.split("").is_empty());
        assert!(segmenter.split(" \t\n ").is_empty());
    }

    #[test]
    fn test_rewrite() {
        let segmenter = WhitespaceSegmenter;

        assert_eq!(
            segmenter.rewrite("  The bird\t flew high. "),
            "the bird flew high.",
        );
        assert_eq!(segmenter.rewrite(""), "");
    }
}

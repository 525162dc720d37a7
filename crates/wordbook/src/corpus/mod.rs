//! # Corpus Ingestion
//!
//! Filesystem collaborator that supplies the raw text blob the vocabulary
//! is built from. The core never reads the filesystem itself; it only sees
//! the merged text.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::errors::{WbResult, WordbookError};

/// Sample text used when the corpus directory is missing.
pub const FALLBACK_SAMPLE: &str =
    "Once upon a time there was a small bird. It liked to fly high in the sky.";

/// Read and merge every `.txt` file in a directory (non-recursive).
///
/// File contents are joined with single spaces, in directory-listing order.
/// The listing order is platform-dependent, which is fine: the vocabulary
/// built from the merged text depends only on the set of words present.
///
/// ## Arguments
/// * `dir` - The corpus directory.
///
/// ## Returns
/// The merged text; [`FALLBACK_SAMPLE`] when `dir` does not exist.
pub fn load_corpus_dir<P: AsRef<Path>>(dir: P) -> WbResult<String> {
    let dir = dir.as_ref();

    if dir.as_os_str().is_empty() {
        return Err(WordbookError::Config {
            reason: "corpus directory path is empty".to_string(),
        });
    }

    if !dir.is_dir() {
        warn!(
            "corpus directory {} is missing, using the fallback sample",
            dir.display()
        );
        return Ok(FALLBACK_SAMPLE.to_string());
    }

    let mut merged = String::new();
    let mut file_count = 0usize;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }

        let text = fs::read_to_string(&path)?;
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(&text);
        file_count += 1;
    }

    info!("merged {file_count} corpus files from {}", dir.display());
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use tempdir::TempDir;

    use super::*;
    use crate::vocab::WordVocab;

    fn write_file(
        dir: &TempDir,
        name: &str,
        content: &str,
    ) {
        let mut file = File::create(dir.path().join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_missing_dir_falls_back() {
        let dir = TempDir::new("wordbook").unwrap();
        let missing = dir.path().join("no_such_corpus");

        assert_eq!(load_corpus_dir(&missing).unwrap(), FALLBACK_SAMPLE);
    }

    #[test]
    fn test_empty_dir_path() {
        let err = load_corpus_dir("").unwrap_err();
        assert!(matches!(err, WordbookError::Config { .. }));
    }

    #[test]
    fn test_merges_txt_files_only() {
        let dir = TempDir::new("wordbook").unwrap();
        write_file(&dir, "a.txt", "the bird");
        write_file(&dir, "b.txt", "flew high.");
        write_file(&dir, "notes.md", "ignored entirely");

        let merged = load_corpus_dir(dir.path()).unwrap();

        // Listing order is unspecified; the word set is not.
        let vocab = WordVocab::<u32>::build(&merged).unwrap();
        assert_eq!(
            vocab.words().collect::<Vec<_>>(),
            vec!["bird", "flew", "high.", "the"],
        );
    }

    #[test]
    fn test_empty_dir_yields_empty_text() {
        let dir = TempDir::new("wordbook").unwrap();

        assert_eq!(load_corpus_dir(dir.path()).unwrap(), "");
    }
}

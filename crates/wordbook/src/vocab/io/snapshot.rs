//! # Vocabulary Snapshots

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::errors::{WbResult, WordbookError};
use crate::types::{TokenType, WbHashMap};
use crate::vocab::WordVocab;

/// Magic first line of every snapshot.
pub const SNAPSHOT_MAGIC: &str = "wordbook/v1";

fn corrupt<S: Into<String>>(reason: S) -> WordbookError {
    WordbookError::Corrupt {
        reason: reason.into(),
    }
}

/// Save a vocabulary snapshot to a path.
///
/// The snapshot is written to a temporary sibling file and renamed into
/// place, so a crash mid-write leaves any previous snapshot intact.
///
/// ## Arguments
/// * `vocab` - The vocabulary to persist.
/// * `path` - The destination path; existing content is replaced.
pub fn save_vocab_path<T, P>(
    vocab: &WordVocab<T>,
    path: P,
) -> WbResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        write_vocab(vocab, &mut writer)?;
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;

    log::info!("vocab saved to {}", path.display());
    Ok(())
}

/// Load a vocabulary snapshot from a path.
///
/// ## Returns
/// The restored vocabulary, or:
/// * [`WordbookError::NotFound`] when `path` does not exist,
/// * [`WordbookError::Corrupt`] when the snapshot cannot be parsed or its
///   mappings are not mutual inverses.
pub fn load_vocab_path<T, P>(path: P) -> WbResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(WordbookError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let vocab = read_vocab(BufReader::new(File::open(path)?))?;

    log::info!("vocab loaded from {}", path.display());
    Ok(vocab)
}

/// Write a vocabulary snapshot to a writer.
pub fn write_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> WbResult<()>
where
    T: TokenType,
    W: Write,
{
    writeln!(writer, "{SNAPSHOT_MAGIC}")?;

    writeln!(writer, "stoi {}", vocab.len())?;
    for (index, word) in vocab.words().enumerate() {
        writeln!(writer, "{} {index}", STANDARD.encode(word.as_bytes()))?;
    }

    writeln!(writer, "itos {}", vocab.len())?;
    for (index, word) in vocab.words().enumerate() {
        writeln!(writer, "{index} {}", STANDARD.encode(word.as_bytes()))?;
    }

    Ok(())
}

/// Read a vocabulary snapshot from a reader.
///
/// Parses both sections, then verifies the invariants before assembling
/// the vocabulary: ids contiguous in `[0, n)`, and `stoi`/`itos` mutual
/// inverses. Every violation is a [`WordbookError::Corrupt`].
pub fn read_vocab<T, R>(reader: R) -> WbResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut lines = reader.lines();

    let magic = next_line(&mut lines)?;
    if magic != SNAPSHOT_MAGIC {
        return Err(corrupt(format!("bad magic line: {magic:?}")));
    }

    let count = section_header(&mut lines, "stoi")?;
    let mut stoi: WbHashMap<String, usize> = WbHashMap::with_capacity(count);
    for _ in 0..count {
        let line = next_line(&mut lines)?;
        let (word, id) = parse_stoi_entry(&line)?;
        if stoi.insert(word, id).is_some() {
            return Err(corrupt(format!("duplicate word in stoi entry: {line:?}")));
        }
    }

    let itos_count = section_header(&mut lines, "itos")?;
    if itos_count != count {
        return Err(corrupt(format!(
            "stoi and itos disagree on size: {count} vs {itos_count}"
        )));
    }
    let mut itos: WbHashMap<usize, String> = WbHashMap::with_capacity(count);
    for _ in 0..count {
        let line = next_line(&mut lines)?;
        let (id, word) = parse_itos_entry(&line)?;
        if itos.insert(id, word).is_some() {
            return Err(corrupt(format!("duplicate id in itos entry: {line:?}")));
        }
    }

    if lines.next().transpose()?.is_some() {
        return Err(corrupt("trailing data after itos section"));
    }

    let mut forward = WbHashMap::with_capacity(count);
    let mut inverse = Vec::with_capacity(count);
    for index in 0..count {
        let word = itos
            .remove(&index)
            .ok_or_else(|| corrupt(format!("itos is missing id {index}")))?;
        if stoi.get(&word) != Some(&index) {
            return Err(corrupt(format!("stoi and itos disagree on {word:?}")));
        }

        let token = T::from_index(index)
            .ok_or(WordbookError::VocabCapacity { size: count })?;
        forward.insert(word.clone(), token);
        inverse.push(word);
    }

    Ok(WordVocab::from_parts(forward, inverse))
}

fn next_line<B: BufRead>(lines: &mut Lines<B>) -> WbResult<String> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(corrupt("truncated snapshot")),
    }
}

fn section_header<B: BufRead>(
    lines: &mut Lines<B>,
    name: &str,
) -> WbResult<usize> {
    let line = next_line(lines)?;
    let mut fields = line.split_whitespace();

    match (fields.next(), fields.next(), fields.next()) {
        (Some(section), Some(count), None) if section == name => count
            .parse()
            .map_err(|_| corrupt(format!("bad {name} section count: {count:?}"))),
        _ => Err(corrupt(format!(
            "expected {name} section header, got: {line:?}"
        ))),
    }
}

fn parse_stoi_entry(line: &str) -> WbResult<(String, usize)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(b64), Some(id), None) => Ok((decode_word(b64)?, parse_id(id)?)),
        _ => Err(corrupt(format!("malformed stoi entry: {line:?}"))),
    }
}

fn parse_itos_entry(line: &str) -> WbResult<(usize, String)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(id), Some(b64), None) => Ok((parse_id(id)?, decode_word(b64)?)),
        _ => Err(corrupt(format!("malformed itos entry: {line:?}"))),
    }
}

fn decode_word(b64: &str) -> WbResult<String> {
    let bytes = STANDARD
        .decode(b64)
        .map_err(|err| corrupt(format!("bad base64 word: {err}")))?;
    String::from_utf8(bytes).map_err(|_| corrupt("word is not valid UTF-8"))
}

fn parse_id(field: &str) -> WbResult<usize> {
    field
        .parse()
        .map_err(|_| corrupt(format!("bad id field: {field:?}")))
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    fn b64(word: &str) -> String {
        STANDARD.encode(word.as_bytes())
    }

    fn test_snapshot_roundtrip<T: TokenType>() {
        let dir = TempDir::new("wordbook").unwrap();
        let path = dir.path().join("vocab.wb");

        let vocab =
            WordVocab::<T>::build("Once upon a time there was a small bird.").unwrap();
        save_vocab_path(&vocab, &path).unwrap();

        let loaded: WordVocab<T> = load_vocab_path(&path).unwrap();
        assert_eq!(vocab, loaded);
    }

    #[test]
    fn test_snapshot_roundtrip_u16() {
        test_snapshot_roundtrip::<u16>();
    }

    #[test]
    fn test_snapshot_roundtrip_u32() {
        test_snapshot_roundtrip::<u32>();
    }

    #[test]
    fn test_empty_snapshot_roundtrip() {
        let mut buf = Vec::new();
        let vocab = WordVocab::<u32>::build("").unwrap();

        write_vocab(&vocab, &mut buf).unwrap();
        let loaded: WordVocab<u32> = read_vocab(buf.as_slice()).unwrap();

        assert_eq!(vocab, loaded);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new("wordbook").unwrap();
        let path = dir.path().join("vocab.wb");

        let old = WordVocab::<u32>::build("stale words here").unwrap();
        save_vocab_path(&old, &path).unwrap();

        let new = WordVocab::<u32>::build("The bird flew high.").unwrap();
        save_vocab_path(&new, &path).unwrap();

        let loaded: WordVocab<u32> = load_vocab_path(&path).unwrap();
        assert_eq!(new, loaded);
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new("wordbook").unwrap();
        let path = dir.path().join("nope.wb");

        let err = load_vocab_path::<u32, _>(&path).unwrap_err();
        assert!(matches!(err, WordbookError::NotFound { .. }));
    }

    #[test]
    fn test_load_garbage() {
        let err = read_vocab::<u32, _>("not a snapshot\n".as_bytes()).unwrap_err();
        assert!(matches!(err, WordbookError::Corrupt { .. }));
    }

    #[test]
    fn test_load_truncated() {
        let text = format!("{SNAPSHOT_MAGIC}\nstoi 2\n{} 0\n", b64("bird"));
        let err = read_vocab::<u32, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, WordbookError::Corrupt { .. }));
    }

    #[test]
    fn test_load_disagreeing_mappings() {
        // stoi says bird=0/the=1; itos swaps them.
        let text = format!(
            "{SNAPSHOT_MAGIC}\nstoi 2\n{bird} 0\n{the} 1\nitos 2\n0 {the}\n1 {bird}\n",
            bird = b64("bird"),
            the = b64("the"),
        );

        let err = read_vocab::<u32, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, WordbookError::Corrupt { .. }));
    }

    #[test]
    fn test_load_gap_in_ids() {
        let text = format!(
            "{SNAPSHOT_MAGIC}\nstoi 2\n{bird} 0\n{the} 2\nitos 2\n0 {bird}\n2 {the}\n",
            bird = b64("bird"),
            the = b64("the"),
        );

        let err = read_vocab::<u32, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, WordbookError::Corrupt { .. }));
    }

    #[test]
    fn test_load_narrow_token_type() {
        // A snapshot wider than the token type fails rather than wrapping.
        let vocab = WordVocab::<u32>::build(
            &(0..300).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" "),
        )
        .unwrap();

        let mut buf = Vec::new();
        write_vocab(&vocab, &mut buf).unwrap();

        let err = read_vocab::<u8, _>(buf.as_slice()).unwrap_err();
        assert!(matches!(err, WordbookError::VocabCapacity { size: 300 }));
    }
}

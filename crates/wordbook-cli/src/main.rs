//! # Wordbook CLI
//!
//! Builds a word vocabulary from a local corpus directory, saves it as a
//! snapshot, and runs one sample encode/decode round trip.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use wordbook::corpus::load_corpus_dir;
use wordbook::vocab::io::save_vocab_path;
use wordbook::{TokenDecoder, TokenEncoder, VocabDecoder, VocabEncoder, WordVocab};

/// Build a word vocabulary from a local corpus and run a sample round trip.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the corpus directory.
    #[arg(long, default_value = "./data/tinystories")]
    pub data_dir: PathBuf,

    /// Where to save the vocabulary snapshot.
    #[arg(long, default_value = "vocab.wb")]
    pub vocab_path: PathBuf,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(args.verbose as usize + 2)
        .init()?;

    log::info!("loading local stories from {}", args.data_dir.display());
    let raw = load_corpus_dir(&args.data_dir)?;

    let vocab: Arc<WordVocab<u32>> = WordVocab::build(&raw)?.into();
    println!("Vocabulary size: {}", vocab.len());

    save_vocab_path(vocab.as_ref(), &args.vocab_path).with_context(|| {
        format!(
            "failed to save vocabulary to {}",
            args.vocab_path.display()
        )
    })?;

    let encoder = VocabEncoder::init(vocab.clone());
    let decoder = VocabDecoder::init(vocab.clone());

    let sample = "The bird flew high.";
    let encoded = encoder.try_encode(sample)?;

    println!("Test string: {sample}");
    println!("Encoded ids: {encoded:?}");
    println!("Decoded: {}", decoder.try_decode(&encoded)?);

    Ok(())
}

//! Linepress CLI - bit-packed text compression.
//!
//! Wires a chosen codec (fixed-width, Huffman, or LZW) to file paths: the
//! first line of the input document is compressed into a binary payload
//! file plus a text code-table file, and decompressed back from the pair.

use clap::{Parser, Subcommand, ValueEnum};
use linepress_core::error::Result;
use linepress_core::store;
use linepress_core::traits::Codec;
use linepress_fixed::FixedWidthCodec;
use linepress_huffman::HuffmanCodec;
use linepress_lzw::LzwCodec;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "linepress")]
#[command(author, version, about = "Bit-packed text compression toolkit")]
#[command(long_about = "
Linepress compresses a single line of text with one of three codecs
sharing the same bit-packing substrate.

Examples:
  linepress encode input.txt --codec huffman
  linepress encode input.txt --codec lzw --payload encoded --table code
  linepress decode encoded code output.txt --codec lzw
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress the first line of a text file
    #[command(alias = "e")]
    Encode {
        /// Input text file (only the first line is read)
        input: PathBuf,

        /// Codec to use
        #[arg(short, long, value_enum, default_value = "fixed")]
        codec: CodecKind,

        /// Output path for the encoded payload
        #[arg(short, long, default_value = "encoded")]
        payload: PathBuf,

        /// Output path for the code table
        #[arg(short, long, default_value = "code")]
        table: PathBuf,
    },

    /// Decompress a payload/code-table pair
    #[command(alias = "d")]
    Decode {
        /// Encoded payload file
        payload: PathBuf,

        /// Code table file
        table: PathBuf,

        /// Output text file
        output: PathBuf,

        /// Codec to use
        #[arg(short, long, value_enum, default_value = "fixed")]
        codec: CodecKind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CodecKind {
    /// Fixed-width table codec
    Fixed,
    /// Huffman prefix-free codec
    Huffman,
    /// LZW adaptive-dictionary codec
    Lzw,
}

impl CodecKind {
    fn instantiate(self) -> Box<dyn Codec> {
        match self {
            Self::Fixed => Box::new(FixedWidthCodec::new()),
            Self::Huffman => Box::new(HuffmanCodec::new()),
            Self::Lzw => Box::new(LzwCodec::new()),
        }
    }
}

/// Read the first line of a text document.
fn read_first_line(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().next().unwrap_or_default().to_string())
}

fn cmd_encode(input: &Path, kind: CodecKind, payload: &Path, table: &Path) -> Result<()> {
    let text = read_first_line(input)?;

    let mut codec = kind.instantiate();
    codec.build_table(&text)?;
    let bytes = codec.encode(&text)?;
    println!("Successfully encoded!");

    println!("Saving files...");
    store::save_table(table, codec.table()?)?;
    store::save_payload(payload, &bytes)?;
    println!("Encoded file: {}", payload.display());
    println!("Code file: {}", table.display());
    Ok(())
}

fn cmd_decode(payload: &Path, table: &Path, output: &Path, kind: CodecKind) -> Result<()> {
    println!("Loading files...");
    let mut codec = kind.instantiate();
    codec.load_table(store::load_table(table)?)?;
    let bytes = store::load_payload(payload)?;

    println!("Decoding...");
    let decoded = codec.decode(&bytes)?;
    fs::write(output, &decoded)?;

    let preview: String = decoded.chars().take(300).collect();
    let ellipsis = if decoded.chars().count() > 300 { "..." } else { "" };
    println!("Decoded text fragment:\n{preview}{ellipsis}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encode {
            input,
            codec,
            payload,
            table,
        } => cmd_encode(&input, codec, &payload, &table),
        Commands::Decode {
            payload,
            table,
            output,
            codec,
        } => cmd_decode(&payload, &table, &output, codec),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

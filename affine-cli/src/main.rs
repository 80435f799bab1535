use affine_cipher::utils::block_modulus;
use affine_cipher::{AffineKey, BlockCipher, CaesarCipher, TextCipher, stringify};
use clap::{Parser, ValueEnum};
use num_bigint::{BigInt, BigUint};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Affine cipher over the 52-letter alphabet A-Z a-z
///
/// SECURITY NOTE: this is a teaching cipher. Do not use it to protect
/// anything.
#[derive(Parser, Debug)]
#[command(
    name = "affine",
    about = "Affine Caesar and decimal block cipher utility",
    long_about = "
Encrypts and decrypts letter-only text with the affine map f(x) = (k*x + b) mod m.

MODES:
- caesar: every letter is mapped on its own, m = 52
- block:  WIDTH letters are packed into one decimal block, m = 5252...52
          (WIDTH copies of 52); the ciphertext is one large decimal integer

INPUT:
- --text or --file (the file content is trimmed)
- block decryption takes the decimal ciphertext and needs --length, the
  number of letters in the original plaintext

KEYGEN:
Prints a random coefficient k (coprime to m) and bias b, one per line.
"
)]
#[command(version, allow_negative_numbers = true)]
struct Args {
    /// Operation: encrypt, decrypt or keygen
    #[arg(long, value_enum)]
    operation: Operation,

    /// Cipher mode
    #[arg(long, value_enum, default_value_t = Mode::Caesar)]
    mode: Mode,

    /// Input text (letters only, or a decimal number for block decryption)
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Path to the input file
    #[arg(long, value_name = "INPUT_FILE")]
    file: Option<PathBuf>,

    /// Key coefficient k (decimal, may be arbitrarily large)
    #[arg(short, long = "coefficient")]
    k: Option<BigInt>,

    /// Key bias b (decimal, may be arbitrarily large)
    #[arg(short, long = "bias")]
    b: Option<BigInt>,

    /// Letters per block (block mode only)
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Letter count of the original plaintext (block decryption only)
    #[arg(long)]
    length: Option<usize>,

    /// Also print the block ciphertext in base 52
    #[arg(long)]
    stringify: bool,

    /// Output destination (file or directory); stdout when omitted
    ///
    /// If a directory is given, the output file gets the same name as
    /// the input file.
    #[arg(long, value_name = "OUTPUT_DESTINATION")]
    output: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// Encrypt plaintext letters
    Encrypt,
    /// Decrypt a ciphertext
    Decrypt,
    /// Generate a random valid key for the selected mode
    Keygen,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "Encryption"),
            Operation::Decrypt => write!(f, "Decryption"),
            Operation::Keygen => write!(f, "Key generation"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Letter-by-letter affine cipher modulo 52
    Caesar,
    /// Fixed-width decimal block cipher
    Block,
}

/// Installs the tracing subscriber; RUST_LOG wins over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

/// Reads the input either from `--text` or from `--file`.
fn read_input(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(text) = &args.text {
        return Ok(text.trim().to_string());
    }

    let file_path = args
        .file
        .as_deref()
        .ok_or("No input given: use --text or --file")?;
    if !file_path.is_file() {
        return Err(format!("File not found or not readable: {}", file_path.display()).into());
    }

    let content = fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read {}: {}", file_path.display(), e))?;
    Ok(content.trim().to_string())
}

/// Parses a decimal block ciphertext.
fn parse_ciphertext(input: &str) -> Result<BigUint, Box<dyn std::error::Error>> {
    BigUint::parse_bytes(input.as_bytes(), 10)
        .ok_or_else(|| format!("Invalid decimal ciphertext: '{}'", input).into())
}

fn require_key(args: &Args) -> Result<AffineKey, Box<dyn std::error::Error>> {
    let k = args.k.clone().ok_or("Missing key coefficient (-k)")?;
    let b = args.b.clone().ok_or("Missing key bias (-b)")?;
    Ok(AffineKey::new(k, b))
}

fn mode_modulus(args: &Args) -> Result<BigInt, Box<dyn std::error::Error>> {
    match args.mode {
        Mode::Caesar => Ok(CaesarCipher::modulus()),
        Mode::Block => Ok(BigInt::from(block_modulus(args.width)?)),
    }
}

/// Runs the selected operation and returns the text to emit.
fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    match args.operation {
        Operation::Keygen => generate_key(args),
        Operation::Encrypt => encrypt(args),
        Operation::Decrypt => decrypt(args),
    }
}

fn generate_key(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let modulus = mode_modulus(args)?;
    let key = AffineKey::generate(&mut rand::thread_rng(), &modulus)?;
    info!(%modulus, "generated key");
    Ok(format!("{}\n{}", key.k(), key.b()))
}

fn encrypt(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let key = require_key(args)?;
    let input = read_input(args)?;
    debug!(mode = ?args.mode, "encrypting");

    match args.mode {
        Mode::Caesar => Ok(CaesarCipher::new(key).encrypt(&input)?),
        Mode::Block => {
            let ciphertext = BlockCipher::new(key, args.width)?.encrypt_to_integer(&input)?;
            if args.stringify {
                Ok(format!("{}\n{}", ciphertext, stringify(&ciphertext)))
            } else {
                Ok(ciphertext.to_string())
            }
        }
    }
}

fn decrypt(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let key = require_key(args)?;
    let input = read_input(args)?;
    debug!(mode = ?args.mode, "decrypting");

    match args.mode {
        Mode::Caesar => Ok(CaesarCipher::new(key).decrypt(&input)?),
        Mode::Block => {
            let length = args
                .length
                .ok_or("Block decryption needs --length (letters in the plaintext)")?;
            let ciphertext = parse_ciphertext(&input)?;
            Ok(BlockCipher::new(key, args.width)?.decrypt_integer(&ciphertext, length)?)
        }
    }
}

/// Determines the final output path
///
/// If `output_destination` is a directory, the file name of `input_path`
/// (or `affine.txt` for `--text` input) is used. Otherwise
/// `output_destination` is used directly as the file path.
fn resolve_output_path(
    output_destination: &Path,
    input_path: Option<&Path>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let output_path = if output_destination.is_dir() {
        let file_name = match input_path {
            Some(path) => path.file_name().ok_or("Invalid input file name")?,
            None => OsStr::new("affine.txt"),
        };
        output_destination.join(file_name)
    } else {
        output_destination.to_path_buf()
    };

    // create the parent directory if needed
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create directory {}: {}", parent.display(), e))?;
    }

    Ok(output_path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let result = run(&args)?;

    match &args.output {
        Some(destination) => {
            let output_path = resolve_output_path(destination, args.file.as_deref())?;
            fs::write(&output_path, &result)
                .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;

            println!("{} completed.", args.operation);
            println!("Result written to: {}", output_path.display());
        }
        None => println!("{}", result),
    }

    Ok(())
}

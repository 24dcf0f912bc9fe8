use bitveil::cli::{embed_message, extract_message, show_info, EmbedOptions, ExtractOptions};
use bitveil::steg::StegMethod;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("BITVEIL_VERSION");
const BUILD: &str = env!("BITVEIL_BUILD");
const PROFILE: &str = env!("BITVEIL_PROFILE");
const GIT_HASH: &str = env!("BITVEIL_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "bitveil")]
#[command(author, about = "LSB steganography for 24-bit BMP carriers", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a file inside a BMP carrier
    #[command(alias = "e")]
    Embed {
        /// Steganography method (lsb1..lsb8 or lsbi)
        #[arg(long, default_value = "lsb1", value_parser = parse_method)]
        method: StegMethod,

        /// Seal the payload under this passphrase before embedding
        #[arg(long)]
        passphrase: Option<String>,

        /// File to hide
        input: PathBuf,

        /// Carrier bitmap
        carrier: PathBuf,

        /// Output bitmap
        output: PathBuf,
    },

    /// Recover a hidden file from a BMP carrier
    #[command(alias = "x")]
    Extract {
        /// Steganography method used at embed time
        #[arg(long, default_value = "lsb1", value_parser = parse_method)]
        method: StegMethod,

        /// Passphrase the payload was sealed under
        #[arg(long)]
        passphrase: Option<String>,

        /// Carrier bitmap to read
        carrier: PathBuf,

        /// Output file (the recovered extension is appended)
        output: PathBuf,
    },

    /// Show carrier capacity information
    #[command(alias = "i")]
    Info {
        /// BMP file to inspect
        file: PathBuf,
    },
}

fn parse_method(s: &str) -> Result<StegMethod, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("bitveil {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Embed {
            method,
            passphrase,
            input,
            carrier,
            output,
        } => {
            let options = EmbedOptions { method, passphrase };

            match embed_message(&input, &carrier, &output, &options) {
                Ok(embedded) => {
                    println!(
                        "Embedded {} payload bytes into {}",
                        embedded,
                        output.display()
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Extract {
            method,
            passphrase,
            carrier,
            output,
        } => {
            let options = ExtractOptions { method, passphrase };

            match extract_message(&carrier, &output, &options) {
                Ok(written) => {
                    println!("Extracted to {}", written.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Info { file } => match show_info(&file) {
            Ok(info) => {
                print!("{}", info);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pinblock", version, about = "ISO 9564 Format 3 PIN block codec")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

// No Debug derive: the arguments carry the clear PIN.
#[derive(Subcommand)]
pub enum Command {
    /// Encode a PIN against a PAN into a 16-character hex PIN block.
    Encode {
        /// PIN digits (1-14, narrowed by the policy)
        #[arg(long)]
        pin: String,
        /// Primary account number (at least 12 digits)
        #[arg(long)]
        pan: String,
        /// JSON policy file restricting the PIN length
        #[arg(long)]
        policy: Option<PathBuf>,
        /// Print a JSON object instead of the bare block
        #[arg(long)]
        json: bool,
    },
    /// Recover the PIN from a hex PIN block and its PAN.
    Decode {
        /// PIN block as hex (either case)
        #[arg(long)]
        block: String,
        /// Primary account number the block was built with
        #[arg(long)]
        pan: String,
        /// Print a JSON object instead of the bare PIN
        #[arg(long)]
        json: bool,
    },
    /// Print the effective PIN length policy as JSON.
    Policy {
        /// JSON policy file to read
        #[arg(long)]
        policy: Option<PathBuf>,
    },
}

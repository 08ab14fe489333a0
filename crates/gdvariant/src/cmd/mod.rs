use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use gdvariant_codec::{select_version_profile, TypeRegistry};
use gdvariant_frame::DEFAULT_MAX_PAYLOAD;

use crate::exit::{registry_error, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod profiles;
pub mod transcode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode every message in a file and print the values.
    Decode(DecodeArgs),
    /// Encode a JSON document as one message.
    Encode(EncodeArgs),
    /// Re-encode a message file under another profile.
    Transcode(TranscodeArgs),
    /// List the wire-format profiles and their type tables.
    Profiles(ProfilesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, profile: &str, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, profile, format),
        Command::Encode(args) => encode::run(args, profile, format),
        Command::Transcode(args) => transcode::run(args, profile, format),
        Command::Profiles(args) => profiles::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Build the registry for a profile name given on the command line.
pub fn load_profile(name: &str) -> CliResult<Arc<TypeRegistry>> {
    select_version_profile(name)
        .map(Arc::new)
        .map_err(registry_error)
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding one or more back-to-back messages.
    pub file: PathBuf,
    /// Maximum payload size of a single message in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_PAYLOAD)]
    pub max_payload: usize,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON document to encode.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub json: Option<String>,
    /// Read the JSON document from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Write the message to a file instead of stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TranscodeArgs {
    /// Message file to read (decoded with --profile).
    pub input: PathBuf,
    /// Message file to write.
    pub output: PathBuf,
    /// Profile to encode with. Default: same as --profile.
    #[arg(long, value_name = "PROFILE")]
    pub to: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ProfilesArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

mod cmd;
mod exit;
mod json;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "gdvariant", version, about = "Typed binary variant codec CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    /// Wire-format profile: legacy, v3 or v4.
    #[arg(
        long,
        value_name = "PROFILE",
        default_value = "v4",
        env = "GDVARIANT_PROFILE",
        global = true
    )]
    profile: String,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, &cli.profile, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decode_subcommand() {
        let cli = Cli::try_parse_from(["gdvariant", "decode", "/tmp/messages.bin"])
            .expect("decode args should parse");

        assert_eq!(cli.profile, "v4");
        assert!(matches!(cli.command, Command::Decode(_)));
    }

    #[test]
    fn profile_flag_is_global() {
        let cli = Cli::try_parse_from([
            "gdvariant",
            "transcode",
            "in.bin",
            "out.bin",
            "--to",
            "v3",
            "--profile",
            "legacy",
        ])
        .expect("transcode args should parse");

        assert_eq!(cli.profile, "legacy");
        match cli.command {
            Command::Transcode(args) => assert_eq!(args.to.as_deref(), Some("v3")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_conflicting_encode_inputs() {
        let err = Cli::try_parse_from([
            "gdvariant",
            "encode",
            "--json",
            "1",
            "--file",
            "value.json",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn encode_requires_an_input() {
        let err = Cli::try_parse_from(["gdvariant", "encode"])
            .expect_err("missing input should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

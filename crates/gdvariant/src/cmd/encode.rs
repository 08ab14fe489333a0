use std::fs;

use gdvariant_codec::VariantCodec;
use gdvariant_frame::serialize;
use serde::Serialize;

use crate::cmd::{load_profile, EncodeArgs};
use crate::exit::{frame_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::json::json_to_value;
use crate::output::{print_raw, print_summary, OutputFormat};

#[derive(Serialize)]
struct EncodeSummary<'a> {
    profile: &'a str,
    kind: &'a str,
    bytes: usize,
    out: String,
}

pub fn run(args: EncodeArgs, profile: &str, format: OutputFormat) -> CliResult<i32> {
    let registry = load_profile(profile)?;
    let document = resolve_document(&args)?;

    let input: serde_json::Value = serde_json::from_str(&document)
        .map_err(|err| CliError::new(USAGE, format!("input is not valid JSON: {err}")))?;
    let value = json_to_value(&input)
        .map_err(|err| CliError::new(DATA_INVALID, format!("cannot encode input: {err}")))?;

    let codec = VariantCodec::new(&registry);
    let message =
        serialize(&codec, &value).map_err(|err| frame_error("encode failed", err))?;

    match &args.out {
        Some(path) => {
            fs::write(path, &message)
                .map_err(|err| io_error(&format!("failed writing {}", path.display()), err))?;
            tracing::info!(out = %path.display(), bytes = message.len(), "message written");
            print_summary(
                &EncodeSummary {
                    profile,
                    kind: value.kind().name(),
                    bytes: message.len(),
                    out: path.display().to_string(),
                },
                format,
            );
        }
        None => print_raw(&message),
    }

    Ok(SUCCESS)
}

fn resolve_document(args: &EncodeArgs) -> CliResult<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "one of --json or --file is required"))
}

use std::fs;

use bytes::BytesMut;
use gdvariant_codec::VariantCodec;
use gdvariant_frame::{encode_message, FrameConfig};
use serde::Serialize;

use crate::cmd::decode::decode_all;
use crate::cmd::{load_profile, TranscodeArgs};
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::output::{print_summary, OutputFormat};

#[derive(Serialize)]
struct TranscodeSummary<'a> {
    from: &'a str,
    to: &'a str,
    messages: usize,
    bytes_in: usize,
    bytes_out: usize,
    out: String,
}

pub fn run(args: TranscodeArgs, profile: &str, format: OutputFormat) -> CliResult<i32> {
    let source = load_profile(profile)?;
    let target_name = args.to.as_deref().unwrap_or(profile);
    let target = load_profile(target_name)?;

    let data = fs::read(&args.input)
        .map_err(|err| io_error(&format!("failed reading {}", args.input.display()), err))?;
    let values = decode_all(source, FrameConfig::default(), &data)?;

    let codec = VariantCodec::new(&target);
    let mut out = BytesMut::with_capacity(data.len());
    for (index, value) in values.iter().enumerate() {
        encode_message(&codec, value, &mut out)
            .map_err(|err| frame_error(&format!("message {index} cannot be encoded"), err))?;
    }

    fs::write(&args.output, &out)
        .map_err(|err| io_error(&format!("failed writing {}", args.output.display()), err))?;
    tracing::info!(
        from = profile,
        to = target_name,
        messages = values.len(),
        "transcoded message file"
    );

    print_summary(
        &TranscodeSummary {
            from: profile,
            to: target_name,
            messages: values.len(),
            bytes_in: data.len(),
            bytes_out: out.len(),
            out: args.output.display().to_string(),
        },
        format,
    );
    Ok(SUCCESS)
}

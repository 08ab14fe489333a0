use std::fs;
use std::sync::Arc;

use gdvariant_codec::{TypeRegistry, Value};
use gdvariant_frame::{FrameConfig, MessageStream};

use crate::cmd::{load_profile, DecodeArgs};
use crate::exit::{frame_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_values, OutputFormat};

pub fn run(args: DecodeArgs, profile: &str, format: OutputFormat) -> CliResult<i32> {
    let registry = load_profile(profile)?;
    let data = fs::read(&args.file)
        .map_err(|err| io_error(&format!("failed reading {}", args.file.display()), err))?;

    let config = FrameConfig {
        max_payload_size: args.max_payload,
        ..FrameConfig::default()
    };
    let values = decode_all(registry, config, &data)?;
    tracing::info!(
        file = %args.file.display(),
        profile,
        messages = values.len(),
        "decoded message file"
    );

    print_values(&values, profile, format);
    Ok(SUCCESS)
}

/// Decode back-to-back messages, failing on a trailing partial message.
pub fn decode_all(
    registry: Arc<TypeRegistry>,
    config: FrameConfig,
    data: &[u8],
) -> CliResult<Vec<Value>> {
    let mut stream = MessageStream::with_config(registry, config);
    stream.feed(data);

    let mut values = Vec::new();
    loop {
        let batch = stream
            .drain_all()
            .map_err(|err| frame_error(&format!("message {} is invalid", values.len()), err))?;
        if batch.is_empty() {
            break;
        }
        values.extend(batch);
    }

    if !stream.is_empty() {
        return Err(CliError::new(
            DATA_INVALID,
            format!(
                "trailing partial message ({} bytes buffered, {} missing)",
                stream.len(),
                -stream.size_delta()
            ),
        ));
    }
    Ok(values)
}

use ddeprims_codec::{FormatCodec, FormatConfig, FormatValue};

use crate::cmd::{DecodeFormatArgs, EncodeFormatArgs};
use crate::exit::{codec_error, hex_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_encoded, print_value, OutputFormat};

pub fn run_encode(args: EncodeFormatArgs, format: OutputFormat) -> CliResult<i32> {
    let value = if let Some(text) = args.data {
        FormatValue::Text(text)
    } else if let Some(hex) = args.hex {
        let bytes = hex::decode(hex.trim()).map_err(|err| hex_error("encode format", err))?;
        FormatValue::from(bytes)
    } else if let Some(path) = args.file {
        let bytes = std::fs::read(&path)
            .map_err(|err| io_error(&format!("read {}", path.display()), err))?;
        FormatValue::from(bytes)
    } else {
        return Err(CliError::new(
            USAGE,
            "one of --data, --hex or --file is required",
        ));
    };

    let encoded = FormatCodec::new()
        .encode(args.cf, value)
        .map_err(|err| codec_error("encode format", err))?;

    print_encoded(&encoded, format);
    Ok(SUCCESS)
}

pub fn run_decode(args: DecodeFormatArgs, format: OutputFormat) -> CliResult<i32> {
    let config = FormatConfig {
        trim_text_terminator: args.trim,
        ..FormatConfig::default()
    }
    .with_legacy_label(&args.encoding)
    .ok_or_else(|| {
        CliError::new(
            USAGE,
            format!("unknown encoding label `{}`", args.encoding),
        )
    })?;

    let data = hex::decode(args.hex.trim()).map_err(|err| hex_error("decode format", err))?;
    let value = FormatCodec::with_config(config).decode(args.cf, data);
    tracing::debug!(
        format = args.cf,
        encoding = config.legacy_encoding.name(),
        "decoded format value"
    );

    print_value(args.cf, &value, format);
    Ok(SUCCESS)
}

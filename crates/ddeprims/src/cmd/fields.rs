use ddeprims_codec::{field_size, FieldReader, FieldWriter};

use crate::cmd::{DecodeFieldsArgs, EncodeFieldsArgs};
use crate::exit::{codec_error, hex_error, CliResult, SUCCESS};
use crate::output::{print_encoded, print_fields, FieldOutput, OutputFormat};

pub fn run_encode(args: EncodeFieldsArgs, format: OutputFormat) -> CliResult<i32> {
    let required: usize = args.values.iter().map(|value| field_size(value)).sum();
    let mut buf = vec![0u8; args.capacity.unwrap_or(required)];

    let mut writer = FieldWriter::new(&mut buf);
    for value in &args.values {
        writer
            .write_string(value)
            .map_err(|err| codec_error("encode field", err))?;
    }
    let end = writer.position();
    tracing::debug!(fields = args.values.len(), end, "encoded fields");

    print_encoded(&buf[..end], format);
    Ok(SUCCESS)
}

pub fn run_decode(args: DecodeFieldsArgs, format: OutputFormat) -> CliResult<i32> {
    let buf = hex::decode(args.hex.trim()).map_err(|err| hex_error("decode fields", err))?;

    let mut reader = FieldReader::at(&buf, args.offset);
    let mut fields = Vec::new();
    while !reader.is_exhausted() {
        let offset = reader.position();
        let value = reader
            .read_string()
            .map_err(|err| codec_error("decode field", err))?;
        fields.push(FieldOutput {
            offset,
            length: reader.position() - offset,
            value,
        });
    }

    print_fields(&fields, reader.position(), format);
    Ok(SUCCESS)
}

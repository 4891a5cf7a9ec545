use clap::{Args, Subcommand};
use std::path::PathBuf;

use ddeprims_codec::clipboard::format_by_name;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod fields;
pub mod format;
pub mod formats;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode strings as consecutive length-prefixed fields.
    EncodeFields(EncodeFieldsArgs),
    /// Decode every length-prefixed field in a hex buffer.
    DecodeFields(DecodeFieldsArgs),
    /// Encode a value for a clipboard format.
    EncodeFormat(EncodeFormatArgs),
    /// Decode a hex buffer received for a clipboard format.
    DecodeFormat(DecodeFormatArgs),
    /// List the predefined clipboard formats.
    Formats(FormatsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::EncodeFields(args) => fields::run_encode(args, format),
        Command::DecodeFields(args) => fields::run_decode(args, format),
        Command::EncodeFormat(args) => format::run_encode(args, format),
        Command::DecodeFormat(args) => format::run_decode(args, format),
        Command::Formats(_) => formats::run(format),
        Command::Version(args) => version::run(args),
    }
}

/// Parse a clipboard format given as decimal, `0x` hex, or a name such as
/// `CF_TEXT` / `unicodetext`.
pub fn parse_format_code(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map_err(|err| format!("invalid format code: {err}"));
    }
    if let Ok(code) = raw.parse::<u32>() {
        return Ok(code);
    }
    format_by_name(raw).ok_or_else(|| format!("unknown clipboard format `{raw}`"))
}

#[derive(Args, Debug)]
pub struct EncodeFieldsArgs {
    /// Strings to encode, in order.
    #[arg(required = true)]
    pub values: Vec<String>,
    /// Fixed buffer size. Default: exactly large enough for all fields.
    #[arg(long)]
    pub capacity: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DecodeFieldsArgs {
    /// Buffer contents as hex.
    pub hex: String,
    /// Offset of the first field.
    #[arg(long, default_value = "0")]
    pub offset: usize,
}

#[derive(Args, Debug)]
pub struct EncodeFormatArgs {
    /// Clipboard format (code or name).
    #[arg(long, value_parser = parse_format_code)]
    pub cf: u32,
    /// Text value.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Pre-encoded bytes as hex (passed through unchanged).
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read pre-encoded bytes from a file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeFormatArgs {
    /// Clipboard format (code or name).
    #[arg(long, value_parser = parse_format_code)]
    pub cf: u32,
    /// Buffer contents as hex.
    pub hex: String,
    /// Code page label for CF_TEXT (e.g. gbk, shift_jis, windows-1252).
    #[arg(long, env = "DDEPRIMS_LEGACY_ENCODING", default_value = "gbk")]
    pub encoding: String,
    /// Cut CF_TEXT output at the first NUL.
    #[arg(long)]
    pub trim: bool,
}

#[derive(Args, Debug, Default)]
pub struct FormatsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

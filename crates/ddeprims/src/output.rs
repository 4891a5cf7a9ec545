use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use ddeprims_codec::clipboard::{
    format_name, REGISTERED_FORMAT_END, REGISTERED_FORMAT_START, STANDARD_FORMATS,
};
use ddeprims_codec::FormatValue;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One decoded string field and where it sat in the buffer.
#[derive(Debug, Serialize)]
pub struct FieldOutput {
    pub offset: usize,
    pub length: usize,
    pub value: String,
}

#[derive(Serialize)]
struct EncodedOutput<'a> {
    size: usize,
    hex: &'a str,
}

#[derive(Serialize)]
struct FieldsOutput<'a> {
    fields: &'a [FieldOutput],
    end: usize,
}

#[derive(Serialize)]
struct ValueOutput<'a> {
    format: u32,
    format_name: &'a str,
    kind: &'a str,
    size: usize,
    value: String,
}

#[derive(Serialize)]
struct FormatRow {
    code: u32,
    name: &'static str,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn print_encoded(data: &[u8], format: OutputFormat) {
    let hex = hex::encode(data);
    match format {
        OutputFormat::Json => println!(
            "{}",
            to_json(&EncodedOutput {
                size: data.len(),
                hex: &hex,
            })
        ),
        OutputFormat::Table => {
            let mut table = new_table(vec!["SIZE", "HEX"]);
            table.add_row(vec![data.len().to_string(), hex]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("size={} hex={}", data.len(), hex),
        OutputFormat::Raw => print_raw(data),
    }
}

pub fn print_fields(fields: &[FieldOutput], end: usize, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", to_json(&FieldsOutput { fields, end })),
        OutputFormat::Table => {
            let mut table = new_table(vec!["OFFSET", "LENGTH", "VALUE"]);
            for field in fields {
                table.add_row(vec![
                    field.offset.to_string(),
                    field.length.to_string(),
                    field.value.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for field in fields {
                println!(
                    "offset={} length={} value={:?}",
                    field.offset, field.length, field.value
                );
            }
            println!("end={end}");
        }
        OutputFormat::Raw => {
            for field in fields {
                println!("{}", field.value);
            }
        }
    }
}

pub fn print_value(code: u32, value: &FormatValue, format: OutputFormat) {
    let (kind, size, rendered) = match value {
        FormatValue::Text(text) => ("text", text.len(), text.clone()),
        FormatValue::Bytes(bytes) => ("bytes", bytes.len(), hex::encode(bytes)),
    };
    match format {
        OutputFormat::Json => println!(
            "{}",
            to_json(&ValueOutput {
                format: code,
                format_name: format_name(code),
                kind,
                size,
                value: rendered,
            })
        ),
        OutputFormat::Table => {
            let mut table = new_table(vec!["FORMAT", "KIND", "SIZE", "VALUE"]);
            table.add_row(vec![
                format!("{} ({code})", format_name(code)),
                kind.to_string(),
                size.to_string(),
                rendered,
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!(
            "format={code} ({}) kind={kind} size={size} value={rendered:?}",
            format_name(code)
        ),
        OutputFormat::Raw => match value {
            FormatValue::Text(text) => print_raw(text.as_bytes()),
            FormatValue::Bytes(bytes) => print_raw(bytes),
        },
    }
}

pub fn print_formats(format: OutputFormat) {
    let rows: Vec<FormatRow> = STANDARD_FORMATS
        .iter()
        .map(|&code| FormatRow {
            code,
            name: format_name(code),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", to_json(&rows)),
        OutputFormat::Table => {
            let mut table = new_table(vec!["CODE", "NAME"]);
            for row in &rows {
                table.add_row(vec![row.code.to_string(), row.name.to_string()]);
            }
            table.add_row(vec![
                registered_range(),
                format_name(REGISTERED_FORMAT_START).to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for row in &rows {
                println!("{}\t{}", row.code, row.name);
            }
            println!(
                "{}\t{}",
                registered_range(),
                format_name(REGISTERED_FORMAT_START)
            );
        }
    }
}

fn registered_range() -> String {
    format!("{REGISTERED_FORMAT_START:#06X}-{REGISTERED_FORMAT_END:#06X}")
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

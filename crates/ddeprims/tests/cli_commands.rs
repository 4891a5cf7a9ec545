#![cfg(feature = "cli")]

use std::process::{Command, Output};

use serde_json::Value;

fn ddeprims(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ddeprims"))
        .env_remove("DDEPRIMS_LEGACY_ENCODING")
        .env_remove("RUST_LOG")
        .args(["--log-level", "error", "--format", "json"])
        .args(args)
        .output()
        .expect("ddeprims should run")
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn encode_fields_outputs_wire_hex() {
    let output = ddeprims(&["encode-fields", "hi"]);
    let json = json_stdout(&output);

    assert_eq!(json["size"], 7);
    assert_eq!(json["hex"], "03000000686900");
}

#[test]
fn decode_fields_reports_offsets() {
    let output = ddeprims(&["decode-fields", "030000006869000100000000020000007800"]);
    let json = json_stdout(&output);

    let fields = json["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0]["value"], "hi");
    assert_eq!(fields[0]["offset"], 0);
    assert_eq!(fields[1]["value"], "");
    assert_eq!(fields[1]["offset"], 7);
    assert_eq!(fields[2]["value"], "x");
    assert_eq!(fields[2]["length"], 6);
    assert_eq!(json["end"], 18);
}

#[test]
fn decode_truncated_field_is_data_invalid() {
    let output = ddeprims(&["decode-fields", "0300000068690001000000000200000078"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed field at offset 12"));
}

#[test]
fn decode_offset_past_end_is_data_invalid() {
    let output = ddeprims(&["decode-fields", "03000000686900", "--offset", "50"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed field at offset 50"));
}

#[test]
fn encode_fields_with_small_capacity_fails() {
    let output = ddeprims(&["encode-fields", "--capacity", "4", "hi"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not enough space"));
}

#[test]
fn decode_unicode_text_strips_padding() {
    let output = ddeprims(&["decode-format", "--cf", "CF_UNICODETEXT", "61626300706164"]);
    let json = json_stdout(&output);

    assert_eq!(json["kind"], "text");
    assert_eq!(json["format_name"], "CF_UNICODETEXT");
    assert_eq!(json["value"], "abc");
}

#[test]
fn decode_text_uses_gbk_by_default() {
    let output = ddeprims(&["decode-format", "--cf", "text", "c4e3bac3"]);
    let json = json_stdout(&output);
    assert_eq!(json["value"], "你好");
}

#[test]
fn decode_text_encoding_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_ddeprims"))
        .env("DDEPRIMS_LEGACY_ENCODING", "shift_jis")
        .args(["--format", "json", "decode-format", "--cf", "1", "93fa967b"])
        .output()
        .expect("ddeprims should run");
    let json = json_stdout(&output);
    assert_eq!(json["value"], "日本");
}

#[test]
fn decode_unknown_format_passes_bytes_through() {
    let output = ddeprims(&["decode-format", "--cf", "0xC001", "ff0010"]);
    let json = json_stdout(&output);

    assert_eq!(json["kind"], "bytes");
    assert_eq!(json["format_name"], "REGISTERED");
    assert_eq!(json["value"], "ff0010");
}

#[test]
fn encode_text_format_appends_terminator() {
    let output = ddeprims(&["encode-format", "--cf", "text", "--data", "ok"]);
    let json = json_stdout(&output);
    assert_eq!(json["hex"], "6f6b00");
}

#[test]
fn encode_unsupported_format_is_usage_error() {
    let output = ddeprims(&["encode-format", "--cf", "unicodetext", "--data", "ok"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported data format 13"));
}

#[test]
fn encode_hex_passes_through_any_format() {
    let output = ddeprims(&["encode-format", "--cf", "dib", "--hex", "0102"]);
    let json = json_stdout(&output);
    assert_eq!(json["hex"], "0102");
}

#[test]
fn unknown_encoding_label_is_usage_error() {
    let output = ddeprims(&["decode-format", "--cf", "text", "--encoding", "nope", "00"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn formats_lists_standard_table() {
    let output = ddeprims(&["formats"]);
    let json = json_stdout(&output);

    let rows = json.as_array().expect("rows array");
    assert_eq!(rows.len(), 17);
    assert_eq!(rows[0]["name"], "CF_TEXT");
    assert_eq!(rows[12]["code"], 13);
}

#[test]
fn version_reports_crate_version() {
    let output = ddeprims(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("ddeprims {}", env!("CARGO_PKG_VERSION")));
}

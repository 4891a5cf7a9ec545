use bytes::Bytes;
use encoding_rs::{Encoding, GBK};
use tracing::trace;

use crate::clipboard::{CF_TEXT, CF_UNICODETEXT};
use crate::error::{CodecError, Result};

/// Clipboard format tag selecting the text rule for a value.
///
/// The set of rules is closed: every code that is not one of the text
/// formats travels as opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// `CF_TEXT`: legacy code page text.
    Text,
    /// `CF_UNICODETEXT`: UTF-8 text, NUL-padded.
    UnicodeText,
    /// Any other format, passed through untouched.
    Other(u32),
}

impl DataFormat {
    /// Classify a wire format code.
    pub fn from_code(code: u32) -> Self {
        match code {
            CF_TEXT => Self::Text,
            CF_UNICODETEXT => Self::UnicodeText,
            other => Self::Other(other),
        }
    }

    /// Reclassify by wire code, so `Other(CF_TEXT)` dispatches as `Text`.
    pub fn canonical(self) -> Self {
        Self::from_code(self.code())
    }

    /// The wire format code.
    pub fn code(self) -> u32 {
        match self {
            Self::Text => CF_TEXT,
            Self::UnicodeText => CF_UNICODETEXT,
            Self::Other(code) => code,
        }
    }
}

impl From<u32> for DataFormat {
    fn from(code: u32) -> Self {
        Self::from_code(code)
    }
}

impl From<DataFormat> for u32 {
    fn from(format: DataFormat) -> Self {
        format.code()
    }
}

/// An application value carried in a data buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatValue {
    Text(String),
    Bytes(Bytes),
}

impl FormatValue {
    /// Borrow the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bytes(_) => None,
        }
    }

    /// Borrow the raw bytes, if this is a binary value.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Text(_) => None,
            Self::Bytes(bytes) => Some(bytes),
        }
    }
}

impl From<String> for FormatValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FormatValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Bytes> for FormatValue {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u8>> for FormatValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(bytes))
    }
}

/// Configuration for the format codec.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Code page used to decode `CF_TEXT`. Default: GBK.
    pub legacy_encoding: &'static Encoding,
    /// When true, `CF_TEXT` output is cut at the first NUL. Default: false.
    pub trim_text_terminator: bool,
}

impl FormatConfig {
    /// Use the code page named by a WHATWG encoding label (e.g. `gbk`,
    /// `shift_jis`, `windows-1252`). Returns `None` for an unknown label.
    pub fn with_legacy_label(self, label: &str) -> Option<Self> {
        let legacy_encoding = Encoding::for_label(label.trim().as_bytes())?;
        Some(Self {
            legacy_encoding,
            ..self
        })
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            legacy_encoding: GBK,
            trim_text_terminator: false,
        }
    }
}

/// Encodes and decodes values for clipboard formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatCodec {
    config: FormatConfig,
}

impl FormatCodec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Current codec configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Encode a value for `format`.
    ///
    /// Binary values pass through unchanged whatever the format. Text can
    /// only be encoded as `CF_TEXT`: one byte per UTF-16 unit (its low byte)
    /// followed by a NUL terminator.
    pub fn encode(
        &self,
        format: impl Into<DataFormat>,
        value: impl Into<FormatValue>,
    ) -> Result<Bytes> {
        let format = format.into().canonical();
        trace!(format = format.code(), "encoding format value");

        let text = match value.into() {
            FormatValue::Bytes(bytes) => return Ok(bytes),
            FormatValue::Text(text) => text,
        };

        match format {
            DataFormat::Text => {
                let mut out = Vec::with_capacity(text.len() + 1);
                out.extend(text.encode_utf16().map(|unit| unit as u8));
                out.push(0);
                Ok(Bytes::from(out))
            }
            other => Err(CodecError::UnsupportedFormat(other.code())),
        }
    }

    /// Decode a data buffer received for `format`.
    pub fn decode(&self, format: impl Into<DataFormat>, data: impl Into<Bytes>) -> FormatValue {
        let format = format.into().canonical();
        let data = data.into();
        trace!(format = format.code(), len = data.len(), "decoding format value");

        match format {
            DataFormat::Text => {
                let (decoded, _) = self
                    .config
                    .legacy_encoding
                    .decode_without_bom_handling(&data);
                let text: &str = &decoded;
                let text = if self.config.trim_text_terminator {
                    truncate_at_nul(&text)
                } else {
                    text
                };
                FormatValue::Text(text.to_string())
            }
            DataFormat::UnicodeText => {
                let text = String::from_utf8_lossy(&data);
                FormatValue::Text(truncate_at_nul(&text).to_string())
            }
            DataFormat::Other(_) => FormatValue::Bytes(data),
        }
    }
}

/// Encode a value for `format` with the default configuration.
pub fn encode_format(
    format: impl Into<DataFormat>,
    value: impl Into<FormatValue>,
) -> Result<Bytes> {
    FormatCodec::new().encode(format, value)
}

/// Decode a data buffer for `format` with the default configuration.
pub fn decode_format(format: impl Into<DataFormat>, data: impl Into<Bytes>) -> FormatValue {
    FormatCodec::new().decode(format, data)
}

fn truncate_at_nul(text: &str) -> &str {
    match text.find('\0') {
        Some(idx) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use encoding_rs::SHIFT_JIS;

    use super::*;
    use crate::clipboard::{CF_BITMAP, CF_DIB};

    #[test]
    fn format_codes_roundtrip() {
        assert_eq!(DataFormat::from_code(CF_TEXT), DataFormat::Text);
        assert_eq!(DataFormat::from_code(CF_UNICODETEXT), DataFormat::UnicodeText);
        assert_eq!(DataFormat::from_code(0xC0DE), DataFormat::Other(0xC0DE));
        for code in [CF_TEXT, CF_BITMAP, CF_UNICODETEXT, 0xC0DE] {
            assert_eq!(u32::from(DataFormat::from(code)), code);
        }
    }

    #[test]
    fn hand_built_tags_dispatch_by_wire_code() {
        assert_eq!(DataFormat::Other(CF_TEXT).canonical(), DataFormat::Text);
        assert_eq!(DataFormat::Other(0xC0DE).canonical(), DataFormat::Other(0xC0DE));

        let out = encode_format(DataFormat::Other(CF_TEXT), "x").unwrap();
        assert_eq!(out.as_ref(), b"x\0");

        let value = decode_format(
            DataFormat::Other(CF_UNICODETEXT),
            Bytes::from_static(b"a\0b"),
        );
        assert_eq!(value.as_text(), Some("a"));
    }

    #[test]
    fn encode_text_appends_terminator() {
        let out = encode_format(CF_TEXT, "hello").unwrap();
        assert_eq!(out.as_ref(), b"hello\0");
    }

    #[test]
    fn encode_text_is_single_byte_per_char() {
        let out = encode_format(CF_TEXT, "é").unwrap();
        assert_eq!(out.as_ref(), &[0xE9, 0x00]);
    }

    #[test]
    fn encode_bytes_passes_through_any_format() {
        let raw = Bytes::from_static(&[1, 2, 3, 0, 4]);
        for code in [CF_TEXT, CF_UNICODETEXT, CF_DIB, 0xC123] {
            let out = encode_format(code, raw.clone()).unwrap();
            assert_eq!(out, raw);
        }
    }

    #[test]
    fn encode_text_for_other_format_is_unsupported() {
        let err = encode_format(CF_UNICODETEXT, "abc").unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedFormat(13)));

        let err = encode_format(CF_BITMAP, String::from("abc")).unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedFormat(2)));
    }

    #[test]
    fn decode_unicode_text_strips_from_first_nul() {
        let value = decode_format(CF_UNICODETEXT, Bytes::from_static(b"abc\0pad"));
        assert_eq!(value, FormatValue::Text("abc".to_string()));
    }

    #[test]
    fn decode_unicode_text_without_nul() {
        let value = decode_format(CF_UNICODETEXT, "grüße".as_bytes().to_vec());
        assert_eq!(value.as_text(), Some("grüße"));
    }

    #[test]
    fn decode_text_uses_legacy_code_page() {
        // "你好" in GBK.
        let value = decode_format(CF_TEXT, vec![0xC4, 0xE3, 0xBA, 0xC3]);
        assert_eq!(value.as_text(), Some("你好"));
    }

    #[test]
    fn decode_text_keeps_terminator_by_default() {
        let value = decode_format(CF_TEXT, Bytes::from_static(b"ok\0"));
        assert_eq!(value.as_text(), Some("ok\0"));
    }

    #[test]
    fn decode_text_trims_when_configured() {
        let codec = FormatCodec::with_config(FormatConfig {
            trim_text_terminator: true,
            ..FormatConfig::default()
        });
        let value = codec.decode(CF_TEXT, Bytes::from_static(b"ok\0junk"));
        assert_eq!(value.as_text(), Some("ok"));
    }

    #[test]
    fn decode_text_with_alternate_code_page() {
        let codec = FormatCodec::with_config(FormatConfig {
            legacy_encoding: SHIFT_JIS,
            ..FormatConfig::default()
        });
        // "日本" in Shift_JIS.
        let value = codec.decode(CF_TEXT, vec![0x93, 0xFA, 0x96, 0x7B]);
        assert_eq!(value.as_text(), Some("日本"));
        assert_eq!(codec.config().legacy_encoding, SHIFT_JIS);
    }

    #[test]
    fn config_from_encoding_label() {
        let config = FormatConfig::default().with_legacy_label("Shift_JIS").unwrap();
        assert_eq!(config.legacy_encoding, SHIFT_JIS);
        assert!(!config.trim_text_terminator);

        assert!(FormatConfig::default().with_legacy_label("no-such-code-page").is_none());
    }

    #[test]
    fn decode_unknown_format_passes_through() {
        let raw = Bytes::from_static(&[0xFF, 0x00, 0x10]);
        let value = decode_format(0xC123, raw.clone());
        assert_eq!(value.as_bytes(), Some(&raw));
    }

    #[test]
    fn ascii_text_roundtrips_through_text_format() {
        let encoded = encode_format(CF_TEXT, "plain ascii").unwrap();
        let codec = FormatCodec::with_config(FormatConfig {
            trim_text_terminator: true,
            ..FormatConfig::default()
        });
        assert_eq!(codec.decode(CF_TEXT, encoded).as_text(), Some("plain ascii"));
    }
}

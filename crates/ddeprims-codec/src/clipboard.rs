//! Standard clipboard format IDs.
//!
//! Formats 1-17 are predefined by the platform and fixed on the wire.
//! Formats 0xC000-0xFFFF are registered at runtime by name.

/// Single-byte text in the legacy code page, NUL-terminated.
pub const CF_TEXT: u32 = 1;
pub const CF_BITMAP: u32 = 2;
pub const CF_METAFILEPICT: u32 = 3;
/// Symbolic link format.
pub const CF_SYLK: u32 = 4;
/// Data interchange format.
pub const CF_DIF: u32 = 5;
pub const CF_TIFF: u32 = 6;
/// Text in the OEM code page.
pub const CF_OEMTEXT: u32 = 7;
pub const CF_DIB: u32 = 8;
pub const CF_PALETTE: u32 = 9;
pub const CF_PENDATA: u32 = 10;
pub const CF_RIFF: u32 = 11;
pub const CF_WAVE: u32 = 12;
/// Wide text. Peers on the bridge send it as UTF-8, NUL-padded.
pub const CF_UNICODETEXT: u32 = 13;
pub const CF_ENHMETAFILE: u32 = 14;
pub const CF_HDROP: u32 = 15;
pub const CF_LOCALE: u32 = 16;
pub const CF_DIBV5: u32 = 17;

/// First runtime-registered format ID.
pub const REGISTERED_FORMAT_START: u32 = 0xC000;
/// Last runtime-registered format ID.
pub const REGISTERED_FORMAT_END: u32 = 0xFFFF;

/// All predefined formats, in ID order.
pub const STANDARD_FORMATS: [u32; 17] = [
    CF_TEXT,
    CF_BITMAP,
    CF_METAFILEPICT,
    CF_SYLK,
    CF_DIF,
    CF_TIFF,
    CF_OEMTEXT,
    CF_DIB,
    CF_PALETTE,
    CF_PENDATA,
    CF_RIFF,
    CF_WAVE,
    CF_UNICODETEXT,
    CF_ENHMETAFILE,
    CF_HDROP,
    CF_LOCALE,
    CF_DIBV5,
];

/// Returns a human-readable name for a format ID.
pub fn format_name(code: u32) -> &'static str {
    match code {
        CF_TEXT => "CF_TEXT",
        CF_BITMAP => "CF_BITMAP",
        CF_METAFILEPICT => "CF_METAFILEPICT",
        CF_SYLK => "CF_SYLK",
        CF_DIF => "CF_DIF",
        CF_TIFF => "CF_TIFF",
        CF_OEMTEXT => "CF_OEMTEXT",
        CF_DIB => "CF_DIB",
        CF_PALETTE => "CF_PALETTE",
        CF_PENDATA => "CF_PENDATA",
        CF_RIFF => "CF_RIFF",
        CF_WAVE => "CF_WAVE",
        CF_UNICODETEXT => "CF_UNICODETEXT",
        CF_ENHMETAFILE => "CF_ENHMETAFILE",
        CF_HDROP => "CF_HDROP",
        CF_LOCALE => "CF_LOCALE",
        CF_DIBV5 => "CF_DIBV5",
        REGISTERED_FORMAT_START..=REGISTERED_FORMAT_END => "REGISTERED",
        _ => "UNKNOWN",
    }
}

/// Looks up a predefined format by name, with or without the `CF_` prefix.
pub fn format_by_name(name: &str) -> Option<u32> {
    let upper = name.trim().to_ascii_uppercase();
    let wanted = if upper.starts_with("CF_") {
        upper
    } else {
        format!("CF_{upper}")
    };
    STANDARD_FORMATS
        .iter()
        .copied()
        .find(|&code| format_name(code) == wanted)
}

/// Returns true if the format ID is predefined.
pub fn is_standard(code: u32) -> bool {
    (CF_TEXT..=CF_DIBV5).contains(&code)
}

/// Returns true if the format ID is in the runtime-registered range.
pub fn is_registered(code: u32) -> bool {
    (REGISTERED_FORMAT_START..=REGISTERED_FORMAT_END).contains(&code)
}

pub mod decode;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::codes::{CoreCode, PrecompiledCode};
use crate::error::Error;

/// Message for a transaction execution-result code.
///
/// Codes outside the core table render as their decimal value.
pub fn resolve_known_message(code: i64) -> String {
    match CoreCode::from_code(code) {
        Some(known) => known.message().to_string(),
        None => code.to_string(),
    }
}

/// Render a precompiled or permission result code as a JSON string literal
/// `"<code> <message>"`.
///
/// Only the RC3 and revision-independent tables are consulted. Anything else,
/// including the RC1/RC2 spelling of the same error, renders with an empty
/// message (`"80 "`); callers rely on that exact output.
pub fn translate(code: i64) -> Result<String, Error> {
    let message = match PrecompiledCode::resolve(code) {
        Some(known) => known.message(),
        None => {
            tracing::trace!(code, "no precompiled message registered");
            ""
        }
    };
    render_envelope(code, message)
}

fn render_envelope(code: i64, message: &str) -> Result<String, Error> {
    let text = format!("{code} {message}");
    let mut out = Vec::with_capacity(text.len() + 2);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    text.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|e| Error::Encoding(serde::ser::Error::custom(e)))
}

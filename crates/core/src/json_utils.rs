//! JSON rendering shared by the HTTP handlers and the CLI.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize with one element per line and no indentation.
///
/// `["hi", "there"]` renders as `[\n"hi",\n"there"\n]`; empty arrays and
/// objects render as `[]` and `{}`.
pub fn to_flat_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b""));
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

//! Percent-encoding of predicate values

/// Field carrying strand orientation (`+` / `-`).
pub const STRAND_FIELD: &str = "strand";

/// Percent-encode a predicate value for `field`.
///
/// A bare `+` or `-` on the strand field is quoted first (`"+"`), since the
/// service reads unquoted `+`/`-` as operators. No other value is quoted.
pub fn encode_value(field: &str, value: &str) -> String {
    if field == STRAND_FIELD && matches!(value, "+" | "-") {
        urlencoding::encode(&format!("\"{}\"", value)).into_owned()
    } else {
        urlencoding::encode(value).into_owned()
    }
}

/// Coerces a feed-decorated numeric string (`"3.2%"`, `"1,200"`) to a value.
///
/// Strips everything that is not an ASCII digit, decimal point or minus
/// sign, then reads the remainder as one decimal number. Total: any
/// unparseable input becomes 0, so a result of 0 means either a true zero
/// or an unparseable field (`"N/A"`, empty). Use [`try_parse_value`] when
/// that difference matters.
pub fn parse_value(input: &str) -> f64 {
    try_parse_value(input).unwrap_or(0.0)
}

/// Like [`parse_value`] but keeps "unparseable" distinct from zero.
pub fn try_parse_value(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse().ok()
}

/// Classify one input line.
///
/// Surrounding whitespace (including a trailing `\r`) is stripped first.
/// `Ok` carries a finite number; `Err` carries the stripped text verbatim so
/// it can be reported as malformed.
pub fn parse_line(line: &str) -> Result<f64, String> {
    let trimmed = line.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(trimmed.to_string()),
    }
}

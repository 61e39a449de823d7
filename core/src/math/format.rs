/// Renders `value` with exactly `decimals` digits after the point.
///
/// Negative zero is printed as plain zero so rendered reports never show
/// `-0.00`.
pub fn fixed(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value);
    if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
        rendered[1..].to_string()
    } else {
        rendered
    }
}

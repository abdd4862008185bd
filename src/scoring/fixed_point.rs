/// Formats a number with exactly two decimal digits.
///
/// Exact ties at the third decimal round half away from zero, as `Number.toFixed`
/// does; every other value uses the closest two-decimal rendering. Negative zero
/// is printed as `0.00`. Non-finite values are printed as `NaN`, `inf` or `-inf`.
///
/// # Arguments
///
/// * `value` - The number to format.
///
/// # Returns
///
/// The formatted string, matching `-?\d+\.\d{2}` for finite input.
pub fn to_fixed_2(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_owned();
    }

    let rounded = if is_two_decimal_tie(value) {
        (value * 100.0).round() / 100.0
    } else {
        value
    };
    format!("{:.2}", rounded)
}

/// A binary float sits exactly halfway between two hundredths only when it is an odd
/// multiple of 1/8.
fn is_two_decimal_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.is_finite() && eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0
}

/// Format a resolved value as canonical decimal text.
///
/// Integral values keep a trailing `.0` (`100` -> `"100.0"`). Magnitudes
/// outside `[1e-3, 1e7)` switch to `E` notation (`1.0E7`, `2.5E-4`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        if n.is_sign_negative() { "-0.0" } else { "0.0" }.to_string()
    } else if (1e-3..1e7).contains(&n.abs()) {
        let mut s = n.to_string();
        if !s.contains('.') {
            s.push_str(".0");
        }
        s
    } else {
        let s = format!("{:e}", n);
        match s.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{}E{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
            None => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn test_format_number_keeps_fraction() {
        assert_eq!(format_number(1.0), "1.0");
        assert_eq!(format_number(2.99), "2.99");
        assert_eq!(format_number(100.0), "100.0");
        assert_eq!(format_number(-11.1), "-11.1");
        assert_eq!(format_number(0.001), "0.001");
    }

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_format_number_scientific() {
        assert_eq!(format_number(1e7), "1.0E7");
        assert_eq!(format_number(12345678.0), "1.2345678E7");
        assert_eq!(format_number(0.00025), "2.5E-4");
        assert_eq!(format_number(-3e10), "-3.0E10");
    }
}

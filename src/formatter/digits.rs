/// Render a non-negative value with exactly `decimals` fractional digits
///
/// Rounds half up on the shortest decimal representation of the value, so
/// `1.005` becomes `1.01` even though its binary value is slightly below it.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let text = value.to_string();
    let (integer_part, fraction_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let decimals = decimals as usize;

    let mut digits: Vec<u8> = integer_part.bytes().collect();
    digits.extend(
        fraction_part
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(decimals),
    );
    let integer_len = integer_part.len();

    let round_up = fraction_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5');
    let mut carried = false;
    if round_up {
        carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
    }

    let mut result = String::with_capacity(digits.len() + 2);
    if carried {
        result.push('1');
    }
    for (idx, digit) in digits.iter().enumerate() {
        if idx == integer_len {
            result.push('.');
        }
        result.push(char::from(*digit));
    }
    result
}

/// Whether a rendered number has no non-zero digit
pub(crate) fn is_zero(digits: &str) -> bool {
    digits.bytes().all(|b| !b.is_ascii_digit() || b == b'0')
}

/// Insert `separator` every three digits, counting from the right
///
/// `digits` must be plain ASCII digits.
pub fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let head = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    let groups = digits.len() / 3;
    let mut result = String::with_capacity(digits.len() + groups * separator.len());
    result.push_str(&digits[..head]);

    let mut idx = head;
    while idx < digits.len() {
        result.push_str(separator);
        result.push_str(&digits[idx..idx + 3]);
        idx += 3;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567", ","), "1,234,567");
        assert_eq!(group_thousands("123456", " "), "123 456");
        assert_eq!(group_thousands("999", ","), "999");
        assert_eq!(group_thousands("1000", "'"), "1'000");
        assert_eq!(group_thousands("1234", ""), "1234");
        assert_eq!(group_thousands("12345", ".-"), "12.-345");
    }

    #[test]
    fn test_to_fixed_rounding() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(1.994, 2), "1.99");
        assert_eq!(to_fixed(9.9999, 3), "10.000");
        assert_eq!(to_fixed(5.0, 2), "5.00");
    }

    #[test]
    fn test_to_fixed_rounds_decimal_halves_up() {
        assert_eq!(to_fixed(1.005, 2), "1.01");
        assert_eq!(to_fixed(2.675, 2), "2.68");
        assert_eq!(to_fixed(1.045, 2), "1.05");
        assert_eq!(to_fixed(0.0049, 2), "0.00");
        assert_eq!(to_fixed(0.005, 2), "0.01");
        assert_eq!(to_fixed(999.5, 0), "1000");
    }

    #[test]
    fn test_to_fixed_huge_value() {
        let text = to_fixed(1e21, 2);
        assert_eq!(text, format!("1{}.00", "0".repeat(21)));
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero("0.000"));
        assert!(is_zero("0"));
        assert!(!is_zero("0.001"));
    }
}

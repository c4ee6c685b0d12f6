//! Luhn checksum validation for identification numbers such as payment card
//! numbers. Spaces and hyphens are accepted as formatting and ignored.

/// Returns true when `number` passes the Luhn check. Inputs containing
/// characters other than ASCII digits, spaces, and hyphens are invalid, as is
/// an input with no digits at all.
pub fn is_valid(number: &str) -> bool {
    match digits(number) {
        Some(digits) => checksum(&digits) == 0,
        None => false,
    }
}

/// Computes the digit that, appended to `partial`, makes it pass
/// [`is_valid`]. Returns `None` for inputs [`is_valid`] would reject outright.
pub fn check_digit(partial: &str) -> Option<u32> {
    let mut digits = digits(partial)?;
    digits.push(0);
    Some((10 - checksum(&digits)) % 10)
}

fn digits(number: &str) -> Option<Vec<u32>> {
    let mut digits = Vec::new();
    for c in number.chars() {
        match c {
            '0'..='9' => digits.push(c as u32 - '0' as u32),
            ' ' | '-' => {}
            _ => return None,
        }
    }

    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

fn checksum(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, &digit)| {
            if idx % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(is_valid("79927398713"));
        assert!(is_valid("4539148803436467"));
        assert!(is_valid("4539 1488 0343 6467"));
        assert!(is_valid("6011-0009-9013-9424"));
        assert!(is_valid("0"));
    }

    #[test]
    fn rejects_altered_digits() {
        assert!(!is_valid("79927398710"));
        assert!(!is_valid("79927398714"));
        assert!(!is_valid("4539148803436468"));
    }

    #[test]
    fn rejects_inputs_without_any_digit() {
        assert!(!is_valid(""));
        assert!(!is_valid(" - "));
    }

    #[test]
    fn rejects_non_digit_characters() {
        assert!(!is_valid("7992739871x"));
        assert!(!is_valid("4539.1488"));
    }

    #[test]
    fn computes_check_digit() {
        assert_eq!(check_digit("7992739871"), Some(3));
        assert_eq!(check_digit("x"), None);
        assert_eq!(check_digit(""), None);
    }

    #[test]
    fn appended_check_digit_validates() {
        for partial in &["7992739871", "453914880343646", "1234 5678"] {
            let digit = check_digit(partial).expect("digit-only input");
            assert!(is_valid(&format!("{}{}", partial, digit)));
        }
    }
}

//! Small string helpers. All operations count characters, not bytes, so they
//! are safe on multi-byte UTF-8 input.

/// The first `n` characters of `s`, or all of `s` when it is shorter.
pub fn left(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The last `n` characters of `s`, or all of `s` when it is shorter.
pub fn right(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if n >= count {
        return s;
    }

    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Replaces every ASCII digit except the last `keep` digits with `mask`.
/// Non-digit characters are left in place, so formatted card numbers keep
/// their grouping.
pub fn mask_digits_except_last(s: &str, keep: usize, mask: char) -> String {
    let digit_count = s.chars().filter(char::is_ascii_digit).count();
    let to_mask = digit_count.saturating_sub(keep);

    let mut masked = 0;
    s.chars()
        .map(|c| {
            if c.is_ascii_digit() && masked < to_mask {
                masked += 1;
                mask
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn left_takes_a_character_prefix() {
        assert_eq!(left("hello", 2), "he");
        assert_eq!(left("héllo", 2), "hé");
        assert_eq!(left("hi", 10), "hi");
        assert_eq!(left("hi", 0), "");
    }

    #[test]
    fn right_takes_a_character_suffix() {
        assert_eq!(right("hello", 2), "lo");
        assert_eq!(right("hellö", 2), "lö");
        assert_eq!(right("hi", 10), "hi");
        assert_eq!(right("hi", 0), "");
    }

    #[test]
    fn masking_keeps_formatting_and_trailing_digits() {
        assert_eq!(
            mask_digits_except_last("4539 1488 0343 6467", 4, '*'),
            "**** **** **** 6467"
        );
        assert_eq!(mask_digits_except_last("123", 4, '*'), "123");
        assert_eq!(mask_digits_except_last("no digits", 2, '*'), "no digits");
    }
}

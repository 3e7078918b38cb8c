//! src/cipher/shift.rs
//! Alphabet rotation shared by the ciphers.

use crate::consts::ALPHABET_LEN;

/// Rotates an ASCII letter forward by `shift` places, keeping its case.
///
/// Negative shifts rotate backwards. Any other character is returned as is.
#[inline]
pub fn rotate(c: char, shift: i32) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    let offset = (c as u8 - base) as i32;
    let rotated = (offset + shift).rem_euclid(ALPHABET_LEN as i32) as u8;
    (base + rotated) as char
}

/// Position of an ASCII letter in the alphabet (`A`/`a` = 0).
#[inline]
pub(crate) fn letter_index(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_wraps_both_directions() {
        assert_eq!(rotate('Z', 1), 'A');
        assert_eq!(rotate('a', -1), 'z');
        assert_eq!(rotate('m', 26 * 4 + 3), 'p');
        assert_eq!(rotate('M', -26 * 3 - 3), 'J');
    }

    #[test]
    fn rotate_ignores_non_letters() {
        for c in [' ', '7', '!', '\n', 'é'] {
            assert_eq!(rotate(c, 5), c);
        }
    }

    #[test]
    fn letter_index_is_case_insensitive() {
        assert_eq!(letter_index('C'), Some(2));
        assert_eq!(letter_index('c'), Some(2));
        assert_eq!(letter_index('-'), None);
    }
}

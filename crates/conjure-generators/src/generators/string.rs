//! Strings drawn from an alphabet.

use crate::generators::numeric::{between, Between};
use crate::generators::one_of::{one_of, OneOf};
use conjure_core::{Generator, GeneratorError, Source};

/// Generates strings whose characters are drawn independently from an
/// alphabet.
#[derive(Debug, Clone)]
pub struct StringFrom {
    lengths: Between<usize>,
    /// `None` only when the alphabet is empty and every length is zero.
    chars: Option<OneOf<char>>,
}

impl Generator for StringFrom {
    type Output = String;

    fn generate_one(&mut self, src: &mut Source) -> String {
        let len = self.lengths.generate_one(src);
        match &mut self.chars {
            Some(chars) => (0..len).map(|_| chars.generate_one(src)).collect(),
            None => String::new(),
        }
    }
}

/// Generator of strings over `alphabet` whose length in characters lies in
/// `[min(min_len, max_len), max(min_len, max_len)]`.
///
/// An empty alphabet is only accepted when both lengths are zero.
pub fn string_from(
    alphabet: &str,
    min_len: usize,
    max_len: usize,
) -> Result<StringFrom, GeneratorError> {
    let lengths = between(min_len, max_len);
    let chars = match one_of(alphabet.chars()) {
        Ok(chars) => Some(chars),
        Err(_) if min_len.max(max_len) == 0 => None,
        Err(_) => {
            return Err(GeneratorError::EmptyDomain {
                what: "string_from alphabet",
            })
        }
    };

    Ok(StringFrom { lengths, chars })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_from_respects_alphabet_and_length() {
        let mut src = Source::seeded(42);
        let mut generator = string_from("abc", 8, 2).unwrap();

        for value in generator.generate_many(&mut src, 100) {
            let len = value.chars().count();
            assert!((2..=8).contains(&len));
            assert!(value.chars().all(|c| "abc".contains(c)));
        }
    }

    #[test]
    fn test_string_from_counts_characters() {
        let mut src = Source::seeded(42);
        let mut generator = string_from("äöü", 4, 4).unwrap();

        for value in generator.generate_many(&mut src, 20) {
            assert_eq!(value.chars().count(), 4);
        }
    }

    #[test]
    fn test_string_from_single_letter_alphabet() {
        let mut src = Source::seeded(42);
        let mut generator = string_from("z", 3, 3).unwrap();

        assert_eq!(generator.generate_one(&mut src), "zzz");
    }

    #[test]
    fn test_string_from_empty_alphabet() {
        let mut src = Source::seeded(42);

        assert!(matches!(
            string_from("", 0, 5),
            Err(GeneratorError::EmptyDomain { .. })
        ));
        assert_eq!(
            string_from("", 0, 0).unwrap().generate_one(&mut src),
            ""
        );
    }
}

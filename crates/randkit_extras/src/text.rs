//! Random strings and placeholder text.

use rand::{Rng, RngCore};
use randkit_core::{RandomError, RandomGenerator};

use crate::error::Result;

/// Default character set: digits, then upper- and lower-case ASCII letters.
pub const ASCII_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Exclusive upper bound of the code points used by [`unicode_string`].
pub const UNICODE_LIMIT: char = '\u{D7FF}';

/// Placeholder words for [`text_content`].
pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consetetur", "sadipscing", "elitr", "sed",
    "diam", "nonumy", "eirmod", "tempor", "invidunt", "ut", "labore", "et", "dolore", "magna",
    "aliquyam", "erat", "voluptua", "at", "vero", "eos", "accusam", "justo", "duo", "dolores",
    "ea", "rebum", "stet", "clita", "kasd", "gubergren", "no", "sea", "takimata", "sanctus",
    "est", "duis", "autem", "vel", "eum", "iriure", "in", "hendrerit", "vulputate", "velit",
    "esse", "molestie", "consequat", "illum", "eu", "feugiat", "nulla", "facilisis", "eros",
    "accumsan", "iusto", "odio", "dignissim", "qui", "blandit", "praesent", "luptatum",
    "zzril", "delenit", "augue", "te", "feugait", "facilisi", "nam", "liber", "cum", "soluta",
    "nobis", "eleifend", "option", "congue", "nihil", "imperdiet", "doming", "id", "quod",
    "mazim", "placerat", "facer", "possim", "assum", "consectetuer", "adipiscing", "elit",
    "nonummy", "nibh", "euismod", "tincidunt", "laoreet", "aliquam", "volutpat", "wisi",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exerci", "tation", "ullamcorper",
    "suscipit", "lobortis", "nisl", "aliquip", "ex", "commodo",
];

/// Longest word [`sentence`] emits before its final word.
const SENTENCE_WORD_MAX: i32 = 6;

/// String of `len` characters from [`ASCII_ALPHABET`].
pub fn string<R: RngCore>(rng: &mut RandomGenerator<R>, len: usize) -> String {
    let alphabet = ASCII_ALPHABET.as_bytes();
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

/// String of `len` characters drawn uniformly from `charset`.
///
/// # Errors
///
/// Returns `InvalidArgument` when `charset` is empty and `len > 0`.
pub fn string_from<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    len: usize,
    charset: &str,
) -> Result<String> {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() && len > 0 {
        return Err(RandomError::InvalidArgument("character set is empty".into()).into());
    }
    Ok((0..len)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

/// ASCII string whose length is drawn from `[min_len, max_len]`.
///
/// # Errors
///
/// Returns `InvalidRange` when `max_len < min_len`.
pub fn string_between<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    min_len: u16,
    max_len: u16,
) -> Result<String> {
    let len = rng.int_inclusive(min_len.into(), max_len.into())?;
    Ok(string(rng, len as usize))
}

/// Placeholder sentence of exactly `len` characters.
///
/// Words of one to six ASCII characters are separated by single spaces; the
/// last word fills the remaining width and is followed by a full stop.
///
/// # Errors
///
/// Returns `InvalidArgument` when `len < 2`: the shortest sentence is one
/// character and a full stop.
pub fn sentence<R: RngCore>(rng: &mut RandomGenerator<R>, len: usize) -> Result<String> {
    if len < 2 {
        return Err(RandomError::InvalidArgument(format!(
            "sentence length must be at least 2, got {}",
            len
        ))
        .into());
    }

    let mut out = String::with_capacity(len);
    let mut remaining = len;
    while remaining > 10 {
        let word = rng.int_inclusive(1, SENTENCE_WORD_MAX)? as usize;
        out.push_str(&string(rng, word));
        out.push(' ');
        remaining -= word + 1;
    }
    out.push_str(&string(rng, remaining - 1));
    out.push('.');
    Ok(out)
}

/// `word_count` words picked from `words`, space-separated, ending in a full stop.
///
/// # Errors
///
/// Returns `InvalidArgument` when `word_count` is zero or `words` is empty.
pub fn text_content<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    word_count: usize,
    words: &[&str],
) -> Result<String> {
    if word_count == 0 {
        return Err(RandomError::InvalidArgument("word count must be at least 1".into()).into());
    }
    if words.is_empty() {
        return Err(RandomError::InvalidArgument("word list is empty".into()).into());
    }
    let picked: Vec<&str> = (0..word_count)
        .map(|_| words[rng.gen_range(0..words.len())])
        .collect();
    Ok(format!("{}.", picked.join(" ")))
}

/// String of `len` characters with code points in `[U+0000, U+D7FF)`.
pub fn unicode_string<R: RngCore>(rng: &mut RandomGenerator<R>, len: usize) -> Result<String> {
    (0..len)
        .map(|_| rng.char_range('\0', UNICODE_LIMIT).map_err(Into::into))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtrasError;
    use proptest::prelude::*;

    #[test]
    fn test_string_uses_alphabet() {
        let mut rng = RandomGenerator::seeded(1);
        let s = string(&mut rng, 200);
        assert_eq!(s.len(), 200);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(string(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_string_from_charset() {
        let mut rng = RandomGenerator::seeded(2);
        let s = string_from(&mut rng, 100, "ab").unwrap();
        assert!(s.chars().all(|c| c == 'a' || c == 'b'));
        assert!(s.contains('a') && s.contains('b'));

        let greek = string_from(&mut rng, 10, "αβγ").unwrap();
        assert_eq!(greek.chars().count(), 10);

        assert!(matches!(
            string_from(&mut rng, 3, ""),
            Err(ExtrasError::Random(RandomError::InvalidArgument(_)))
        ));
        assert_eq!(string_from(&mut rng, 0, "").unwrap(), "");
    }

    #[test]
    fn test_string_between() {
        let mut rng = RandomGenerator::seeded(3);
        let mut lengths = std::collections::BTreeSet::new();
        for _ in 0..500 {
            lengths.insert(string_between(&mut rng, 2, 5).unwrap().len());
        }
        assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert!(string_between(&mut rng, 5, 2).is_err());
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = RandomGenerator::seeded(4);
        let s = sentence(&mut rng, 60).unwrap();
        assert_eq!(s.len(), 60);
        assert!(s.ends_with('.'));
        assert!(!s.contains("  "));
        assert!(s.split(' ').all(|w| !w.is_empty() && w.len() <= 11));

        assert_eq!(sentence(&mut rng, 2).unwrap().len(), 2);
        assert!(sentence(&mut rng, 1).is_err());
    }

    #[test]
    fn test_text_content() {
        let mut rng = RandomGenerator::seeded(5);
        let text = text_content(&mut rng, 12, LOREM_WORDS).unwrap();
        let body = text.strip_suffix('.').unwrap();
        let words: Vec<&str> = body.split(' ').collect();
        assert_eq!(words.len(), 12);
        assert!(words.iter().all(|w| LOREM_WORDS.contains(w)));

        assert!(text_content(&mut rng, 0, LOREM_WORDS).is_err());
        assert!(text_content(&mut rng, 3, &[]).is_err());
    }

    #[test]
    fn test_unicode_string_range() {
        let mut rng = RandomGenerator::seeded(6);
        let s = unicode_string(&mut rng, 500).unwrap();
        assert_eq!(s.chars().count(), 500);
        assert!(s.chars().all(|c| c < UNICODE_LIMIT));
    }

    proptest! {
        #[test]
        fn prop_sentence_length_exact(seed in any::<u64>(), len in 2usize..400) {
            let mut rng = RandomGenerator::seeded(seed);
            let s = sentence(&mut rng, len).unwrap();
            prop_assert_eq!(s.len(), len);
            prop_assert!(s.ends_with('.'));
        }
    }
}

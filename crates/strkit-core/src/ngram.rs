//! N-gram extraction.
//!
//! N-grams are produced by `ngram_len` anchored scans. The scan anchored at
//! offset `k` cuts the input into consecutive, non-overlapping windows
//! starting at `k`, dropping any short tail. Results are grouped by anchor:
//! every window of the offset-0 scan, then every window of the offset-1
//! scan, and so on. Newlines are ordinary elements.

/// Extract character n-grams from a text, grouped by anchor offset.
///
/// ```
/// use strkit_core::extract_ngrams;
///
/// assert_eq!(extract_ngrams("abcde", 2), vec!["ab", "cd", "bc", "de"]);
/// ```
pub fn extract_ngrams(text: &str, ngram_len: usize) -> Vec<&str> {
    // Byte offset of every char start, plus the end of the text
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    anchored_windows(char_count, ngram_len)
        .map(|(start, end)| &text[boundaries[start]..boundaries[end]])
        .collect()
}

/// Extract byte n-grams from a byte sequence, grouped by anchor offset.
pub fn extract_byte_ngrams(bytes: &[u8], ngram_len: usize) -> Vec<&[u8]> {
    anchored_windows(bytes.len(), ngram_len)
        .map(|(start, end)| &bytes[start..end])
        .collect()
}

/// Element ranges `(start, end)` of every window of every anchored scan
/// over a sequence of `len` elements.
fn anchored_windows(len: usize, ngram_len: usize) -> impl Iterator<Item = (usize, usize)> {
    // Anchors at or past the end contribute no windows
    (0..ngram_len.min(len)).flat_map(move |offset| {
        let count = len.saturating_sub(offset) / ngram_len;
        (0..count).map(move |i| {
            let start = offset + i * ngram_len;
            (start, start + ngram_len)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ngrams_grouped_by_anchor() {
        assert_eq!(extract_ngrams("abcde", 2), vec!["ab", "cd", "bc", "de"]);
        assert_eq!(
            extract_ngrams("abcdef", 3),
            vec!["abc", "def", "bcd", "cde"]
        );
    }

    #[test]
    fn test_extract_ngrams_covers_every_window_once() {
        let text = "sliding window";
        for n in 1..=text.len() {
            let mut grams = extract_ngrams(text, n);
            let mut expected: Vec<&str> = (0..=text.len() - n).map(|i| &text[i..i + n]).collect();
            grams.sort_unstable();
            expected.sort_unstable();
            assert_eq!(grams, expected, "ngram_len = {}", n);
        }
    }

    #[test]
    fn test_extract_ngrams_boundaries() {
        assert!(extract_ngrams("", 2).is_empty());
        assert!(extract_ngrams("abc", 4).is_empty());
        assert!(extract_ngrams("abc", 0).is_empty());
        assert!(extract_ngrams("abc", usize::MAX).is_empty());
        assert!(extract_byte_ngrams(b"abc", usize::MAX).is_empty());
        assert_eq!(extract_ngrams("abc", 3), vec!["abc"]);
        assert_eq!(extract_ngrams("abc", 1), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extract_ngrams_includes_newlines() {
        assert_eq!(extract_ngrams("a\nb", 2), vec!["a\n", "\nb"]);
    }

    #[test]
    fn test_extract_ngrams_counts_chars() {
        assert_eq!(extract_ngrams("héé", 2), vec!["hé", "éé"]);
    }

    #[test]
    fn test_extract_byte_ngrams() {
        let grams = extract_byte_ngrams(b"abcde", 2);
        assert_eq!(grams, vec![&b"ab"[..], &b"cd"[..], &b"bc"[..], &b"de"[..]]);

        // Multi-byte chars are split into raw bytes
        assert_eq!(extract_byte_ngrams("é".as_bytes(), 1).len(), 2);
        assert!(extract_byte_ngrams(b"", 1).is_empty());
        assert!(extract_byte_ngrams(b"abc", 0).is_empty());
    }
}

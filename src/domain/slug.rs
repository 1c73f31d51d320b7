//! Mapping between facet display names and URL path segments.
//!
//! [`decode_facet`] is the designed inverse of [`encode_facet`], but it is
//! lossy for names that contain a hyphen: `"Lo-fi"` encodes to `"lo-fi"`
//! and decodes back to `"Lo Fi"`. Track slugs never go through this codec,
//! they are looked up verbatim.

use percent_encoding::percent_decode_str;

/// Lower-cases `name` and collapses every whitespace run into one hyphen.
pub fn encode_facet(name: &str) -> String {
    let mut segment = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                segment.push('-');
            }
            in_whitespace = true;
        } else {
            segment.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    segment
}

/// URL-decodes `segment`, splits it on hyphens, capitalizes the first letter
/// of every piece and joins the pieces with single spaces.
///
/// Invalid UTF-8 after percent-decoding is replaced, never rejected.
pub fn decode_facet(segment: &str) -> String {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();

    decoded
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_lowercases_and_hyphenates() {
        assert_eq!(encode_facet("Lo-fi"), "lo-fi");
        assert_eq!(encode_facet("Alternative"), "alternative");
        assert_eq!(encode_facet("Deep  \tHouse"), "deep-house");
        assert_eq!(encode_facet("Dream Pop Revival"), "dream-pop-revival");
        assert_eq!(encode_facet(""), "");
    }

    #[test]
    fn encode_is_deterministic() {
        for name in ["Lo-fi", "Rock", "Post Rock", "Ünïcode Name"] {
            assert_eq!(encode_facet(name), encode_facet(name));
        }
    }

    #[test]
    fn decode_capitalizes_pieces() {
        assert_eq!(decode_facet("chill"), "Chill");
        assert_eq!(decode_facet("lo-fi"), "Lo Fi");
        assert_eq!(decode_facet("post-rock"), "Post Rock");
        assert_eq!(decode_facet(""), "");
    }

    #[test]
    fn decode_url_decodes_first() {
        assert_eq!(decode_facet("%C3%A9lectro"), "Électro");
        assert_eq!(decode_facet("dream%20pop"), "Dream pop");
    }

    #[test]
    fn decode_keeps_rest_of_piece_untouched() {
        assert_eq!(decode_facet("mIxEd-CASE"), "MIxEd CASE");
    }

    #[test]
    fn round_trip_for_space_separated_words() {
        for name in ["Chill", "Rock", "Post Rock", "Dream Pop Revival"] {
            assert_eq!(decode_facet(&encode_facet(name)), name);
        }
    }

    #[test]
    fn round_trip_loses_internal_hyphen() {
        let name = "Lo-fi";
        let decoded = decode_facet(&encode_facet(name));
        assert_eq!(decoded, "Lo Fi");
        assert_ne!(decoded, name);
    }
}

//! Lossy transliteration into the Latin-1 range the PDF base fonts can show.

/// Smart punctuation and its plain-ASCII stand-in.
const REPLACEMENTS: [(char, &str); 7] = [
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{2026}', "..."), // ellipsis
];

/// Maps smart punctuation to ASCII, then silently drops anything above U+00FF.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None if (ch as u32) <= 0xFF => out.push(ch),
            None => {}
        }
    }
    out
}

/// Latin-1 bytes of already-sanitized text.
pub fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|ch| u8::try_from(ch as u32).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_punctuation_becomes_ascii() {
        let input = "Bold \u{2014} playful \u{2013} \u{201C}glow\u{201D} it\u{2019}s \u{2018}fun\u{2019}\u{2026}";
        assert_eq!(sanitize(input), "Bold - playful - \"glow\" it's 'fun'...");
    }

    #[test]
    fn test_non_latin1_is_dropped() {
        assert_eq!(sanitize("Launch day \u{1F680}\u{2728}!"), "Launch day !");
        assert_eq!(sanitize("\u{2192} Invoice"), " Invoice");
    }

    #[test]
    fn test_latin1_is_kept() {
        assert_eq!(sanitize("Café crème"), "Café crème");
        assert_eq!(to_latin1("Café"), vec![b'C', b'a', b'f', 0xE9]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }
}

//! URI tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Characters that separate URI segments.
const DELIMITERS: &[char] = &['\\', '/', ':', '=', '&', '?', '[', ']'];

/// A tokenizer for URIs and URI-like strings.
///
/// Percent-decodes the input, replaces each delimiter character
/// (`\ / : = & ? [ ]`) with a space, and splits on whitespace. A decoded
/// NUL byte is kept as its own token rather than replaced.
///
/// # Examples
///
/// ```
/// use pilum::analysis::tokenizer::uri::UriTokenizer;
/// use pilum::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = UriTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("one/two?three").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["one", "two", "three"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UriTokenizer;

impl UriTokenizer {
    /// Create a new URI tokenizer.
    pub fn new() -> Self {
        UriTokenizer
    }
}

impl Tokenizer for UriTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let decoded = percent_decode(text);

        let mut separated = String::with_capacity(decoded.len());
        for c in decoded.chars() {
            if DELIMITERS.contains(&c) {
                separated.push(' ');
            } else if c == '\0' {
                // NUL is a payload in its own right; isolate it instead of
                // dropping it.
                separated.push(' ');
                separated.push(c);
            } else {
                separated.push(c);
            }
        }

        let tokens: Vec<Token> = separated
            .split_whitespace()
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "uri"
    }
}

/// Decode `%XX` escapes. Malformed escapes pass through unchanged; decoded
/// bytes that do not form valid UTF-8 are replaced.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        UriTokenizer::new()
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_delimiter_split() {
        assert_eq!(
            texts("one/two?three/four&five"),
            vec!["one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn test_attack_path_split() {
        let tokens =
            texts("/get/a_life//malware/chodes.php?blah=1&blahblah[blech]=../../etc/passwd%00");

        let expected = [
            "get",
            "a_life",
            "malware",
            "chodes.php",
            "blah",
            "1",
            "blahblah",
            "blech",
            "..",
            "..",
            "etc",
            "passwd",
            "\0",
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("a%20b"), "a b");
        assert_eq!(percent_decode("%41%42"), "AB");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("passwd%00"), "passwd\0");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UriTokenizer::new().name(), "uri");
    }
}

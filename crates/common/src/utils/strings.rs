use eyre::{bail, Result};
use std::{fmt::Write, ops::Range};

/// Decodes a hex string into a vector of bytes. The `0x` prefix is optional.
///
/// ```
/// use viewcall_common::utils::strings::decode_hex;
///
/// let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    // normalize
    let s = s.trim();
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);

    if s.is_empty() {
        return Ok(vec![]);
    }

    if s.len() % 2 != 0 {
        bail!("invalid hex string: odd number of digits ({})", s.len());
    }
    if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        bail!("invalid hex string: unexpected character '{}'", c);
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| eyre::eyre!("invalid hex string: {}", s))
}

/// Encodes a vector of bytes into a hex string
///
/// ```
/// use viewcall_common::utils::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::with_capacity(s.len() * 2), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Encodes a vector of bytes into a `0x`-prefixed hex string
///
/// ```
/// use viewcall_common::utils::strings::encode_hex_prefixed;
///
/// assert_eq!(encode_hex_prefixed(&[0x1e, 0x4f, 0x42, 0x0d]), "0x1e4f420d");
/// assert_eq!(encode_hex_prefixed(&[]), "0x");
/// ```
pub fn encode_hex_prefixed(s: &[u8]) -> String {
    format!("0x{}", encode_hex(s))
}

/// Finds the first balanced encapsulator in a string, returning the byte range of its contents.
///
/// ```
/// use viewcall_common::utils::strings::find_balanced_encapsulator;
///
/// let s = "Hello (World)";
/// let result = find_balanced_encapsulator(s, ('(', ')')).expect("should find balanced encapsulator");
/// assert_eq!(result, (7..12));
/// // extract the condition
/// let condition = &s[result];
/// assert_eq!(condition, "World");
/// ```
pub fn find_balanced_encapsulator(s: &str, encap: (char, char)) -> Result<Range<usize>> {
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in s.char_indices() {
        if c == encap.0 {
            if depth == 0 && start.is_none() {
                start = Some(i);
            }
            depth += 1;
        } else if c == encap.1 {
            if depth == 0 {
                bail!("string '{}' closes {} before opening it.", s, encap.1);
            }
            depth -= 1;
            if depth == 0 {
                if let Some(start) = start {
                    return Ok(start + encap.0.len_utf8()..i);
                }
            }
        }
    }

    bail!("string '{}' doesn't contain balanced encapsulator {}{}.", s, encap.0, encap.1);
}

/// Removes one pair of matching surrounding quotes (`'` or `"`) from a string, if present.
///
/// ```
/// use viewcall_common::utils::strings::strip_quotes;
///
/// assert_eq!(strip_quotes("'f(uint256)'"), "f(uint256)");
/// assert_eq!(strip_quotes("\"f()\""), "f()");
/// assert_eq!(strip_quotes("'f()"), "'f()");
/// ```
pub fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

//! Helpers for feeding inputs to the aligner.

use std::fs;
use std::path::Path;

/// Unescape a delimiter string to handle escape sequences like \x00, \t, \n, etc.
///
/// Supported escape sequences:
/// - `\x00` - `\x7f`: hexadecimal values
/// - `\t`: tab
/// - `\n`: newline
/// - `\r`: carriage return
/// - `\\`: backslash
///
/// Anything else is kept literally.
///
/// # Examples
///
/// ```
/// use quickblast::util::unescape_delimiter;
///
/// assert_eq!(unescape_delimiter(r"\x00"), "\0");
/// assert_eq!(unescape_delimiter(r"\t"), "\t");
/// assert_eq!(unescape_delimiter(r"\n\n"), "\n\n");
/// assert_eq!(unescape_delimiter(r"\\"), "\\");
/// assert_eq!(unescape_delimiter(r"\q"), r"\q");
/// ```
pub fn unescape_delimiter(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 && byte.is_ascii() => result.push(char::from(byte)),
                    _ => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Reads an input file as text, replacing invalid UTF-8.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, crate::Error> {
    let bytes = fs::read(path.as_ref())?;
    debug!("read {} bytes from {}", bytes.len(), path.as_ref().display());
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

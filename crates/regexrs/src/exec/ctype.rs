// Byte classification for bracket expressions and word boundaries.
// Single-byte, ASCII semantics throughout.

use crate::pattern::CharClass;

/// The `name` class: what the word boundary markers consider a word
/// character.
#[inline(always)]
pub(crate) fn is_name(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Whitespace in the C locale sense, vertical tab included.
#[inline(always)]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[inline(always)]
fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

#[inline(always)]
fn is_print(byte: u8) -> bool {
    byte.is_ascii_graphic() || byte == b' '
}

/// Check one byte against a named class. Case-insensitive matching
/// widens `lower` and `upper` to their union; the other classes are
/// unaffected.
pub(crate) fn class_matches(class: CharClass, byte: u8, ignore_case: bool) -> bool {
    match class {
        CharClass::Alnum => byte.is_ascii_alphanumeric(),
        CharClass::Alpha => byte.is_ascii_alphabetic(),
        CharClass::Blank => is_blank(byte),
        CharClass::Cntrl => byte.is_ascii_control(),
        CharClass::Digit => byte.is_ascii_digit(),
        CharClass::Graph => byte.is_ascii_graphic(),
        CharClass::Lower => {
            byte.is_ascii_lowercase() || (ignore_case && byte.is_ascii_uppercase())
        }
        CharClass::Print => is_print(byte),
        CharClass::Punct => byte.is_ascii_punctuation(),
        CharClass::Space => is_space(byte),
        CharClass::Upper => {
            byte.is_ascii_uppercase() || (ignore_case && byte.is_ascii_lowercase())
        }
        CharClass::Xdigit => byte.is_ascii_hexdigit(),
        CharClass::Name => is_name(byte),
    }
}

//! Hexadecimal text for [`BigInt`].
//!
//! Parsing is lenient so that published group constants (RFC 5054 and
//! friends) can be pasted verbatim: case-insensitive, optional `0x`
//! prefix, ASCII whitespace anywhere, odd digit counts allowed.

use std::fmt::{self, Write as _};

use data_encoding::HEXLOWER_PERMISSIVE;
use zeroize::Zeroize;

use crate::bigint::BigInt;
use crate::error::MpError;

impl BigInt {
    /// Parse hexadecimal text with default [`Limits`](crate::Limits).
    ///
    /// # Errors
    ///
    /// Returns `MpError::InvalidHex` if the text is empty or contains a
    /// non-hex character, or `MpError::OutOfMemory` if storage cannot be
    /// allocated.
    pub fn from_hex(text: &str) -> Result<Self, MpError> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let mut nibbles: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if nibbles.is_empty() {
            return Err(MpError::InvalidHex("no hex digits".into()));
        }
        if nibbles.len() & 1 == 1 {
            nibbles.insert(0, '0');
        }

        let decoded = HEXLOWER_PERMISSIVE
            .decode(nibbles.as_bytes())
            .map_err(|e| MpError::InvalidHex(e.to_string()));
        nibbles.zeroize();

        let mut bytes = decoded?;
        let value = Self::from_bytes_be(&bytes);
        bytes.zeroize();
        value
    }

    /// Lowercase hex without prefix or leading zeros; `"0"` for zero.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    fn fmt_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        let mut text = String::new();
        match self.digits().split_last() {
            None => text.push('0'),
            Some((top, rest)) => {
                if upper {
                    write!(text, "{top:X}")?;
                } else {
                    write!(text, "{top:x}")?;
                }
                for digit in rest.iter().rev() {
                    if upper {
                        write!(text, "{digit:016X}")?;
                    } else {
                        write!(text, "{digit:016x}")?;
                    }
                }
            }
        }
        let result = f.pad_integral(true, "0x", &text);
        text.zeroize();
        result
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, false)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, true)
    }
}

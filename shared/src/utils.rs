//! # Address Utilities
//!
//! Helpers for showing and checking EVM account addresses (`0x` followed by
//! 40 hex digits).
//!
//! ```rust
//! use shared::utils::{is_hex_address, truncate_address};
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert!(is_hex_address(address));
//! assert_eq!(truncate_address(address), "0x5290...9EE7");
//! ```

/// Length of a `0x`-prefixed EVM address.
pub const HEX_ADDRESS_LEN: usize = 42;

/// Show the first `prefix_len` and last `suffix_len` characters of an address.
///
/// If the address is not longer than `prefix_len + suffix_len` it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 4, 4), "0x52...9EE7");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an address to `0x` plus four digits on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Whether `address` is `0x` followed by exactly 40 hex digits.
///
/// Mixed case is accepted; the EIP-55 checksum is not verified.
pub fn is_hex_address(address: &str) -> bool {
    address.len() == HEX_ADDRESS_LEN
        && address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "0x52...9EE7");
        assert_eq!(format_address(ADDR, 8, 6), "0x529084...169EE7");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xabc", 4, 4), "0xabc");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x5290...9EE7");
    }

    #[test]
    fn test_is_hex_address() {
        assert!(is_hex_address(ADDR));
        assert!(is_hex_address(&ADDR.to_lowercase()));
        assert!(!is_hex_address("52908400098527886E0F7030069857D2E4169EE7"));
        assert!(!is_hex_address("0x52908400098527886E0F7030069857D2E4169EE"));
        assert!(!is_hex_address("0xZ2908400098527886E0F7030069857D2E4169EE7"));
    }
}

//! # Shared Helpers
//!
//! Plain functions shared by the pension web app and its tooling. Nothing in
//! this crate touches the browser, so everything here is testable natively.
//!
//! - **[`utils`]**: account address helpers
//!   - **[`utils::format_address`]**: shorten an address for display
//!   - **[`utils::truncate_address`]**: `0x1234...abcd` style shortening
//!   - **[`utils::is_hex_address`]**: check an EVM account address

pub mod utils;

pub use utils::*;

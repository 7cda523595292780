//! Display formatting helpers.

use blockvote_types::Address;

/// Abbreviate an address for display: first six characters, an ellipsis,
/// and the last four (`0x8ba1…ba72`).
pub fn short_address(address: &Address) -> String {
    let s = address.as_str();
    format!("{}…{}", &s[..6], &s[s.len() - 4..])
}

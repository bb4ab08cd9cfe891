//! Map search links for customer addresses.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::DialogHost;

const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Placeholder the report forms store when no address was entered.
const UNSET_ADDRESS: &str = "未設定";

/// Why an address cannot be shown on a map. The messages are shown to the
/// user as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    #[error("住所が設定されていません。")]
    Missing,

    #[error("有効な住所が設定されていません。")]
    Invalid,
}

fn postal_mark() -> &'static Regex {
    static POSTAL_REGEX: OnceLock<Regex> = OnceLock::new();
    POSTAL_REGEX
        .get_or_init(|| Regex::new(r"^〒[0-9]{3}-?[0-9]{4}\s*").expect("postal regex should compile"))
}

/// Build the map search URL for `address`.
///
/// A leading postal mark such as `〒123-4567` is dropped before searching.
pub fn map_search_url(address: &str) -> Result<String, AddressError> {
    let trimmed = address.trim();
    if trimmed.is_empty() || trimmed == UNSET_ADDRESS {
        return Err(AddressError::Missing);
    }

    let cleaned = postal_mark().replace(address, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(AddressError::Invalid);
    }

    Ok(format!("{}{}", MAP_SEARCH_BASE, encode_uri_component(cleaned)))
}

/// Percent-encode like `encodeURIComponent`, which leaves `!*'()` alone.
pub fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%2A", "*")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
}

/// Open a map search for `address` in a new window, or tell the user why
/// that is not possible.
pub fn show_map_for_address(dialogs: &mut dyn DialogHost, address: &str) {
    match map_search_url(address) {
        Ok(url) => {
            log::debug!("Opening map for {:?}", address);
            dialogs.open_window(&url, "_blank", "noopener,noreferrer");
        }
        Err(e) => {
            log::warn!("Cannot show map for {:?}: {}", address, e);
            dialogs.alert(&e.to_string());
        }
    }
}

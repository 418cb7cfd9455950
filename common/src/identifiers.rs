//! Asset identifiers.
//!
//! Callers address every asset with one opaque 20-byte identifier. Internally
//! an identifier is classified into a [`Asset`]: either an external token, or
//! a synthetic fiat currency whose address is its ISO-4217 numeric code.

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AssetParseError;

/// Smallest numeric value reserved for synthetic fiat identifiers.
pub const ISO_CODE_MIN: u16 = 1;

/// Largest numeric value reserved for synthetic fiat identifiers.
pub const ISO_CODE_MAX: u16 = 999;

/// Well-known ISO-4217 numeric codes and their alphabetic names.
const KNOWN_CODES: &[(u16, &str)] = &[
    (840, "USD"),
    (978, "EUR"),
    (392, "JPY"),
    (826, "GBP"),
    (756, "CHF"),
    (124, "CAD"),
    (36, "AUD"),
    (554, "NZD"),
    (156, "CNY"),
    (959, "XAU"),
    (961, "XAG"),
];

/// An ISO-4217 numeric currency code in the synthetic range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoCode(u16);

impl IsoCode {
    /// Create a code, returning `None` outside `1..=999`.
    pub fn new(code: u32) -> Option<Self> {
        if (ISO_CODE_MIN as u32..=ISO_CODE_MAX as u32).contains(&code) {
            Some(Self(code as u16))
        } else {
            None
        }
    }

    /// Look up a code by its alphabetic name (case-insensitive).
    pub fn from_alpha(alpha: &str) -> Option<Self> {
        KNOWN_CODES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(alpha))
            .map(|(code, _)| Self(*code))
    }

    /// Get the numeric code.
    pub fn numeric(&self) -> u16 {
        self.0
    }

    /// Get the alphabetic name, if this is a well-known code.
    pub fn alpha(&self) -> Option<&'static str> {
        KNOWN_CODES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "ISO-{}", self.0),
        }
    }
}

/// Opaque asset identifier, as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(Address);

impl AssetId {
    /// Create from an address.
    pub fn new(address: Address) -> Self {
        Self(address)
    }

    /// Get the underlying address.
    pub fn address(&self) -> Address {
        self.0
    }

    /// Classify this identifier.
    pub fn classify(&self) -> Asset {
        Asset::classify(*self)
    }

    /// Whether this identifier is a synthetic fiat currency.
    pub fn is_synthetic(&self) -> bool {
        matches!(self.classify(), Asset::SyntheticFiat(_))
    }

    /// Common synthetic currencies
    pub fn usd() -> Self {
        Self::from(IsoCode(840))
    }

    pub fn eur() -> Self {
        Self::from(IsoCode(978))
    }

    pub fn gbp() -> Self {
        Self::from(IsoCode(826))
    }

    pub fn jpy() -> Self {
        Self::from(IsoCode(392))
    }

    pub fn chf() -> Self {
        Self::from(IsoCode(756))
    }
}

impl From<IsoCode> for AssetId {
    fn from(code: IsoCode) -> Self {
        let mut bytes = [0u8; 20];
        bytes[18..].copy_from_slice(&code.0.to_be_bytes());
        Self(Address::from(bytes))
    }
}

impl From<Address> for AssetId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            Asset::SyntheticFiat(code) => write!(f, "{}", code),
            Asset::Token(address) => write!(f, "{}", address),
        }
    }
}

impl FromStr for AssetId {
    type Err = AssetParseError;

    /// Accepts a `0x` address, a known alphabetic code (`EUR`), or a
    /// numeric code (`978` or `ISO-978`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.starts_with("0x") || s.starts_with("0X") {
            return s
                .parse::<Address>()
                .map(Self)
                .map_err(|_| AssetParseError::Invalid(s.to_string()));
        }

        if let Some(code) = IsoCode::from_alpha(s) {
            return Ok(Self::from(code));
        }

        let digits = s.strip_prefix("ISO-").unwrap_or(s);
        match digits.parse::<u32>() {
            Ok(n) => IsoCode::new(n)
                .map(Self::from)
                .ok_or(AssetParseError::CodeOutOfRange(n)),
            Err(_) => Err(AssetParseError::Invalid(s.to_string())),
        }
    }
}

impl Serialize for AssetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An asset, tagged by how its decimals are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// External token; decimals come from its metadata.
    Token(Address),
    /// Synthetic fiat currency; always 18 decimals.
    SyntheticFiat(IsoCode),
}

impl Asset {
    /// Decimals of every synthetic fiat asset.
    pub const SYNTHETIC_DECIMALS: u8 = 18;

    /// Classify an identifier by the reserved numeric range.
    pub fn classify(id: AssetId) -> Self {
        let bytes = id.0 .0 .0;
        if bytes[..18].iter().all(|b| *b == 0) {
            let code = u16::from_be_bytes([bytes[18], bytes[19]]);
            if let Some(code) = IsoCode::new(code as u32) {
                return Asset::SyntheticFiat(code);
            }
        }
        Asset::Token(id.0)
    }

    /// Get the external identifier.
    pub fn id(&self) -> AssetId {
        match self {
            Asset::Token(address) => AssetId(*address),
            Asset::SyntheticFiat(code) => AssetId::from(*code),
        }
    }
}

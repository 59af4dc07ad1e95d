//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `Address`
//! - **Draws**: `DrawId`, `Timestamp`, `PrizeDistribution`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AddressParseError;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 20-byte Ethereum-style address identifying a caller or a component.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address whose every byte is `byte`. Handy for fixtures.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; 20])
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    /// Parses a 40 hex character address, with or without the `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AddressParseError::InvalidHex {
            reason: e.to_string(),
        })?;
        Self::from_slice(&bytes).ok_or(AddressParseError::InvalidLength { len: bytes.len() })
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// CLUSTER B: DRAWS
// =============================================================================

/// Monotonically increasing identifier of a draw (results period).
pub type DrawId = u32;

/// Absolute time in whole seconds since the Unix epoch.
pub type Timestamp = u64;

/// Identifier returned by the prize distribution history for a pushed entry.
pub type DistributionId = u32;

/// Opaque call data forwarded untouched to downstream components.
pub type Bytes = Vec<u8>;

/// Prize distribution settings for a single draw.
///
/// The timelock trigger forwards these to the prize distribution history
/// without interpreting them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrizeDistribution {
    /// Number of bits per winning-number slot.
    pub bit_range_size: u8,
    /// Number of slots a pick must match.
    pub match_cardinality: u8,
    /// Seconds before the draw timestamp where balance sampling starts.
    pub start_timestamp_offset: u32,
    /// Seconds before the draw timestamp where balance sampling ends.
    pub end_timestamp_offset: u32,
    /// Maximum picks a single user may claim.
    pub max_picks_per_user: u32,
    /// Total picks available for the draw.
    pub number_of_picks: u128,
    /// Fraction of the prize per tier, in parts per billion.
    pub tiers: Vec<u32>,
    /// Total prize for the draw.
    pub prize: U256,
}

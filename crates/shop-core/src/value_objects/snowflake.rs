//! Snowflake ID - 64-bit time-ordered identifier for brands and users
//!
//! Layout:
//! - Bits 63-22: milliseconds since `Snowflake::EPOCH`
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)

use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const MAX_WORKER_ID: u16 = (1 << WORKER_BITS) - 1;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

/// Time-ordered 64-bit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since the Unix epoch at which this ID was generated
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & i64::from(MAX_WORKER_ID)) as u16
    }

    /// Parse from decimal string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// JSON clients see IDs as strings; JavaScript numbers lose precision past 2^53.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Snowflake(n)),
            Raw::Text(s) => s
                .parse::<i64>()
                .map(Snowflake)
                .map_err(|_| serde::de::Error::custom("invalid snowflake string")),
        }
    }
}

#[derive(Debug, Default)]
struct GeneratorState {
    last_timestamp: i64,
    sequence: i64,
}

/// Snowflake ID generator, safe to share across threads
#[derive(Debug)]
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    /// Create a new generator with the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= MAX_WORKER_ID, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: Mutex::new(GeneratorState::default()),
        }
    }

    /// Generate a new unique Snowflake ID
    pub fn generate(&self) -> Snowflake {
        let mut state = self.state.lock();
        let mut timestamp = current_millis().max(state.last_timestamp);

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond
                while timestamp <= state.last_timestamp {
                    std::hint::spin_loop();
                    timestamp = current_millis();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        Snowflake::new(
            ((timestamp - Snowflake::EPOCH) << (WORKER_BITS + SEQUENCE_BITS))
                | (i64::from(self.worker_id) << SEQUENCE_BITS)
                | state.sequence,
        )
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(Snowflake::EPOCH)
}

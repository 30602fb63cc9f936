//! Typed numeric identifiers for the loancalc application.
//!
//! Room ids are issued by the backend as plain integers. Wrapping them in a
//! marker-typed [`Id`] keeps a room id from being passed where some other
//! integer is expected, while still serialising as a bare JSON number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper around a server-issued integer id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: i64,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just the number
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

impl<T> Id<T> {
    /// Wraps a raw id value.
    ///
    /// # Example
    /// ```
    /// use loancalc::id::RoomId;
    ///
    /// let room_id = RoomId::new(42);
    /// assert_eq!(room_id.get(), 42);
    /// ```
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the raw id value.
    pub const fn get(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    /// Parses an id out of a route segment such as the `42` in `/rooms/42`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self::new)
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomMarker;

/// Type alias for Room IDs
pub type RoomId = Id<RoomMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = RoomId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{id:?}"), "Id(7)");
    }

    #[test]
    fn test_id_from_route_segment() {
        let id: RoomId = "42".parse().unwrap();
        assert_eq!(id, RoomId::new(42));
        assert!("forty-two".parse::<RoomId>().is_err());
    }

    #[test]
    fn test_serde() {
        let original = RoomId::new(42);

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "42");

        let deserialized: RoomId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_rejects_string_ids() {
        assert!(serde_json::from_str::<RoomId>("\"42\"").is_err());
    }
}

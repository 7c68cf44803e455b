//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. The underlying value is the
//! database-generated `BIGSERIAL` key, so IDs are only ever constructed from
//! storage rows or request paths, never generated in-process.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ResearchId = Id<markers::Research>;
/// let id = ResearchId::from_i64(1);
/// assert_eq!(id.as_i64(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a raw database key or path parameter
    pub fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub fn as_i64(&self) -> i64 {
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

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Account IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Account;

    /// Marker for ResearchEntry IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Research;

    /// Marker for Mission IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Mission;

    /// Marker for Reward IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Reward;
}

/// Type aliases for common IDs
pub type AccountId = Id<markers::Account>;
pub type ResearchId = Id<markers::Research>;
pub type MissionId = Id<markers::Mission>;
pub type RewardId = Id<markers::Reward>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let research_id: ResearchId = Id::from_i64(1);
        let mission_id: MissionId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _r: i64 = research_id.into();
        let _m: i64 = mission_id.into();
    }

    #[test]
    fn test_id_roundtrip() {
        let id: AccountId = Id::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_equality() {
        let a: RewardId = Id::from_i64(7);
        let b: RewardId = Id::from_i64(7);
        let c: RewardId = Id::from_i64(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

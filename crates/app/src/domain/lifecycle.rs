//! Two-state lifecycle for soft-deletable records.

use jiff::Timestamp;

/// Lifecycle state of a soft-deletable record.
///
/// Records are created `Active` and move to `Deactivated` at most once; no
/// transition back exists. Stored as a nullable `deleted_at` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Deactivated(Timestamp),
}

impl Lifecycle {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn deactivated_at(self) -> Option<Timestamp> {
        match self {
            Self::Active => None,
            Self::Deactivated(at) => Some(at),
        }
    }

    /// Derive the lifecycle from a nullable `deleted_at` column.
    #[must_use]
    pub fn from_deleted_at(deleted_at: Option<Timestamp>) -> Self {
        deleted_at.map_or(Self::Active, Self::Deactivated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_deleted_at_is_active() {
        let state = Lifecycle::from_deleted_at(None);

        assert!(state.is_active());
        assert_eq!(state.deactivated_at(), None);
    }

    #[test]
    fn set_deleted_at_is_deactivated() {
        let at = Timestamp::UNIX_EPOCH;
        let state = Lifecycle::from_deleted_at(Some(at));

        assert!(!state.is_active());
        assert_eq!(state.deactivated_at(), Some(at));
    }
}

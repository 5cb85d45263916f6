use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Opaque handle for a task record.
///
/// Only stores mint new ids; everything else copies them around. The wire form
/// is the hyphenated UUID string.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Mint a time-ordered id for a freshly created task.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Fixed id, mostly for fixtures and seeded stores.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_uses_uuid_v7() {
        let id = TaskId::new();
        assert_eq!(id.0.get_version_num(), 7);
    }

    #[test]
    fn task_id_roundtrip() -> anyhow::Result<()> {
        let id = TaskId::new();
        let parsed: TaskId = id.to_string().parse()?;
        assert_eq!(parsed, id);
        Ok(())
    }

    #[test]
    fn task_id_serializes_as_string() -> anyhow::Result<()> {
        let id = TaskId::from_u128(42);
        let json = serde_json::to_string(&id)?;
        assert_eq!(json, "\"00000000-0000-0000-0000-00000000002a\"");
        Ok(())
    }

    #[test]
    fn deserializes_from_string() -> anyhow::Result<()> {
        let id: TaskId = serde_json::from_str("\"00000000-0000-0000-0000-000000000015\"")?;
        assert_eq!(id, TaskId::from_u128(21));
        Ok(())
    }

    #[test]
    fn rejects_malformed_id() {
        assert!("not-a-uuid".parse::<TaskId>().is_err());
    }
}

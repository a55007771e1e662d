use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PAGE_LIMIT: u64 = 100;
pub const MAX_PAGE_LIMIT: u64 = 1000;
/// Offsets are bound as signed 64-bit integers by the store drivers.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Uniform body returned by every write.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub id: i32,
    pub message: String,
}

impl ResponseEnvelope {
    pub fn ok(id: i32, message: String) -> Self {
        Self {
            success: true,
            id,
            message,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    /// `(offset, limit)` with defaults applied and both clamped.
    pub fn offset_and_limit(&self) -> (u64, u64) {
        (
            self.skip.unwrap_or(0).min(MAX_OFFSET),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT),
        )
    }
}

/// Partial-update fields: an absent key stays `None` through `#[serde(default)]`,
/// an explicit `null` is rejected like any other value of the wrong type.
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

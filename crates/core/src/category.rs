//! Category constants and the status enum.

/// Display-order value assigned when a category is created without an
/// explicit `sort`.
pub const DEFAULT_SORT: i32 = 100;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Category lifecycle status.
///
/// Discriminants match the `categories.status` column values.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    Disabled = 0,
    Enabled = 1,
    SoftDeleted = 2,
}

impl CategoryStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Parse a database status ID, if it names a known status.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            0 => Some(Self::Disabled),
            1 => Some(Self::Enabled),
            2 => Some(Self::SoftDeleted),
            _ => None,
        }
    }
}

impl From<CategoryStatus> for StatusId {
    fn from(value: CategoryStatus) -> Self {
        value as StatusId
    }
}

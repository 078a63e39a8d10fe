use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// SchemeId
///
/// Content address of a sort scheme: CRC-32 (IEEE) over
/// `"<row_type>:<col0>,<col1>,..."` with normalized column names.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{_0:08x}")]
pub struct SchemeId(u32);

impl SchemeId {
    #[must_use]
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Derive the id for a row type and an already-normalized column list.
    #[must_use]
    pub fn derive<S: AsRef<str>>(row_type: &str, columns: &[S]) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(row_type.as_bytes());
        hasher.update(b":");
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                hasher.update(b",");
            }
            hasher.update(column.as_ref().as_bytes());
        }

        Self(hasher.finalize())
    }
}

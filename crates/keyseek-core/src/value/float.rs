use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

///
/// Float64
///
/// Finite `f64` with a total order. Negative zero is folded into zero so that
/// equality, hashing and ordering agree.
///

#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub fn try_new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        // -0.0 == 0.0 but the bit patterns differ
        Some(Self(if value == 0.0 { 0.0 } else { value }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float64 {}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;

        Self::try_new(raw).ok_or_else(|| D::Error::custom("float value must be finite"))
    }
}

impl TryFrom<f64> for Float64 {
    type Error = f64;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(value)
    }
}

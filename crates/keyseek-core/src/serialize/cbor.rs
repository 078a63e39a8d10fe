use crate::serialize::SerializeError;
use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{from_slice, to_vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Encode `value` as a single CBOR item.
pub(super) fn serialize<T>(value: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(value).map_err(|err| SerializeError::Serialize(err.to_string()))
}

/// Decode one CBOR item, refusing anything over `max_bytes`.
///
/// Continuation tokens arrive from clients, so a decoder panic is
/// reported as an ordinary deserialize error.
pub(super) fn deserialize<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if bytes.len() > max_bytes {
        return Err(SerializeError::Deserialize(format!(
            "payload of {} bytes exceeds maximum of {max_bytes}",
            bytes.len()
        )));
    }

    catch_unwind(AssertUnwindSafe(|| from_slice::<T>(bytes)))
        .map_err(|_| SerializeError::Deserialize("cbor decoder panicked".to_string()))?
        .map_err(|err| SerializeError::Deserialize(err.to_string()))
}

///
/// TESTS
///

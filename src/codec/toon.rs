// TOON text load/store for Dict
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::dict::{Dict, DictError};

impl<T: DeserializeOwned> Dict<T> {
    /// Decode a TOON document whose top level is an object.
    ///
    /// `null` values become absent slots.
    pub fn from_toon(input: &str) -> Result<Self, DictError> {
        let dict: Dict<T> =
            toon_format::decode_default(input).map_err(|source| DictError::Decode { source })?;
        debug!(keys = dict.len(), present = dict.present_len(), "decoded dict from toon");
        Ok(dict)
    }
}

impl<T: Serialize> Dict<T> {
    /// Encode as a TOON object, absent slots written as `null`.
    pub fn to_toon(&self) -> Result<String, DictError> {
        let out = toon_format::encode_default(self).map_err(|source| DictError::Encode { source })?;
        debug!(keys = self.len(), bytes = out.len(), "encoded dict to toon");
        Ok(out)
    }
}

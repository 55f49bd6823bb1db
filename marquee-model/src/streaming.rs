#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type ProviderId = u64;

/// A service a movie can be streamed, rented or bought from.
///
/// Identity is `provider_id`; two entries with the same id describe the same
/// service even if they were reported under different availability kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StreamingService {
    pub provider_id: ProviderId,
    pub provider_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub logo_path: Option<String>,
}

impl StreamingService {
    pub fn new(
        provider_id: ProviderId,
        provider_name: impl Into<String>,
        logo_path: Option<String>,
    ) -> Self {
        Self {
            provider_id,
            provider_name: provider_name.into(),
            logo_path,
        }
    }
}

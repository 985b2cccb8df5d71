//! Country record as served by the countries endpoint.

use serde::{Deserialize, Serialize};

/// One entry of the countries payload.
///
/// Every field is optional so that partial or malformed upstream objects
/// still deserialize. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Alpha code. Used as the row identity when diffing.
    #[serde(default, alias = "alpha2Code", alias = "alpha2")]
    pub code: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
}

impl Country {
    /// Two records describe the same row when their codes match.
    ///
    /// Records without a code all share one identity.
    pub fn same_identity(&self, other: &Country) -> bool {
        self.code == other.code
    }

    /// `"name, region"` with blank parts dropped.
    pub fn title(&self) -> String {
        [self.name.as_deref(), self.region.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

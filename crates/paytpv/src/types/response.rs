use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Uniform outcome of every public operation.
///
/// Serializes as `{"Result":"OK","Data":{..}}` or `{"Result":"KO","DsErrorId":".."}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Result")]
pub enum GatewayResult {
    #[serde(rename = "OK")]
    Ok {
        #[serde(rename = "Data")]
        data: BTreeMap<String, String>,
    },
    #[serde(rename = "KO")]
    Ko {
        #[serde(rename = "DsErrorId")]
        error_code: String,
    },
}

impl GatewayResult {
    pub fn ko(error_code: impl Into<String>) -> Self {
        Self::Ko {
            error_code: error_code.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub fn data(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Ok { data } => Some(data),
            Self::Ko { .. } => None,
        }
    }

    /// Convenience lookup into the success payload.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data()
            .and_then(|data| data.get(key))
            .map(String::as_str)
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::Ko { error_code } => Some(error_code),
        }
    }
}

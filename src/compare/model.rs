use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenCounts {
    #[serde(deserialize_with = "lenient::count")]
    pub input: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub output: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub cache_creation: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub cache_read: Option<u64>,
    /// Fraction of tokens served from cache, in `[0, 1]`.
    #[serde(deserialize_with = "lenient::number")]
    pub cache_hit_ratio: Option<f64>,
}

/// One telemetry session summary as emitted by the instrumented session.
///
/// Every field is optional. Absent values count as zero in arithmetic and
/// render as `N/A` where the report distinguishes "unavailable". A field
/// holding an unexpected JSON type is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSummary {
    #[serde(deserialize_with = "lenient::text")]
    pub session_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cwd: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_index: Option<bool>,
    #[serde(deserialize_with = "lenient::tokens")]
    pub tokens: Option<TokenCounts>,
    #[serde(deserialize_with = "lenient::count")]
    pub api_calls: Option<u64>,
    /// Per-tool invocation counts, keyed by tool name.
    #[serde(deserialize_with = "lenient::tool_counts")]
    pub tool_calls: Option<BTreeMap<String, u64>>,
    #[serde(deserialize_with = "lenient::count")]
    pub search_nav_total: Option<u64>,
    #[serde(deserialize_with = "lenient::number")]
    pub duration_sec: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub compaction_events: Option<u64>,
}

/// Field decoders that turn a mistyped value into "absent" instead of an error.
mod lenient {
    use super::*;

    pub(super) fn count_of(value: &Value) -> Option<u64> {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(count_of(&Value::deserialize(d)?))
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(Value::deserialize(d)?.as_f64())
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        Ok(Value::deserialize(d)?.as_bool())
    }

    pub fn tokens<'de, D: Deserializer<'de>>(d: D) -> Result<Option<TokenCounts>, D::Error> {
        match Value::deserialize(d)? {
            value @ Value::Object(_) => {
                Ok(Some(TokenCounts::deserialize(value).map_err(serde::de::Error::custom)?))
            }
            _ => Ok(None),
        }
    }

    pub fn tool_counts<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<BTreeMap<String, u64>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Object(map) => Some(
                map.into_iter()
                    .map(|(tool, count)| {
                        let count = count_of(&count).unwrap_or(0);
                        (tool, count)
                    })
                    .collect(),
            ),
            _ => None,
        })
    }
}

impl SessionSummary {
    /// Decodes an already-parsed document; a non-object document yields an
    /// all-absent summary.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            value @ Value::Object(_) => Self::deserialize(value),
            _ => Ok(Self::default()),
        }
    }

    /// Whether the feature under test was active; absent means inactive.
    pub fn indexed(&self) -> bool {
        self.has_index.unwrap_or(false)
    }

    pub fn tokens(&self) -> TokenCounts {
        self.tokens.clone().unwrap_or_default()
    }

    pub fn tool_count(&self, tool: &str) -> u64 {
        self.tool_calls
            .as_ref()
            .and_then(|calls| calls.get(tool).copied())
            .unwrap_or(0)
    }

    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.tool_calls
            .iter()
            .flat_map(|calls| calls.keys().map(String::as_str))
    }
}

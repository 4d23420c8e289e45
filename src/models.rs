//! Data models for the Atlas probe API and the local config file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contents of `config.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Default probe id used when `-i` is not given.
    #[serde(rename = "Id", alias = "id", default)]
    pub id: String,
}

/// A single RIPE Atlas measurement probe.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Probe {
    pub address_v4: Option<String>,
    pub address_v6: Option<String>,
    pub country_code: Option<String>,
    pub is_anchor: bool,
    pub is_public: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<i32>,
    pub status_name: Option<String>,
    #[serde(with = "timestamp")]
    pub status_since: Option<DateTime<Utc>>,

    // Filterable attributes.
    pub asn_v4: Option<i64>,
    pub asn_v6: Option<i64>,
    pub id: i64,
    pub prefix_v4: Option<String>,
    pub prefix_v6: Option<String>,

    pub asn: Option<i64>,
    pub location: Option<String>,
    pub resource_uri: Option<String>,
}

/// Pagination block of a list response.
///
/// Only one page is ever fetched, so `next` and `previous` are reported
/// but never followed.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Metadata {
    pub limit: u32,
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total_count: u64,
    pub use_iso_time: bool,
}

/// Top-level envelope returned by `GET /probe/`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RestAnswer {
    pub objects: Vec<Probe>,
    pub meta: Metadata,
}

/// `status_since` arrives as epoch seconds, or as an ISO-8601 string when
/// the API is asked for ISO timestamps. It is always written as epoch seconds.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Epoch(i64),
        Iso(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Epoch(secs)) => DateTime::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", secs))),
            Some(Raw::Iso(s)) => parse_iso(&s).map(Some).map_err(de::Error::custom),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_i64(dt.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    fn parse_iso(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            // Atlas omits the offset; the value is UTC.
            Err(_) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|n| n.and_utc()),
        }
    }
}

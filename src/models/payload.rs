use serde::{Deserialize, Deserializer};

/// Untrusted body of a ride creation request.
///
/// Coercion is deliberately lenient: coordinates accept numbers or numeric
/// strings, names accept strings only, and everything else lands as `None`.
/// Malformed fields must reach the validator so failures are reported in
/// check order rather than dying inside the JSON extractor.
#[derive(Debug, Default, Deserialize)]
pub struct RidePayload {
    #[serde(default, deserialize_with = "parse_f64_option")]
    pub start_lat: Option<f64>,
    #[serde(default, deserialize_with = "parse_f64_option")]
    pub start_long: Option<f64>,
    #[serde(default, deserialize_with = "parse_f64_option")]
    pub end_lat: Option<f64>,
    #[serde(default, deserialize_with = "parse_f64_option")]
    pub end_long: Option<f64>,
    #[serde(default, deserialize_with = "parse_text_option")]
    pub rider_name: Option<String>,
    #[serde(default, deserialize_with = "parse_text_option")]
    pub driver_name: Option<String>,
    #[serde(default, deserialize_with = "parse_text_option")]
    pub driver_vehicle: Option<String>,
}

fn parse_f64_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrOther {
        Float(f64),
        String(String),
        Other(serde_json::Value),
    }

    let v: Option<NumberOrOther> = Option::deserialize(deserializer)?;
    Ok(match v {
        Some(NumberOrOther::Float(f)) => Some(f),
        Some(NumberOrOther::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn parse_text_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match v {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

use serde::{Deserialize, Serialize};

type Micros = i64;

/// One named series of samples as uploaded by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Samples")]
    pub samples: Statistics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statistics {
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub standard_deviation: f64,
    pub number_of_samples: i32,
    /// Sample values, index-aligned with `timestamps_in_microseconds`.
    pub data: Vec<f64>,
    #[serde(rename = "TimestampsInMicroSeconds")]
    pub timestamps_in_microseconds: Vec<Micros>,
}

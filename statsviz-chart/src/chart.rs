use crate::record::StatisticsRecord;
use serde::{Deserialize, Serialize};

const MICROS_TO_SECONDS: f64 = 0.000001;

/// Plot-ready series, one per uploaded record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "Datasets")]
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    /// Sample timestamps in seconds.
    #[serde(rename = "dataX")]
    pub data_x: Vec<f64>,
    #[serde(rename = "dataY")]
    pub data_y: Vec<f64>,
}

impl ChartData {
    /// Builds one dataset per record, keeping input order and labels as-is.
    ///
    /// Timestamps and values are converted independently, so when a record
    /// carries more of one than the other the surplus stays in its own array
    /// without a partner.
    pub fn from_records(records: Vec<StatisticsRecord>) -> Self {
        let datasets = records.into_iter().map(ChartDataset::from).collect();

        ChartData { datasets }
    }

    /// Smallest and largest x over every dataset, ignoring non-finite values.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.datasets.iter().flat_map(|d| d.data_x.iter().copied()))
    }

    /// Smallest and largest y over every dataset, ignoring non-finite values.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.datasets.iter().flat_map(|d| d.data_y.iter().copied()))
    }
}

impl ChartDataset {
    /// Number of (x, y) pairs that can actually be plotted.
    pub fn point_count(&self) -> usize {
        self.data_x.len().min(self.data_y.len())
    }
}

impl From<StatisticsRecord> for ChartDataset {
    fn from(record: StatisticsRecord) -> Self {
        let data_x = record
            .samples
            .timestamps_in_microseconds
            .iter()
            .map(|&ts| micros_to_seconds(ts))
            .collect();

        ChartDataset {
            label: record.key,
            data_x,
            data_y: record.samples.data,
        }
    }
}

pub fn micros_to_seconds(ts: i64) -> f64 {
    ts as f64 * MICROS_TO_SECONDS
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Statistics;

    fn record(key: &str, data: Vec<f64>, timestamps: Vec<i64>) -> StatisticsRecord {
        StatisticsRecord {
            key: key.to_string(),
            samples: Statistics {
                number_of_samples: data.len() as i32,
                data,
                timestamps_in_microseconds: timestamps,
                ..Default::default()
            },
        }
    }

    #[test]
    fn rescales_microseconds_to_seconds() {
        assert_eq!(micros_to_seconds(1_000_000), 1.0);
        assert_eq!(micros_to_seconds(2_500_000), 2.5);
        assert_eq!(micros_to_seconds(0), 0.0);

        for ts in [1, 999, 123_456_789, 1_700_000_000_000_000, -5_000_000] {
            assert_eq!(micros_to_seconds(ts), ts as f64 * 0.000001);
        }
    }

    #[test]
    fn keeps_record_order_and_labels() {
        let records = vec![
            record("cpu", vec![1.0], vec![0]),
            record("mem", vec![2.0], vec![0]),
            record("disk", vec![3.0], vec![0]),
        ];

        let chart = ChartData::from_records(records);

        let labels: Vec<_> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["cpu", "mem", "disk"]);
    }

    #[test]
    fn passes_values_through() {
        let data = vec![3.5, -1.0, 0.0, 1e9];
        let chart = ChartData::from_records(vec![record("v", data.clone(), vec![0, 1, 2, 4])]);

        assert_eq!(chart.datasets[0].data_y, data);
        assert_eq!(chart.datasets[0].data_x, vec![0.0, 0.000001, 0.000002, 0.000004]);
    }

    #[test]
    fn empty_input_has_no_datasets() {
        let chart = ChartData::from_records(Vec::new());

        assert!(chart.datasets.is_empty());
        assert_eq!(chart.x_bounds(), None);
        assert_eq!(chart.y_bounds(), None);
    }

    #[test]
    fn duplicate_labels_are_preserved() {
        let chart = ChartData::from_records(vec![
            record("cpu", vec![1.0], vec![1_000_000]),
            record("cpu", vec![2.0], vec![2_000_000]),
        ]);

        assert_eq!(chart.datasets.len(), 2);
        assert!(chart.datasets.iter().all(|d| d.label == "cpu"));
        assert_eq!(chart.datasets[1].data_y, vec![2.0]);
    }

    #[test]
    fn mismatched_lengths_keep_surplus() {
        let chart = ChartData::from_records(vec![
            record("long-x", vec![1.0], vec![1_000_000, 2_000_000, 3_000_000]),
            record("long-y", vec![1.0, 2.0, 3.0], vec![1_000_000]),
        ]);

        assert_eq!(chart.datasets[0].data_x, vec![1.0, 2.0, 3.0]);
        assert_eq!(chart.datasets[0].point_count(), 1);
        assert_eq!(chart.datasets[1].data_y, vec![1.0, 2.0, 3.0]);
        assert_eq!(chart.datasets[1].point_count(), 1);
    }

    #[test]
    fn bounds_span_all_datasets() {
        let chart = ChartData::from_records(vec![
            record("a", vec![5.0, f64::NAN], vec![2_000_000, 4_000_000]),
            record("b", vec![-1.0, 7.0], vec![1_000_000, 3_000_000]),
        ]);

        assert_eq!(chart.x_bounds(), Some((1.0, 4.0)));
        assert_eq!(chart.y_bounds(), Some((-1.0, 7.0)));
    }

    #[test]
    fn serializes_template_field_names() {
        let chart = ChartData::from_records(vec![record("cpu", vec![1.0, 2.0], vec![1_000_000, 2_000_000])]);

        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Datasets": [{ "label": "cpu", "dataX": [1.0, 2.0], "dataY": [1.0, 2.0] }]
            })
        );
    }
}

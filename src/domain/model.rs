use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One run, straight from the raw sheet. Every field is the trimmed
/// cell text; numbers and dates stay as text on purpose, the dashboard
/// renders them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub date: String,
    pub time: String,
    pub duration: String,
    pub distance: String,
    pub pace: String,
    pub heart_rate: String,
    pub cadence: String,
}

/// One calendar week. `days` always holds exactly 7 cells, Monday
/// first; an empty cell means no run that day and stays an empty
/// string in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub date_range: String,
    pub summary: String,
    pub days: [String; 7],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    pub month: String,
    pub total_distance: String,
    pub total_runs: String,
    pub total_duration: String,
    pub fastest_pace: String,
    pub longest_distance: String,
    #[serde(rename = "maxAvgHR")]
    pub max_avg_hr: String,
    pub max_cadence: String,
}

/// Top-level output document: a refresh date plus one named sequence
/// of records. The collection key differs per sheet (`runs` / `weeks`
/// / `months`), so serialization is written out by hand to keep
/// `lastUpdated` as the first key.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub last_updated: String,
    pub key: &'static str,
    pub records: Vec<T>,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("lastUpdated", &self.last_updated)?;
        map.serialize_entry(self.key, &self.records)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_record_wire_names() {
        let record = RunRecord {
            date: "2025-09-21".to_string(),
            time: "06:30".to_string(),
            duration: "00:57:29".to_string(),
            distance: "5.04".to_string(),
            pace: "11:23".to_string(),
            heart_rate: "128".to_string(),
            cadence: "145".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["heartRate"], "128");
        assert_eq!(value["cadence"], "145");
        assert!(value.get("heart_rate").is_none());
    }

    #[test]
    fn test_month_record_wire_names() {
        let record = MonthRecord {
            month: "2025-09".to_string(),
            total_distance: "36.1".to_string(),
            total_runs: "6".to_string(),
            total_duration: "06:46:10".to_string(),
            fastest_pace: "10:07".to_string(),
            longest_distance: "12.27".to_string(),
            max_avg_hr: "162".to_string(),
            max_cadence: "155".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["totalDistance"], "36.1");
        assert_eq!(value["maxAvgHR"], "162");
        assert!(value.get("maxAvgHr").is_none());
    }

    #[test]
    fn test_envelope_puts_last_updated_first() {
        let envelope = Envelope {
            last_updated: "2025-09-21".to_string(),
            key: "runs",
            records: Vec::<RunRecord>::new(),
        };

        let json = serde_json::to_string_pretty(&envelope).unwrap();
        assert!(json.starts_with("{\n  \"lastUpdated\": \"2025-09-21\""));
        assert!(json.contains("\"runs\": []"));
    }

    #[test]
    fn test_envelope_keeps_non_ascii_literal() {
        let envelope = Envelope {
            last_updated: "2025-09-21".to_string(),
            key: "weeks",
            records: vec![WeekRecord {
                date_range: "09/15–09/21".to_string(),
                summary: "8.28km / 01:42:17 / 12:21".to_string(),
                days: std::array::from_fn(|_| String::new()),
            }],
        };

        let json = serde_json::to_string_pretty(&envelope).unwrap();
        assert!(json.contains("09/15–09/21"));
        assert!(!json.contains("\\u"));
    }
}

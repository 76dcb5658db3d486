// Reading trip records supplied by the data-acquisition side

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Trip;

/// Reads a JSON array of trip records from a file.
///
/// ```json
/// [{"id": 1, "start_date": "2023-11-01", "end_date": "2023-11-03",
///   "distance": 120.0, "duration": 4.0, "savings": 310.0}]
/// ```
pub fn read_trips_json<P: AsRef<Path>>(path: P) -> Result<Vec<Trip>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader)
        .map_err(|e| Error::validation(format!("{}: malformed trip data: {}", path.display(), e)))
}

/// Parses a JSON array of trip records
pub fn parse_trips_json(contents: &str) -> Result<Vec<Trip>> {
    serde_json::from_str(contents)
        .map_err(|e| Error::validation(format!("malformed trip data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trips() {
        let trips = parse_trips_json(
            r#"[
                {"id": 2, "start_date": "2023-11-02", "end_date": "2023-11-04",
                 "distance": 75.0, "duration": 3.0, "savings": 240.0},
                {"id": 1, "start_date": "2023-11-01", "end_date": "2023-11-02",
                 "distance": 120, "duration": 4, "savings": 310}
            ]"#,
        )
        .unwrap();

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, 2);
        assert_eq!(trips[1].savings, 310.0);
        assert_eq!(trips[1].start_date.to_string(), "2023-11-01");
    }

    #[test]
    fn test_missing_field_is_a_validation_error() {
        let result = parse_trips_json(
            r#"[{"id": 1, "start_date": "2023-11-01", "end_date": "2023-11-02",
                 "distance": 120.0, "duration": 4.0}]"#,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("savings"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = read_trips_json("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

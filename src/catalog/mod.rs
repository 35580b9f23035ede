mod load;
mod record;

pub use load::{load_catalog, parse_catalog, LoadCatalogProblem};
pub use record::{Difficulty, FileFormat, Genre, Period, Record};

use crate::search::SearchError;

/// Looks up a record by id in a snapshot.
pub fn find_record<'a>(records: &'a [Record], id: &str) -> Result<&'a Record, SearchError> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| SearchError::RecordNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_record_by_id() {
        let records = vec![
            Record::new("1", "Für Elise", "Ludwig van Beethoven"),
            Record::new("2", "Moonlight Sonata", "Ludwig van Beethoven"),
        ];
        assert_eq!(find_record(&records, "2").unwrap().title, "Moonlight Sonata");
        assert_eq!(
            find_record(&records, "3"),
            Err(SearchError::RecordNotFound("3".to_string()))
        );
    }
}

//! Append-only meal history, stored as CSV rows of (date, summary-json).

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::Result;
use crate::models::PlanSummary;

/// One recorded plan: ISO-8601 date plus its summary.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub date: String,
    pub summary: PlanSummary,
}

/// Append one (date, summary) row to the history file, creating it if absent.
pub fn append_history<P: AsRef<Path>>(path: P, date: &str, summary: &PlanSummary) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let json = serde_json::to_string(summary)?;
    writer.write_record([date, json.as_str()])?;
    writer.flush()?;
    Ok(())
}

/// Load all history entries. Rows whose summary fails to parse are skipped.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<HistoryEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let (Some(date), Some(json)) = (record.get(0), record.get(1)) else {
            continue;
        };
        match serde_json::from_str(json) {
            Ok(summary) => entries.push(HistoryEntry {
                date: date.to_string(),
                summary,
            }),
            Err(_) => continue,
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSummary, Nutrition};
    use tempfile::NamedTempFile;

    fn sample_summary(calories: u32) -> PlanSummary {
        PlanSummary {
            total_nutrition: Nutrition {
                calories,
                protein: 120,
                carbs: 200,
                fats: 60,
            },
            meals: vec![MealSummary {
                meal_number: 1,
                foods: vec![],
                nutrition: Nutrition {
                    calories,
                    protein: 120,
                    carbs: 200,
                    fats: 60,
                },
            }],
        }
    }

    #[test]
    fn test_append_and_load() {
        let file = NamedTempFile::new().unwrap();

        append_history(file.path(), "2026-08-29", &sample_summary(2100)).unwrap();
        append_history(file.path(), "2026-08-30", &sample_summary(1800)).unwrap();

        let entries = load_history(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, "2026-08-29");
        assert_eq!(entries[0].summary.total_nutrition.calories, 2100);
        assert_eq!(entries[1].summary.total_nutrition.calories, 1800);
    }

    #[test]
    fn test_malformed_summary_rows_skipped() {
        let file = NamedTempFile::new().unwrap();
        append_history(file.path(), "2026-08-29", &sample_summary(2000)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(file.path())
            .and_then(|mut f| {
                use std::io::Write;
                writeln!(f, "2026-08-30,not-json")
            })
            .unwrap();

        let entries = load_history(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
    }
}

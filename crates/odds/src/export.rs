use std::path::Path;

use chrono::NaiveDateTime;
use csv::Writer;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::TeamOdds;

pub const DEFAULT_OUTPUT: &str = "betfair_superbowl_odds.csv";

#[derive(Serialize)]
struct OddsRow<'a> {
    team: &'a str,
    odds: Option<f64>,
    last_updated: String,
}

/// Writes `team,odds,last_updated`. Every row carries the same fetch time; a
/// missing price is an empty cell.
pub fn write_csv(path: &Path, odds: &[TeamOdds], fetched_at: NaiveDateTime) -> Result<()> {
    let last_updated = fetched_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let mut writer = Writer::from_path(path)?;
    if odds.is_empty() {
        writer.write_record(["team", "odds", "last_updated"])?;
    }
    for row in odds {
        writer.serialize(OddsRow {
            team: &row.team,
            odds: row.odds,
            last_updated: last_updated.clone(),
        })?;
    }
    writer.flush()?;

    info!("Odds saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_write_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("odds.csv");
        let at = NaiveDate::from_ymd_opt(2026, 1, 20)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();

        write_csv(
            &path,
            &[
                TeamOdds::new("Kansas City Chiefs", Some(5.5)),
                TeamOdds::new("Chicago Bears", None),
            ],
            at,
        )
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "team,odds,last_updated\n\
             Kansas City Chiefs,5.5,2026-01-20 09:15:00\n\
             Chicago Bears,,2026-01-20 09:15:00\n"
        );
    }
}

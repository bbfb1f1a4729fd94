use std::collections::HashMap;

use super::models::{CompetitionResult, EventTypeResult, MarketBook, MarketCatalogue};
use crate::models::{TeamOdds, sort_by_odds};

/// Event types are matched on a lowercase substring, e.g. "american football".
pub fn find_event_type_id<'a>(event_types: &'a [EventTypeResult], needle: &str) -> Option<&'a str> {
    let needle = needle.to_lowercase();
    event_types
        .iter()
        .find(|e| e.event_type.name.to_lowercase().contains(&needle))
        .map(|e| e.event_type.id.as_str())
}

pub fn find_competition_id<'a>(competitions: &'a [CompetitionResult], needle: &str) -> Option<&'a str> {
    let needle = needle.to_lowercase();
    competitions
        .iter()
        .find(|c| c.competition.name.to_lowercase().contains(&needle))
        .map(|c| c.competition.id.as_str())
}

/// The first market whose name mentions both "super bowl" and "winner".
pub fn find_winner_market(markets: &[MarketCatalogue]) -> Option<&str> {
    markets
        .iter()
        .find(|m| {
            let name = m.market_name.to_lowercase();
            name.contains("winner") && name.contains("super bowl")
        })
        .map(|m| m.market_id.as_str())
}

/// Joins prices with runner names, keeping active runners only. Runners the
/// catalogue does not name are labelled "Unknown (<id>)".
pub fn build_odds_table(book: &MarketBook, catalogue: &MarketCatalogue) -> Vec<TeamOdds> {
    let names: HashMap<i64, &str> = catalogue
        .runners
        .iter()
        .map(|r| (r.selection_id, r.runner_name.as_str()))
        .collect();

    let mut rows: Vec<TeamOdds> = book
        .runners
        .iter()
        .filter(|r| r.is_active())
        .map(|r| {
            let team = names
                .get(&r.selection_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Unknown ({})", r.selection_id));
            TeamOdds::new(team, r.best_back_price())
        })
        .collect();

    sort_by_odds(&mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_types() -> Vec<EventTypeResult> {
        serde_json::from_str(
            r#"[
                {"eventType": {"id": "1", "name": "Soccer"}, "marketCount": 900},
                {"eventType": {"id": "6423", "name": "American Football"}, "marketCount": 40}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_event_type() {
        assert_eq!(find_event_type_id(&event_types(), "american football"), Some("6423"));
        assert_eq!(find_event_type_id(&event_types(), "cricket"), None);
    }

    #[test]
    fn test_find_competition() {
        let competitions: Vec<CompetitionResult> = serde_json::from_str(
            r#"[
                {"competition": {"id": "11", "name": "NCAA"}, "marketCount": 3},
                {"competition": {"id": "12282733", "name": "NFL"}, "marketCount": 30}
            ]"#,
        )
        .unwrap();

        assert_eq!(find_competition_id(&competitions, "nfl"), Some("12282733"));
    }

    #[test]
    fn test_find_winner_market_needs_both_terms() {
        let markets: Vec<MarketCatalogue> = serde_json::from_str(
            r#"[
                {"marketId": "1.1", "marketName": "Super Bowl MVP"},
                {"marketId": "1.2", "marketName": "NFL Winner 2026"},
                {"marketId": "1.3", "marketName": "Super Bowl LX Winner"}
            ]"#,
        )
        .unwrap();

        assert_eq!(find_winner_market(&markets), Some("1.3"));
        assert_eq!(find_winner_market(&markets[..2]), None);
    }

    #[test]
    fn test_build_odds_table() {
        let book: MarketBook = serde_json::from_str(
            r#"{
                "marketId": "1.3",
                "runners": [
                    {"selectionId": 10, "status": "ACTIVE", "ex": {"availableToBack": [{"price": 7.0, "size": 100.0}, {"price": 6.8, "size": 20.0}]}},
                    {"selectionId": 11, "status": "ACTIVE", "ex": {"availableToBack": [{"price": 5.5, "size": 250.0}]}},
                    {"selectionId": 12, "status": "REMOVED"},
                    {"selectionId": 13, "status": "ACTIVE", "ex": {"availableToBack": []}},
                    {"selectionId": 99, "status": "ACTIVE", "ex": {"availableToBack": [{"price": 500.0, "size": 2.0}]}}
                ]
            }"#,
        )
        .unwrap();
        let catalogue: MarketCatalogue = serde_json::from_str(
            r#"{
                "marketId": "1.3",
                "marketName": "Super Bowl LX Winner",
                "runners": [
                    {"selectionId": 10, "runnerName": "Buffalo Bills"},
                    {"selectionId": 11, "runnerName": "Kansas City Chiefs"},
                    {"selectionId": 12, "runnerName": "Oakland Raiders"},
                    {"selectionId": 13, "runnerName": "Chicago Bears"}
                ]
            }"#,
        )
        .unwrap();

        let table = build_odds_table(&book, &catalogue);

        assert_eq!(
            table,
            vec![
                TeamOdds::new("Kansas City Chiefs", Some(5.5)),
                TeamOdds::new("Buffalo Bills", Some(7.0)),
                TeamOdds::new("Unknown (99)", Some(500.0)),
                TeamOdds::new("Chicago Bears", None),
            ]
        );
    }
}

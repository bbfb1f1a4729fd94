use serde::Serialize;

/// Best available decimal price on one team to win the Super Bowl.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamOdds {
    pub team: String,
    pub odds: Option<f64>,
}

impl TeamOdds {
    pub fn new(team: impl Into<String>, odds: Option<f64>) -> Self {
        Self {
            team: team.into(),
            odds,
        }
    }
}

/// Shortest price first; teams without a price go last, by name.
pub fn sort_by_odds(rows: &mut [TeamOdds]) {
    rows.sort_by(|a, b| match (a.odds, b.odds) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.team.cmp(&b.team)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.team.cmp(&b.team),
    });
}

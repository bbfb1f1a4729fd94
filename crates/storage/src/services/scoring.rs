use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::dto::leaderboard::{CategoryResult, Leaderboard, Standing};
use crate::models::{
    Category, Decimal, HistoricalPick, Outcome, OutcomeMap, PickValue, parse_legacy_pick,
    total_points,
};

/// Grades every user's picks against the final outcomes and ranks them.
///
/// Only categories present in `outcomes` are scored. A pick that cannot be
/// parsed is worth zero in its own cell and never stops the run.
pub fn score(picks: &[HistoricalPick], outcomes: &OutcomeMap) -> Leaderboard {
    let mut by_user: BTreeMap<&str, BTreeMap<Category, &PickValue>> = BTreeMap::new();
    for pick in picks {
        let user_picks = by_user.entry(pick.user_name.as_str()).or_default();
        if user_picks.insert(pick.category, &pick.value).is_some() {
            debug!(
                "Duplicate {} pick for '{}', keeping the later one",
                pick.category, pick.user_name
            );
        }
    }

    let scored_categories = outcomes.len() as u32;

    let mut standings: Vec<Standing> = by_user
        .into_iter()
        .map(|(user_name, user_picks)| {
            let breakdown: Vec<CategoryResult> = outcomes
                .iter()
                .map(|(category, outcome)| grade(*category, user_picks.get(category).copied(), outcome))
                .collect();

            let unparsed = breakdown.iter().filter(|r| r.raw.is_some()).count();
            if unparsed > 0 {
                warn!("{} unreadable pick(s) for '{}' scored as zero", unparsed, user_name);
            }

            Standing {
                rank: 0,
                user_name: user_name.to_string(),
                total_points: total_points(breakdown.iter().map(|r| r.awarded)),
                correct_count: breakdown.iter().filter(|r| r.correct).count() as u32,
                scored_categories,
                breakdown,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.user_name.to_lowercase().cmp(&b.user_name.to_lowercase()))
            .then_with(|| a.user_name.cmp(&b.user_name))
    });
    assign_ranks(&mut standings);

    Leaderboard {
        scored_categories,
        standings,
    }
}

fn grade(category: Category, pick: Option<&PickValue>, outcome: &Outcome) -> CategoryResult {
    let (label, raw, points, parsed) = match pick {
        None => (None, None, Decimal::ZERO, true),
        Some(PickValue::Structured { selection, points }) => {
            (Some(selection.clone()), None, *points, true)
        }
        Some(PickValue::Legacy(text)) => {
            let legacy = parse_legacy_pick(text);
            if legacy.is_parsed() {
                (legacy.label().map(str::to_string), None, legacy.points(), true)
            } else {
                (None, Some(text.clone()), Decimal::ZERO, false)
            }
        }
    };

    let correct = label.as_deref().is_some_and(|l| outcome.matches(l));

    CategoryResult {
        category,
        label,
        raw,
        points,
        awarded: if correct { points } else { Decimal::ZERO },
        correct,
        parsed,
    }
}

/// Equal totals share a rank and the next rank skips ahead (1, 2, 2, 4).
fn assign_ranks(standings: &mut [Standing]) {
    let mut previous_total = None;
    let mut rank = 0;
    for (idx, standing) in standings.iter_mut().enumerate() {
        if previous_total != Some(standing.total_points) {
            rank = idx as u32 + 1;
            previous_total = Some(standing.total_points);
        }
        standing.rank = rank;
    }
}

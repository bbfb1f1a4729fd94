use std::str::FromStr;

use rust_decimal::Decimal;

/// Reads a points value: any finite, non-negative decimal such as `5`,
/// `5.0` or `2.5`. Trailing zeros are dropped so `5.0` and `5` print alike.
pub fn parse_points(raw: &str) -> Option<Decimal> {
    let points = Decimal::from_str(raw.trim()).ok()?;
    (points >= Decimal::ZERO).then(|| points.normalize())
}

/// Sum that saturates instead of overflowing.
pub fn total_points(points: impl IntoIterator<Item = Decimal>) -> Decimal {
    points
        .into_iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p))
}

//! Distance metrics for deriving heuristics from node positions.

use super::{Cost, Position};

/// Distance metric between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// `|dx| + |dy|`.
    Manhattan,
    /// `sqrt(dx² + dy²)`, rounded down to the thousandth.
    Euclidean,
}

/// Distance between `a` and `b` under `metric`, saturating on overflow.
#[must_use]
pub fn distance(metric: DistanceMetric, a: Position, b: Position) -> Cost {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    match metric {
        DistanceMetric::Manhattan => Cost::from_units(dx.saturating_add(dy)),
        DistanceMetric::Euclidean => {
            let scale = u128::from(Cost::SCALE);
            let (dx, dy) = (u128::from(dx) * scale, u128::from(dy) * scale);
            let root = dx
                .checked_mul(dx)
                .and_then(|x| dy.checked_mul(dy).and_then(|y| x.checked_add(y)))
                .map_or(u128::MAX, isqrt);
            Cost::from_milli(u64::try_from(root).unwrap_or(u64::MAX))
        }
    }
}

/// Floor square root by Newton iteration.
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

//! Resolution of polymorphic spacing descriptions to concrete distances.

use seedr_rng::Rng;
use seedr_schema::{Spacing, SpacingRange};

use crate::choose::choose_among;

/// Resolves `spacing` to a concrete distance, consulting the RNG for any
/// range or weighted form.
///
/// A weighted list whose weights select nothing resolves to 0.
pub fn resolve(rng: &mut impl Rng, spacing: &Spacing) -> i32 {
    match spacing {
        Spacing::Exact(value) => *value,
        Spacing::Span([min, max]) => rng.between(*min, *max),
        Spacing::Range(range) => resolve_range(rng, range),
        Spacing::Weighted(members) => match choose_among(rng, members) {
            Some(member) => resolve(rng, &member.value),
            None => 0,
        },
    }
}

/// Draws a uniform multiple of `units` between `min` and `max`, inclusive.
fn resolve_range(rng: &mut impl Rng, range: &SpacingRange) -> i32 {
    let units = range.units.max(1);
    rng.between(range.min.div_euclid(units), range.max.div_euclid(units)) * units
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedr_rng::DefaultRng;
    use seedr_schema::WeightedSpacing;

    #[test]
    fn exact_needs_no_rng() {
        let mut rng = DefaultRng::from_seed(1);
        let mut untouched = rng.clone();

        assert_eq!(resolve(&mut rng, &Spacing::Exact(9)), 9);
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn span_stays_inclusive() {
        let mut rng = DefaultRng::from_seed(2);
        for _ in 0..1_000 {
            let value = resolve(&mut rng, &Spacing::Span([3, 6]));
            assert!((3..=6).contains(&value));
        }
    }

    #[test]
    fn range_snaps_to_the_unit_grid() {
        let mut rng = DefaultRng::from_seed(3);
        let spacing = Spacing::Range(SpacingRange {
            min: 0,
            max: 12,
            units: 4,
        });

        for _ in 0..1_000 {
            let value = resolve(&mut rng, &spacing);
            assert_eq!(value % 4, 0);
            assert!((0..=12).contains(&value));
        }
    }

    #[test]
    fn weighted_recurses_into_the_drawn_member() {
        let mut rng = DefaultRng::from_seed(4);
        let spacing = Spacing::Weighted(vec![WeightedSpacing {
            value: Spacing::Exact(5),
            percent: 10.0,
        }]);

        // A single member is drawn unconditionally.
        assert_eq!(resolve(&mut rng, &spacing), 5);
    }

    #[test]
    fn weighted_nothing_resolves_to_zero() {
        let mut rng = DefaultRng::from_seed(5);
        let spacing = Spacing::Weighted(vec![
            WeightedSpacing {
                value: Spacing::Exact(5),
                percent: 0.0,
            },
            WeightedSpacing {
                value: Spacing::Exact(7),
                percent: 0.0,
            },
        ]);

        for _ in 0..100 {
            assert_eq!(resolve(&mut rng, &spacing), 0);
        }
    }
}

//! Weighted selection among percent-carrying lists.

use seedr_rng::Rng;
use seedr_schema::{PossibilityChild, WeightedArgs, WeightedSpacing};

/// An item carrying an author-declared probability weight out of 100.
pub trait Weighted {
    /// The declared weight of the item, out of 100.
    fn percent(&self) -> f64;
}

impl Weighted for PossibilityChild {
    #[inline]
    fn percent(&self) -> f64 {
        self.percent
    }
}

impl Weighted for WeightedSpacing {
    #[inline]
    fn percent(&self) -> f64 {
        self.percent
    }
}

impl Weighted for WeightedArgs {
    #[inline]
    fn percent(&self) -> f64 {
        self.percent
    }
}

impl<T: Weighted> Weighted for &T {
    #[inline]
    fn percent(&self) -> f64 {
        (**self).percent()
    }
}

/// Selects one of `items` by weight.
///
/// An empty list selects nothing, and a single-element list is returned
/// without consulting the RNG. Otherwise one goal is drawn in `[1, 100]` and
/// the first item whose running weight sum reaches the goal is returned.
///
/// Weights need not sum to 100. Summing to less leaves a chance that nothing
/// is selected, which authors use as a "chance of nothing" mechanic; callers
/// must tolerate [`None`].
pub fn choose_among<'a, T: Weighted>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    match items {
        [] => None,
        [only] => Some(only),
        _ => {
            let goal = rng.percentage() as f64;

            let mut sum = 0.0;
            for item in items {
                sum += item.percent();
                if sum >= goal {
                    return Some(item);
                }
            }

            None
        }
    }
}

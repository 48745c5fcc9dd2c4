/// A spacing drawn from a `min`/`max` range: a uniform multiple of `units`
/// with both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacingRange {
    pub min: i32,
    pub max: i32,
    /// The grid the drawn value snaps to.
    #[serde(default = "default_units")]
    pub units: i32,
}

fn default_units() -> i32 {
    1
}

/// One member of a weighted spacing list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightedSpacing {
    /// The inner spacing used when this member is drawn.
    pub value: Spacing,
    /// The weight of this member, out of 100.
    pub percent: f64,
}

/// A polymorphic distance specification, inserted between successive
/// children.
///
/// Each draw resolves to exactly one number. Any form the deserializer does
/// not recognize is rejected when the library is loaded.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// A deterministic distance.
    Exact(i32),
    /// `[min, max]` sugar for a unit-grid range.
    Span([i32; 2]),
    /// A uniform draw on a unit grid.
    Range(SpacingRange),
    /// A weighted choice between inner spacings.
    Weighted(Vec<WeightedSpacing>),
}

impl Default for Spacing {
    #[inline]
    fn default() -> Self {
        Self::Exact(0)
    }
}

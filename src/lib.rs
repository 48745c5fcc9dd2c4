//! Procedural placement generation: possibility schemas in, trees of labeled
//! rectangles out.
//!
//! Given a library of *possibility* schemas describing how regions of a 2-D
//! plane may be filled, [`WorldSeedr`] produces a tree of concrete
//! placements whose bounding boxes respect a caller-supplied region. The
//! output is deterministic relative to the supplied RNG seed.
//!
//! The workspace crates are re-exported here: the geometry and output model
//! (`seedr-core`), the schema model (`seedr-schema`), the RNG (`seedr-rng`)
//! and the generator itself (`seedr-gen`).

pub use seedr_core::{
    wrap_extremes, ArgMap, ArgValue, Choice, ChoiceKind, Direction, Generated, Rect,
};
pub use seedr_gen::{
    choose_among, resolve_spacing, Command, GenerateError, PlacementSink, Result, Weighted,
    WorldSeedr, DEFAULT_MAX_DEPTH,
};
pub use seedr_rng::{DefaultRng, Rng};
pub use seedr_schema::{
    Arguments, ChildKind, Contents, Mode, Possibility, PossibilityChild, PossibilityLibrary,
    SchemaError, Sizing, Spacing, SpacingRange, Stretch, WeightedArgs, WeightedSpacing,
};

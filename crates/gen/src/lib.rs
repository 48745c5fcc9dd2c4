//! The procedural placement generator: weighted selection, rectangular
//! packing in the four cardinal directions, and recursive schema expansion
//! with termination by geometric exhaustion.

mod choose;
mod driver;
mod error;
mod modes;
mod parse;
mod spacing;

pub use choose::{choose_among, Weighted};
pub use error::{GenerateError, Result};
pub use spacing::resolve as resolve_spacing;

use seedr_core::{Choice, Direction, Generated, Rect};
use seedr_rng::{DefaultRng, Rng};
use seedr_schema::PossibilityLibrary;

use crate::driver::GenCtx;

/// The sink that receives flushed terminal placements.
pub type PlacementSink = Box<dyn FnMut(&[Choice])>;

/// The recursion ceiling used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A generation request: the possibility to expand and the region to fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The title of the possibility to expand.
    pub title: String,
    /// The region to fill.
    pub rect: Rect,
    /// A layout-direction hint, used only when the possibility's contents do
    /// not declare a direction of their own.
    pub direction: Option<Direction>,
}

impl Command {
    /// Creates a command with no direction hint.
    pub fn new(title: impl Into<String>, rect: Rect) -> Self {
        Self {
            title: title.into(),
            rect,
            direction: None,
        }
    }
}

/// The procedural placement generator.
///
/// Given a library of possibility schemas, produces a tree of concrete
/// placements whose bounding boxes respect a caller-supplied region. The
/// output is fully determined by the library, the starting command and the
/// RNG seed.
pub struct WorldSeedr<R = DefaultRng> {
    possibilities: PossibilityLibrary,
    rng: R,
    commands: Vec<Choice>,
    on_placement: PlacementSink,
    max_depth: usize,
}

impl WorldSeedr<DefaultRng> {
    /// Creates a generator seeded with entropy from the operating system.
    pub fn new(possibilities: PossibilityLibrary) -> Self {
        Self::with_rng(possibilities, DefaultRng::from_entropy())
    }

    /// Creates a generator with a reproducible seed.
    pub fn from_seed(possibilities: PossibilityLibrary, seed: u64) -> Self {
        Self::with_rng(possibilities, DefaultRng::from_seed(seed))
    }
}

impl<R: Rng> WorldSeedr<R> {
    /// Creates a generator driving the provided RNG.
    pub fn with_rng(possibilities: PossibilityLibrary, rng: R) -> Self {
        Self {
            possibilities,
            rng,
            commands: Vec::new(),
            on_placement: Box::new(log_placements),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// The possibility library consulted during generation.
    #[inline]
    pub fn possibilities(&self) -> &PossibilityLibrary {
        &self.possibilities
    }

    /// Mutable access to the possibility library.
    #[inline]
    pub fn possibilities_mut(&mut self) -> &mut PossibilityLibrary {
        &mut self.possibilities
    }

    /// Replaces the possibility library. Safe between generation calls.
    pub fn set_possibilities(&mut self, possibilities: PossibilityLibrary) {
        self.possibilities = possibilities;
    }

    /// Replaces the sink invoked by [`run_generated_commands`].
    ///
    /// [`run_generated_commands`]: Self::run_generated_commands
    pub fn set_on_placement(&mut self, sink: PlacementSink) {
        self.on_placement = sink;
    }

    /// Configures the recursion ceiling.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Generates the possibility registered under `title` inside `rect`,
    /// returning the aggregate of everything placed.
    ///
    /// Returns `Ok(None)` when the possibility produced nothing: the region
    /// had no room for any child, a chance-of-nothing draw came up empty, or
    /// a Random branch overran its limit.
    #[profiling::function]
    pub fn generate(&mut self, title: &str, rect: Rect) -> Result<Option<Generated>> {
        let Self {
            possibilities,
            rng,
            max_depth,
            ..
        } = self;

        GenCtx {
            library: possibilities,
            rng,
            max_depth: *max_depth,
        }
        .generate(title, rect, None, 0)
    }

    /// Expands `command` all the way down to terminal placements, appending
    /// them to the command buffer in depth-first production order.
    #[profiling::function]
    pub fn generate_full(&mut self, command: &Command) -> Result<()> {
        let Self {
            possibilities,
            rng,
            commands,
            max_depth,
            ..
        } = self;

        GenCtx {
            library: possibilities,
            rng,
            max_depth: *max_depth,
        }
        .generate_full_into(&command.title, command.rect, command.direction, 0, commands)
    }

    /// The terminal placements accumulated so far.
    #[inline]
    pub fn generated_commands(&self) -> &[Choice] {
        &self.commands
    }

    /// Clears the accumulated terminal placements.
    pub fn clear_generated_commands(&mut self) {
        self.commands.clear();
    }

    /// Hands the accumulated terminal placements to the placement sink.
    ///
    /// The buffer is left intact; emptying it stays an explicit
    /// [`clear_generated_commands`](Self::clear_generated_commands) call.
    pub fn run_generated_commands(&mut self) {
        (self.on_placement)(&self.commands);
    }
}

/// The default placement sink: logs each placement.
fn log_placements(commands: &[Choice]) {
    for command in commands {
        log::info!(
            "place '{}' in ({}, {}, {}, {})",
            command.title,
            command.rect.top,
            command.rect.right,
            command.rect.bottom,
            command.rect.left,
        );
    }
}

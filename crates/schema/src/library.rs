use std::hash::BuildHasherDefault;

use hashbrown::HashMap;
use rustc_hash::FxHasher;

use crate::Possibility;

/// Errors raised while loading a possibility library.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The library text failed to parse.
    #[error("malformed possibility library: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// A mapping from title to [`Possibility`].
///
/// The library is read-only for the duration of one generation call; swapping
/// it between calls is fine, swapping it during one is not.
#[derive(Debug, Clone, Default)]
pub struct PossibilityLibrary {
    entries: HashMap<String, Possibility, BuildHasherDefault<FxHasher>>,
}

impl PossibilityLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a library from RON text.
    ///
    /// Optional schema fields may be written without the `Some(..)` wrapper.
    pub fn from_ron_str(text: &str) -> Result<Self, SchemaError> {
        let options = ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
        let entries = options.from_str(text)?;
        Ok(Self { entries })
    }

    /// Returns the possibility registered under `title`.
    #[inline]
    pub fn get(&self, title: &str) -> Option<&Possibility> {
        self.entries.get(title)
    }

    /// Registers a possibility under `title`, replacing any previous entry.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        possibility: Possibility,
    ) -> Option<Possibility> {
        self.entries.insert(title.into(), possibility)
    }

    /// The number of registered possibilities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the library holds no possibilities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered possibilities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Possibility)> {
        self.entries.iter().map(|(title, p)| (title.as_str(), p))
    }
}

impl FromIterator<(String, Possibility)> for PossibilityLibrary {
    fn from_iter<I: IntoIterator<Item = (String, Possibility)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

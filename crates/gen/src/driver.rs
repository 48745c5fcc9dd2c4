//! The recursive generation driver.

use seedr_core::{wrap_extremes, Choice, ChoiceKind, Direction, Generated, Rect};
use seedr_rng::Rng;
use seedr_schema::{Mode, Possibility, PossibilityChild, PossibilityLibrary, Spacing};

use smallvec::SmallVec;

use crate::choose::choose_among;
use crate::error::{GenerateError, Result};
use crate::spacing;

/// The shared state of one generation pass: the read-only possibility
/// library, the RNG, and the recursion ceiling.
///
/// Threading one context through the whole pass keeps every probability draw
/// on a single RNG stream, which is what makes the output reproducible from a
/// seed.
pub(crate) struct GenCtx<'a, R> {
    pub(crate) library: &'a PossibilityLibrary,
    pub(crate) rng: &'a mut R,
    pub(crate) max_depth: usize,
}

impl<'a, R: Rng> GenCtx<'a, R> {
    /// Looks up `title`, failing fast when it is not in the library.
    pub(crate) fn possibility(&self, title: &str) -> Result<&'a Possibility> {
        self.library
            .get(title)
            .ok_or_else(|| GenerateError::UnknownPossibility {
                title: title.to_owned(),
            })
    }

    /// Generates the possibility registered under `title` inside `rect`.
    ///
    /// Returns `Ok(None)` when the possibility produced no children: the
    /// region had no room, a chance-of-nothing draw came up empty, or a
    /// Random branch overran its limit.
    pub(crate) fn generate(
        &mut self,
        title: &str,
        rect: Rect,
        hint: Option<Direction>,
        depth: usize,
    ) -> Result<Option<Generated>> {
        if depth > self.max_depth {
            return Err(GenerateError::DepthLimitExceeded {
                title: title.to_owned(),
                limit: self.max_depth,
            });
        }

        let schema = self.possibility(title)?;
        let contents = &schema.contents;
        if contents.children.is_empty() {
            return Ok(None);
        }

        // The schema's own direction wins over the caller's hint. Childless
        // schemas never reach this point, so leaves without a direction stay
        // legal.
        let direction =
            contents
                .direction
                .or(hint)
                .ok_or_else(|| GenerateError::MissingDirection {
                    title: title.to_owned(),
                })?;
        let spacing = contents.spacing.as_ref();

        // The host region is authoritative; the schema only describes how to
        // fill it.
        let mut region = rect;
        let children = match contents.mode {
            Mode::Certain => Some(self.certain(contents, &mut region, direction, spacing, depth)?),
            Mode::Repeat => Some(self.repeat(contents, &mut region, direction, spacing, depth)?),
            Mode::Random => self.random(contents, &mut region, direction, spacing, depth)?,
            Mode::Multiple => {
                Some(self.multiple(contents, &mut region, direction, spacing, depth)?)
            }
        };

        Ok(children.and_then(wrap_extremes))
    }

    /// Expands `title` inside `rect` and appends the terminal choices to
    /// `out`, in depth-first production order.
    pub(crate) fn generate_full_into(
        &mut self,
        title: &str,
        rect: Rect,
        hint: Option<Direction>,
        depth: usize,
        out: &mut Vec<Choice>,
    ) -> Result<()> {
        let Some(generated) = self.generate(title, rect, hint, depth)? else {
            return Ok(());
        };

        for child in generated.children {
            match child.kind {
                ChoiceKind::Known => out.push(child),
                ChoiceKind::Random => {
                    self.generate_full_into(&child.title, child.rect, None, depth + 1, out)?
                }
            }
        }

        Ok(())
    }

    /// Recursively generates the contents of a non-terminal child, inside the
    /// child's own rectangle.
    pub(crate) fn expand(&mut self, child: &mut Choice, depth: usize) -> Result<()> {
        if child.kind == ChoiceKind::Random {
            child.contents = self
                .generate(&child.title, child.rect, None, depth + 1)?
                .map(Box::new);
        }

        Ok(())
    }

    /// Filters `children` down to those whose referenced possibility fits
    /// inside `region`, then draws one by weight.
    pub(crate) fn choose_among_fitting(
        &mut self,
        children: &'a [PossibilityChild],
        region: &Rect,
    ) -> Result<Option<&'a PossibilityChild>> {
        let mut fitting: SmallVec<[&'a PossibilityChild; 8]> = SmallVec::new();
        for child in children {
            let possibility = self.possibility(&child.title)?;
            if region.fits(possibility.size()) {
                fitting.push(child);
            }
        }

        Ok(choose_among(self.rng, &fitting).copied())
    }

    /// Resolves the gap to insert after the child that was just placed.
    ///
    /// Each gap draws the RNG independently.
    pub(crate) fn next_spacing(&mut self, spacing: Option<&Spacing>) -> i32 {
        spacing.map_or(0, |s| spacing::resolve(self.rng, s))
    }
}

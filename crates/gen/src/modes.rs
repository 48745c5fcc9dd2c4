//! The four generation modes.
//!
//! Each mode takes a content block, a mutable working region, a layout
//! direction and an optional spacing, and emits an ordered list of choices.
//! The packing modes consume the region as they go; Multiple only drifts it.

use seedr_core::{Choice, Direction, Rect};
use seedr_rng::Rng;
use seedr_schema::{Contents, Spacing};

use crate::driver::GenCtx;
use crate::error::Result;

impl<'a, R: Rng> GenCtx<'a, R> {
    /// Certain mode: every child is placed once, in order, regardless of fit.
    ///
    /// Authors own overflow here; a child that extends past the region is
    /// still emitted.
    pub(crate) fn certain(
        &mut self,
        contents: &'a Contents,
        region: &mut Rect,
        dir: Direction,
        spacing: Option<&'a Spacing>,
        depth: usize,
    ) -> Result<Vec<Choice>> {
        let mut out = Vec::with_capacity(contents.children.len());

        for entry in &contents.children {
            let mut child = self.parse_any(entry, region, dir)?;
            self.expand(&mut child, depth)?;

            let gap = self.next_spacing(spacing);
            region.shrink(&child.rect, dir, gap);
            out.push(child);
        }

        Ok(out)
    }

    /// Repeat mode: children repeat in list order until the region runs out
    /// or the next one no longer fits.
    pub(crate) fn repeat(
        &mut self,
        contents: &'a Contents,
        region: &mut Rect,
        dir: Direction,
        spacing: Option<&'a Spacing>,
        depth: usize,
    ) -> Result<Vec<Choice>> {
        let mut out = Vec::new();

        let mut index = 0;
        while region.has_room(dir) {
            let entry = &contents.children[index % contents.children.len()];

            let mut child = self.parse_any(entry, region, dir)?;
            if !region.fits(child.size) {
                break;
            }
            self.expand(&mut child, depth)?;

            let gap = self.next_spacing(spacing);
            region.shrink(&child.rect, dir, gap);
            out.push(child);
            index += 1;
        }

        Ok(out)
    }

    /// Random mode: children are drawn by weight until the region runs out or
    /// nothing fits.
    ///
    /// Returns `None` when the configured limit was overrun, aborting the
    /// whole branch; the caller treats that as having produced nothing.
    pub(crate) fn random(
        &mut self,
        contents: &'a Contents,
        region: &mut Rect,
        dir: Direction,
        spacing: Option<&'a Spacing>,
        depth: usize,
    ) -> Result<Option<Vec<Choice>>> {
        let mut out = Vec::new();

        while region.has_room(dir) {
            let Some(entry) = self.choose_among_fitting(&contents.children, region)? else {
                break;
            };

            let mut child = self.parse_any(entry, region, dir)?;
            self.expand(&mut child, depth)?;

            let gap = self.next_spacing(spacing);
            region.shrink(&child.rect, dir, gap);
            out.push(child);

            if contents.limit.is_some_and(|limit| out.len() > limit) {
                return Ok(None);
            }
        }

        Ok(Some(out))
    }

    /// Multiple mode: every child is parsed against the same starting region,
    /// which is translated by the spacing after each placement. Siblings fan
    /// out instead of packing.
    pub(crate) fn multiple(
        &mut self,
        contents: &'a Contents,
        region: &mut Rect,
        dir: Direction,
        spacing: Option<&'a Spacing>,
        depth: usize,
    ) -> Result<Vec<Choice>> {
        let mut out = Vec::with_capacity(contents.children.len());

        for entry in &contents.children {
            let mut child = self.parse_any(entry, region, dir)?;
            self.expand(&mut child, depth)?;

            let gap = self.next_spacing(spacing);
            region.translate(dir, gap);
            out.push(child);
        }

        Ok(out)
    }
}

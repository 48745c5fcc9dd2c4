//! Conversion of abstract possibility children into concrete choices.

use glam::IVec2;

use seedr_core::{ArgMap, ArgValue, Choice, ChoiceKind, Direction, Rect};
use seedr_rng::Rng;
use seedr_schema::{Arguments, ChildKind, PossibilityChild};

use crate::choose::choose_among;
use crate::driver::GenCtx;
use crate::error::{GenerateError, Result};

impl<'a, R: Rng> GenCtx<'a, R> {
    /// Parses `entry` into a concrete [`Choice`] inside `region`, dispatching
    /// `Final` children to their source-copying shortcut.
    pub(crate) fn parse_any(
        &mut self,
        entry: &PossibilityChild,
        region: &Rect,
        dir: Direction,
    ) -> Result<Choice> {
        match entry.kind {
            ChildKind::Known => self.parse_choice(entry, ChoiceKind::Known, region, dir),
            ChildKind::Random => self.parse_choice(entry, ChoiceKind::Random, region, dir),
            ChildKind::Final => self.parse_final(entry, region),
        }
    }

    /// Converts a possibility child plus a host region and layout direction
    /// into a concrete [`Choice`].
    fn parse_choice(
        &mut self,
        entry: &PossibilityChild,
        kind: ChoiceKind,
        region: &Rect,
        dir: Direction,
    ) -> Result<Choice> {
        let schema = self.possibility(&entry.title)?;

        let mut arguments = self.resolve_arguments(entry.arguments.as_ref());

        let sizing = entry.sizing.unwrap_or_default();
        let mut width = sizing.width.unwrap_or(schema.width);
        let mut height = sizing.height.unwrap_or(schema.height);

        // Start from the host region and collapse along the layout axis so
        // the child hugs the edge opposite the packing direction.
        let mut rect = *region;
        match dir {
            Direction::Top => rect.top = rect.bottom + height,
            Direction::Right => rect.right = rect.left + width,
            Direction::Bottom => rect.bottom = rect.top - height,
            Direction::Left => rect.left = rect.right - width,
        }

        // Snap re-aligns the child against one host edge on the orthogonal
        // axis.
        if let Some(snap) = schema.contents.snap {
            match snap {
                Direction::Top => rect.bottom = rect.top - height,
                Direction::Right => rect.left = rect.right - width,
                Direction::Bottom => rect.top = rect.bottom + height,
                Direction::Left => rect.right = rect.left + width,
            }
        }

        if let Some(stretch) = entry.stretch {
            if stretch.width {
                rect.left = region.left;
                rect.right = region.right;
                width = rect.width();
                arguments
                    .get_or_insert_with(ArgMap::new)
                    .insert("width".to_owned(), ArgValue::Int(width as i64));
            }
            if stretch.height {
                rect.top = region.top;
                rect.bottom = region.bottom;
                height = rect.height();
                arguments
                    .get_or_insert_with(ArgMap::new)
                    .insert("height".to_owned(), ArgValue::Int(height as i64));
            }
        }

        Ok(Choice {
            title: entry.title.clone(),
            kind,
            rect,
            size: IVec2::new(width, height),
            arguments,
            contents: None,
        })
    }

    /// The `Final` shortcut: a terminal choice spanning the whole host region
    /// while keeping its source possibility's dimensions.
    pub(crate) fn parse_final(
        &mut self,
        entry: &PossibilityChild,
        region: &Rect,
    ) -> Result<Choice> {
        let source =
            entry
                .source
                .as_deref()
                .ok_or_else(|| GenerateError::MissingFinalSource {
                    title: entry.title.clone(),
                })?;
        let schema = self.possibility(source)?;

        Ok(Choice {
            title: entry.title.clone(),
            kind: ChoiceKind::Known,
            rect: *region,
            size: schema.size(),
            arguments: self.resolve_arguments(entry.arguments.as_ref()),
            contents: None,
        })
    }

    /// Resolves declared arguments to a concrete map, drawing one member of a
    /// weighted list by weight.
    fn resolve_arguments(&mut self, arguments: Option<&Arguments>) -> Option<ArgMap> {
        match arguments {
            None => None,
            Some(Arguments::Fixed(values)) => Some(values.clone()),
            Some(Arguments::Weighted(members)) => {
                choose_among(self.rng, members).map(|member| member.values.clone())
            }
        }
    }
}

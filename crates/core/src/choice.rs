use glam::IVec2;

use crate::{ArgMap, Rect};

/// How a generated [`Choice`] should be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChoiceKind {
    /// A terminal placement, destined for the placement callback.
    Known,
    /// A placement whose possibility must itself be expanded.
    Random,
}

/// A concrete placement produced from a possibility child: a rectangle plus
/// the metadata the placement callback needs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Choice {
    /// The title of the possibility this placement was produced from.
    pub title: String,
    /// How this placement should be consumed.
    pub kind: ChoiceKind,
    /// The edges of the placement.
    pub rect: Rect,
    /// The declared size of the placement, width first.
    ///
    /// This usually agrees with `rect`, but a `Final` child keeps its source
    /// possibility's dimensions while its rect spans the whole host region.
    pub size: IVec2,
    /// The resolved arguments attached to the placement.
    pub arguments: Option<ArgMap>,
    /// The generated contents of the placement, populated for expanded
    /// [`Random`](ChoiceKind::Random) placements.
    pub contents: Option<Box<Generated>>,
}

/// The aggregate result of one generation pass: the tightest rectangle
/// enclosing every produced child, plus the children in production order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Generated {
    /// The enclosing rectangle.
    pub rect: Rect,
    /// The produced children.
    pub children: Vec<Choice>,
}

/// Wraps a list of choices into the tightest [`Generated`] enclosing all of
/// them.
///
/// Returns [`None`] for an empty list. A single-element list yields that
/// element's rectangle unchanged.
pub fn wrap_extremes(children: Vec<Choice>) -> Option<Generated> {
    let (first, rest) = children.split_first()?;

    let mut rect = first.rect;
    for child in rest {
        rect.enclose(&child.rect);
    }

    Some(Generated { rect, children })
}

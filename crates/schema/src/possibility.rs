use glam::IVec2;

use seedr_core::{ArgMap, Direction};

use crate::Spacing;

/// How a possibility's child list is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    /// Every child is placed once, in order, regardless of fit.
    Certain,
    /// Children are placed in list order, cycling, until the region runs out.
    Repeat,
    /// Children are drawn by weight until the region runs out or nothing fits.
    Random,
    /// Every child is placed against the same starting region, which drifts by
    /// the spacing after each placement.
    Multiple,
}

/// The declared type of a possibility child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChildKind {
    /// A terminal reference, emitted as-is.
    Known,
    /// A reference that is recursively expanded.
    Random,
    /// A terminal that adopts the dimensions of another possibility.
    Final,
}

/// An optional per-child override of the referenced possibility's dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sizing {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

/// Flags that expand a child to fill its host region on one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stretch {
    #[serde(default)]
    pub width: bool,
    #[serde(default)]
    pub height: bool,
}

/// One member of a weighted argument list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightedArgs {
    /// The weight of this member, out of 100.
    pub percent: f64,
    /// The values forwarded when this member is drawn.
    pub values: ArgMap,
}

/// Arguments attached to a possibility child: either a fixed map or a
/// weighted list of maps, one of which is drawn per placement.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Arguments {
    Weighted(Vec<WeightedArgs>),
    Fixed(ArgMap),
}

/// A reference to another possibility from inside a schema's content list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PossibilityChild {
    /// The title of the referenced possibility.
    pub title: String,
    /// How the child is interpreted during generation.
    #[serde(rename = "type")]
    pub kind: ChildKind,
    /// The weight of this child when drawn at random, out of 100.
    #[serde(default)]
    pub percent: f64,
    /// Overrides the referenced possibility's dimensions for this child only.
    #[serde(default)]
    pub sizing: Option<Sizing>,
    /// Expands the child to fill the host region on the flagged axes.
    #[serde(default)]
    pub stretch: Option<Stretch>,
    /// Arguments forwarded onto the produced placement.
    #[serde(default)]
    pub arguments: Option<Arguments>,
    /// For [`Final`](ChildKind::Final) children: the possibility whose
    /// dimensions to adopt.
    #[serde(default)]
    pub source: Option<String>,
}

impl PossibilityChild {
    /// Creates a child reference with no overrides.
    pub fn new(title: impl Into<String>, kind: ChildKind) -> Self {
        Self {
            title: title.into(),
            kind,
            percent: 0.0,
            sizing: None,
            stretch: None,
            arguments: None,
            source: None,
        }
    }

    /// Sets the random-draw weight of this child.
    pub fn with_percent(mut self, percent: f64) -> Self {
        self.percent = percent;
        self
    }
}

/// The content block of a possibility: how its region is filled.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contents {
    /// How the child list is interpreted.
    pub mode: Mode,
    /// The layout direction children are packed along.
    #[serde(default)]
    pub direction: Option<Direction>,
    /// The distance inserted between successive children.
    #[serde(default)]
    pub spacing: Option<Spacing>,
    /// The host edge onto which placed children collapse.
    #[serde(default)]
    pub snap: Option<Direction>,
    /// Random mode only: the hard cap on produced children before the whole
    /// branch aborts.
    #[serde(default)]
    pub limit: Option<usize>,
    /// The ordered child list.
    #[serde(default)]
    pub children: Vec<PossibilityChild>,
}

impl Contents {
    /// Creates a content block with no layout options set.
    pub fn new(mode: Mode, children: Vec<PossibilityChild>) -> Self {
        Self {
            mode,
            direction: None,
            spacing: None,
            snap: None,
            limit: None,
            children,
        }
    }
}

/// A named recipe describing how one region of the plane is filled.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Possibility {
    /// The width of the possibility.
    pub width: i32,
    /// The height of the possibility.
    pub height: i32,
    /// How the possibility's region is filled.
    pub contents: Contents,
}

impl Possibility {
    /// Creates a possibility of the provided dimensions.
    pub fn new(width: i32, height: i32, contents: Contents) -> Self {
        Self {
            width,
            height,
            contents,
        }
    }

    /// A leaf possibility: fixed dimensions and nothing to expand.
    pub fn leaf(width: i32, height: i32) -> Self {
        Self::new(width, height, Contents::new(Mode::Certain, Vec::new()))
    }

    /// The declared size of the possibility, width first.
    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_parses_with_renamed_type_field() {
        let child: PossibilityChild =
            ron::de::from_str(r#"(title: "tree", type: Known, percent: 40.0)"#).unwrap();
        assert_eq!(child.title, "tree");
        assert_eq!(child.kind, ChildKind::Known);
        assert_eq!(child.percent, 40.0);
        assert_eq!(child.sizing, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(
            ron::de::from_str::<PossibilityChild>(r#"(title: "tree", type: Known, weight: 4)"#)
                .is_err()
        );
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(ron::de::from_str::<Mode>("Sometimes").is_err());
    }

    #[test]
    fn directions_parse_lowercase() {
        assert_eq!(ron::de::from_str::<Direction>("right").unwrap(), Direction::Right);
        assert!(ron::de::from_str::<Direction>("Right").is_err());
    }
}

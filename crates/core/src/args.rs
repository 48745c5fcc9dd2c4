use std::collections::BTreeMap;

/// A single argument value attached to a generated placement.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// The key/value arguments attached to a generated placement.
///
/// Ordered so that iteration and serialization are stable across runs.
pub type ArgMap = BTreeMap<String, ArgValue>;

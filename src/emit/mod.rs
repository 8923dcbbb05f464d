//! Deterministic dumps of a finished [`Animation`](crate::model::animation::Animation).

pub mod format;
pub mod svg;
pub mod text;

/// Which whole-animation dump to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Text,
    Svg,
}

use crate::compare::model::SessionSummary;

/// How the pair was labeled after inspecting `has_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The inputs arrived as WITHOUT/WITH and were swapped.
    Swapped,
    /// The inputs already arrived as WITH/WITHOUT.
    Confirmed,
    /// Both (or neither) carry the flag; labels are unreliable.
    Ambiguous { has_index: bool },
}

#[derive(Debug, Clone)]
pub struct Oriented {
    /// The WITH condition ("A").
    pub with: SessionSummary,
    /// The WITHOUT condition ("B").
    pub without: SessionSummary,
    pub orientation: Orientation,
}

pub fn orient(a: SessionSummary, b: SessionSummary) -> Oriented {
    match (a.indexed(), b.indexed()) {
        (false, true) => Oriented {
            with: b,
            without: a,
            orientation: Orientation::Swapped,
        },
        (true, false) => Oriented {
            with: a,
            without: b,
            orientation: Orientation::Confirmed,
        },
        (has_index, _) => Oriented {
            with: a,
            without: b,
            orientation: Orientation::Ambiguous { has_index },
        },
    }
}

impl Orientation {
    pub fn message(&self) -> String {
        match self {
            Orientation::Swapped => t!("compare.orientation.swapped").to_string(),
            Orientation::Confirmed => t!("compare.orientation.confirmed").to_string(),
            Orientation::Ambiguous { has_index } => {
                t!("compare.orientation.ambiguous", has_index = has_index).to_string()
            }
        }
    }
}

use std::fmt;

/// Daily market mood, ordered from most fearful to most greedy.
///
/// Labels outside the five known ones are kept as `Other` and sort after
/// every known label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
    Other(String),
}

impl Classification {
    pub const KNOWN: [Classification; 5] = [
        Classification::ExtremeFear,
        Classification::Fear,
        Classification::Neutral,
        Classification::Greed,
        Classification::ExtremeGreed,
    ];

    pub fn from_label(label: &str) -> Classification {
        match label.trim() {
            "Extreme Fear" => Classification::ExtremeFear,
            "Fear" => Classification::Fear,
            "Neutral" => Classification::Neutral,
            "Greed" => Classification::Greed,
            "Extreme Greed" => Classification::ExtremeGreed,
            other => Classification::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Classification::ExtremeFear => "Extreme Fear",
            Classification::Fear => "Fear",
            Classification::Neutral => "Neutral",
            Classification::Greed => "Greed",
            Classification::ExtremeGreed => "Extreme Greed",
            Classification::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Classification::Other(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

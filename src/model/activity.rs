use std::fmt;

use serde::{Serialize, Serializer};

pub const N_ACTIVITIES: usize = 10;
pub const N_PARAMETERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Activity {
    Antimicrobial,
    Antioxidant,
    AntiInflammatory,
    Antifungal,
    Antibacterial,
    Antiviral,
    Analgesic,
    Sedative,
    Stimulant,
    Antiseptic,
}

impl Activity {
    pub fn label(self) -> &'static str {
        match self {
            Activity::Antimicrobial => "antimicrobial",
            Activity::Antioxidant => "antioxidant",
            Activity::AntiInflammatory => "anti-inflammatory",
            Activity::Antifungal => "antifungal",
            Activity::Antibacterial => "antibacterial",
            Activity::Antiviral => "antiviral",
            Activity::Analgesic => "analgesic",
            Activity::Sedative => "sedative",
            Activity::Stimulant => "stimulant",
            Activity::Antiseptic => "antiseptic",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Activity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One weighted input position contributing to an activity score.
#[derive(Debug, Clone, Copy)]
pub struct WeightTerm {
    pub position: usize,
    pub weight: f64,
}

const fn term(position: usize, weight: f64) -> WeightTerm {
    WeightTerm { position, weight }
}

#[derive(Debug, Clone, Copy)]
pub struct ActivityDef {
    pub activity: Activity,
    pub terms: [WeightTerm; 3],
}

// Iteration order is the tie-break order of the ranked output.
const BUILTIN_ACTIVITIES: &[ActivityDef] = &[
    ActivityDef {
        activity: Activity::Antimicrobial,
        terms: [term(0, 8.5), term(2, 6.2), term(5, 7.1)],
    },
    ActivityDef {
        activity: Activity::Antioxidant,
        terms: [term(1, 9.1), term(3, 5.8), term(7, 6.9)],
    },
    ActivityDef {
        activity: Activity::AntiInflammatory,
        terms: [term(2, 7.8), term(4, 8.2), term(8, 6.5)],
    },
    ActivityDef {
        activity: Activity::Antifungal,
        terms: [term(0, 6.5), term(6, 7.9), term(9, 8.1)],
    },
    ActivityDef {
        activity: Activity::Antibacterial,
        terms: [term(1, 8.7), term(4, 6.8), term(7, 7.4)],
    },
    ActivityDef {
        activity: Activity::Antiviral,
        terms: [term(3, 7.2), term(5, 8.0), term(8, 6.7)],
    },
    ActivityDef {
        activity: Activity::Analgesic,
        terms: [term(2, 6.9), term(6, 7.6), term(9, 5.8)],
    },
    ActivityDef {
        activity: Activity::Sedative,
        terms: [term(0, 5.5), term(3, 6.8), term(6, 7.9)],
    },
    ActivityDef {
        activity: Activity::Stimulant,
        terms: [term(1, 7.8), term(4, 8.5), term(7, 6.2)],
    },
    ActivityDef {
        activity: Activity::Antiseptic,
        terms: [term(5, 8.1), term(8, 7.3), term(9, 6.6)],
    },
];

pub fn builtin_activities() -> &'static [ActivityDef] {
    BUILTIN_ACTIVITIES
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/activity.rs"]
mod tests;

//! Ordinal encodings for the categorical grades
//!
//! Each grade is a closed set of labels with a fixed integer code. The
//! codes must match the encoding used when the model was trained: same
//! label set, same order-to-code assignment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DiamondError, Result};

/// Cut grade, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cut {
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Premium,
    Ideal,
}

impl Cut {
    /// All grades in code order
    pub const ALL: [Cut; 5] = [Cut::Fair, Cut::Good, Cut::VeryGood, Cut::Premium, Cut::Ideal];

    /// Training-time ordinal code
    pub fn code(&self) -> u8 {
        match self {
            Cut::Fair => 0,
            Cut::Good => 1,
            Cut::VeryGood => 2,
            Cut::Premium => 3,
            Cut::Ideal => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cut::Fair => "Fair",
            Cut::Good => "Good",
            Cut::VeryGood => "Very Good",
            Cut::Premium => "Premium",
            Cut::Ideal => "Ideal",
        }
    }

    /// Parse an exact label. Labels outside the fixed set are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Fair" => Some(Cut::Fair),
            "Good" => Some(Cut::Good),
            "Very Good" => Some(Cut::VeryGood),
            "Premium" => Some(Cut::Premium),
            "Ideal" => Some(Cut::Ideal),
            _ => None,
        }
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Cut {
    type Err = DiamondError;

    fn from_str(s: &str) -> Result<Self> {
        Cut::from_label(s).ok_or_else(|| DiamondError::UnknownCategory {
            feature: "cut",
            label: s.to_string(),
        })
    }
}

/// Color grade, best (colorless) to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    D,
    E,
    F,
    G,
    H,
    I,
    J,
}

impl Color {
    /// All grades in code order
    pub const ALL: [Color; 7] = [
        Color::D,
        Color::E,
        Color::F,
        Color::G,
        Color::H,
        Color::I,
        Color::J,
    ];

    /// Training-time ordinal code
    pub fn code(&self) -> u8 {
        match self {
            Color::D => 0,
            Color::E => 1,
            Color::F => 2,
            Color::G => 3,
            Color::H => 4,
            Color::I => 5,
            Color::J => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Color::D => "D",
            Color::E => "E",
            Color::F => "F",
            Color::G => "G",
            Color::H => "H",
            Color::I => "I",
            Color::J => "J",
        }
    }

    /// Parse an exact label. Labels outside the fixed set are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "D" => Some(Color::D),
            "E" => Some(Color::E),
            "F" => Some(Color::F),
            "G" => Some(Color::G),
            "H" => Some(Color::H),
            "I" => Some(Color::I),
            "J" => Some(Color::J),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Color {
    type Err = DiamondError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_label(s).ok_or_else(|| DiamondError::UnknownCategory {
            feature: "color",
            label: s.to_string(),
        })
    }
}

/// Clarity grade, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Clarity {
    I1,
    SI2,
    SI1,
    VS2,
    VS1,
    VVS2,
    VVS1,
    IF,
}

impl Clarity {
    /// All grades in code order
    pub const ALL: [Clarity; 8] = [
        Clarity::I1,
        Clarity::SI2,
        Clarity::SI1,
        Clarity::VS2,
        Clarity::VS1,
        Clarity::VVS2,
        Clarity::VVS1,
        Clarity::IF,
    ];

    /// Training-time ordinal code
    pub fn code(&self) -> u8 {
        match self {
            Clarity::I1 => 0,
            Clarity::SI2 => 1,
            Clarity::SI1 => 2,
            Clarity::VS2 => 3,
            Clarity::VS1 => 4,
            Clarity::VVS2 => 5,
            Clarity::VVS1 => 6,
            Clarity::IF => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Clarity::I1 => "I1",
            Clarity::SI2 => "SI2",
            Clarity::SI1 => "SI1",
            Clarity::VS2 => "VS2",
            Clarity::VS1 => "VS1",
            Clarity::VVS2 => "VVS2",
            Clarity::VVS1 => "VVS1",
            Clarity::IF => "IF",
        }
    }

    /// Parse an exact label. Labels outside the fixed set are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "I1" => Some(Clarity::I1),
            "SI2" => Some(Clarity::SI2),
            "SI1" => Some(Clarity::SI1),
            "VS2" => Some(Clarity::VS2),
            "VS1" => Some(Clarity::VS1),
            "VVS2" => Some(Clarity::VVS2),
            "VVS1" => Some(Clarity::VVS1),
            "IF" => Some(Clarity::IF),
            _ => None,
        }
    }
}

impl fmt::Display for Clarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Clarity {
    type Err = DiamondError;

    fn from_str(s: &str) -> Result<Self> {
        Clarity::from_label(s).ok_or_else(|| DiamondError::UnknownCategory {
            feature: "clarity",
            label: s.to_string(),
        })
    }
}

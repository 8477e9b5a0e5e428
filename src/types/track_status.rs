//! Track status flag set decoded from the upstream code string
//!
//! The upstream lap table encodes track status as a concatenation of
//! single-character codes ("24" = yellow with the safety car deployed).
//! Consumers must test for code membership, never compare the whole string,
//! so the string is decoded exactly once into a bitfield when the lap record
//! is constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Set of track status flags active during one lap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackStatus(u8);

impl TrackStatus {
    const GREEN: u8 = 1 << 0;
    const YELLOW: u8 = 1 << 1;
    const SAFETY_CAR: u8 = 1 << 2;
    const RED: u8 = 1 << 3;
    const VSC: u8 = 1 << 4;
    const VSC_ENDING: u8 = 1 << 5;

    /// All-clear status with no flags set.
    pub const fn clear() -> Self {
        Self(0)
    }

    /// Decode an upstream code string. Unknown characters are ignored;
    /// codes are independent and several may be active at once.
    pub fn from_codes(codes: &str) -> Self {
        let mut bits = 0u8;
        for code in codes.chars() {
            bits |= match code {
                '1' => Self::GREEN,
                '2' => Self::YELLOW,
                '4' => Self::SAFETY_CAR,
                '5' => Self::RED,
                '6' => Self::VSC,
                '7' => Self::VSC_ENDING,
                _ => 0,
            };
        }
        Self(bits)
    }

    fn has(&self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    pub fn is_green(&self) -> bool {
        self.has(Self::GREEN)
    }

    pub fn is_yellow(&self) -> bool {
        self.has(Self::YELLOW)
    }

    pub fn is_safety_car(&self) -> bool {
        self.has(Self::SAFETY_CAR)
    }

    pub fn is_red(&self) -> bool {
        self.has(Self::RED)
    }

    pub fn is_virtual_safety_car(&self) -> bool {
        self.has(Self::VSC) || self.has(Self::VSC_ENDING)
    }

    /// Whether the lap ran under any neutralization (SC, VSC, or red flag).
    pub fn is_neutralized(&self) -> bool {
        self.is_red() || self.is_safety_car() || self.is_virtual_safety_car()
    }

    /// The single flag a renderer should colour the lap with when several
    /// are active. Precedence: red, then safety car, then VSC. The full set
    /// stays available through the membership tests.
    pub fn dominant(&self) -> Option<TrackFlag> {
        if self.is_red() {
            Some(TrackFlag::Red)
        } else if self.is_safety_car() {
            Some(TrackFlag::SafetyCar)
        } else if self.is_virtual_safety_car() {
            Some(TrackFlag::VirtualSafetyCar)
        } else {
            None
        }
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels = Vec::new();
        if self.is_green() {
            labels.push("green");
        }
        if self.is_yellow() {
            labels.push("yellow");
        }
        if self.is_safety_car() {
            labels.push("safety-car");
        }
        if self.is_red() {
            labels.push("red");
        }
        if self.is_virtual_safety_car() {
            labels.push("vsc");
        }
        if labels.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&labels.join("+"))
        }
    }
}

/// Neutralization flags a renderer distinguishes by colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackFlag {
    Red,
    SafetyCar,
    VirtualSafetyCar,
}

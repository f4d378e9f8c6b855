//! Blood pressure classification.
//!
//! Thresholds follow the American Heart Association reading bands, with a
//! "low" band for hypotension. Bands are not a partition of the
//! (systolic, diastolic) plane: a pair can fall in several of them, so the
//! order of [`BANDS`] decides. Risky wins over everything; low is the
//! catch-all.

use crate::entities::blood_pressure::{BloodPressureClassification, BloodPressureState};

/// Inclusive bounds on one axis; `None` leaves that side open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lower: Option<u16>,
    pub upper: Option<u16>,
}

impl Bounds {
    const fn between(lower: u16, upper: u16) -> Self {
        Self { lower: Some(lower), upper: Some(upper) }
    }

    const fn at_least(lower: u16) -> Self {
        Self { lower: Some(lower), upper: None }
    }

    const fn at_most(upper: u16) -> Self {
        Self { lower: None, upper: Some(upper) }
    }

    pub fn contains(&self, value: u16) -> bool {
        self.lower.map_or(true, |lower| value >= lower) && self.upper.map_or(true, |upper| value <= upper)
    }
}

/// How the systolic and diastolic conditions of a band combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Both axes must be inside their bounds
    Both,
    /// Either axis inside its bounds is enough
    Either,
}

/// One row of the border table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub state: BloodPressureState,
    pub systolic: Bounds,
    pub diastolic: Bounds,
    pub combine: Combine,
}

impl Band {
    pub fn matches(&self, systolic: u16, diastolic: u16) -> bool {
        let systolic_in = self.systolic.contains(systolic);
        let diastolic_in = self.diastolic.contains(diastolic);
        match self.combine {
            Combine::Both => systolic_in && diastolic_in,
            Combine::Either => systolic_in || diastolic_in,
        }
    }
}

/// The normal band, also used by the per-axis checks
pub const NORMAL_BAND: Band = Band {
    state: BloodPressureState::Normal,
    systolic: Bounds::between(90, 119),
    diastolic: Bounds::between(60, 79),
    combine: Combine::Both,
};

/// Border table in evaluation order; the first matching band wins
pub const BANDS: [Band; 6] = [
    Band {
        state: BloodPressureState::Risky,
        systolic: Bounds::at_least(181),
        diastolic: Bounds::at_least(121),
        combine: Combine::Either,
    },
    NORMAL_BAND,
    Band {
        state: BloodPressureState::Elevated,
        systolic: Bounds::between(120, 129),
        diastolic: Bounds::between(60, 79),
        combine: Combine::Both,
    },
    Band {
        state: BloodPressureState::VeryHigh,
        systolic: Bounds::between(140, 180),
        diastolic: Bounds::between(90, 120),
        combine: Combine::Either,
    },
    Band {
        state: BloodPressureState::High,
        systolic: Bounds::between(130, 139),
        diastolic: Bounds::between(80, 89),
        combine: Combine::Either,
    },
    Band {
        state: BloodPressureState::Low,
        systolic: Bounds::at_most(89),
        diastolic: Bounds::at_most(59),
        combine: Combine::Either,
    },
];

/// Categorize blood pressure based on measurements
pub fn categorize_blood_pressure(systolic: u16, diastolic: u16) -> BloodPressureState {
    BANDS
        .iter()
        .find(|band| band.matches(systolic, diastolic))
        .map_or(BloodPressureState::Low, |band| band.state)
}

/// Classify a reading into its state and readable pressure
pub fn classify_blood_pressure(systolic: u16, diastolic: u16) -> BloodPressureClassification {
    let state = categorize_blood_pressure(systolic, diastolic);
    BloodPressureClassification {
        state,
        label: state.label().to_string(),
        pressure: format!("{}/{}", systolic, diastolic),
    }
}

/// Whether systolic alone lies in the normal band
pub fn is_systolic_okay(systolic: u16) -> bool {
    NORMAL_BAND.systolic.contains(systolic)
}

/// Whether diastolic alone lies in the normal band
pub fn is_diastolic_okay(diastolic: u16) -> bool {
    NORMAL_BAND.diastolic.contains(diastolic)
}

use uom::si::{
    f64::{Ratio, TemperatureInterval},
    ratio::ratio,
};

use crate::{
    models::thermal::hx::{
        HxError, Mixer, MixerKind, MixerSide, Mixers, StreamSide,
        surface::{SurfaceTemperatures, surface_lmtd},
    },
    support::constraint::ConstraintResult,
};

/// Whether a [`ReverseExchanger`](super::ReverseExchanger) has been solved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SolveState {
    #[default]
    Unsolved,
    Solved(Solution),
}

impl SolveState {
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveState::Solved(solution) => Some(solution),
            SolveState::Unsolved => None,
        }
    }
}

/// The mixer that lets an existing surface carry the duty.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Compensation {
    /// The existing area matches the unmixed duty.
    #[default]
    None,

    /// A bypass on `side`.
    ///
    /// `fraction` is the share of the stream that still crosses the surface,
    /// so the diverted share is `1 - fraction`.
    Bypass { side: StreamSide, fraction: Ratio },

    /// An admixer on `side`.
    ///
    /// `fraction` is the recirculated flow relative to the stream flow. It is
    /// negative when the surface would need an inlet beyond the stream's own.
    Admixer { side: StreamSide, fraction: Ratio },
}

impl Compensation {
    /// The stream carrying the mixer, if any.
    #[must_use]
    pub fn side(&self) -> Option<StreamSide> {
        match self {
            Compensation::None => None,
            Compensation::Bypass { side, .. } | Compensation::Admixer { side, .. } => Some(*side),
        }
    }

    /// Converts this compensation into forward-model mixers.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the fraction has no forward equivalent, such as a
    /// negative admixer fraction.
    pub fn to_mixers(&self) -> ConstraintResult<Mixers> {
        match *self {
            Compensation::None => Ok(Mixers::default()),
            Compensation::Bypass { side, fraction } => Ok(Mixers::on(
                side,
                Mixer::bypass(1. - fraction.get::<ratio>())?,
            )),
            Compensation::Admixer { side, fraction } => Ok(Mixers::on(
                side,
                Mixer::admixer(fraction.get::<ratio>())?,
            )),
        }
    }
}

/// Surface temperatures and compensation from one reverse solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Classification at the time of the solve.
    pub mixer_type: MixerKind,

    /// Side requested for the solve.
    pub mixer_side: MixerSide,

    /// Hot stream temperatures at the surface.
    pub hot: SurfaceTemperatures,

    /// Cold stream temperatures at the surface.
    pub cold: SurfaceTemperatures,

    pub compensation: Compensation,
}

impl Solution {
    #[must_use]
    pub fn side(&self, side: StreamSide) -> &SurfaceTemperatures {
        match side {
            StreamSide::Hot => &self.hot,
            StreamSide::Cold => &self.cold,
        }
    }

    #[must_use]
    pub fn admixer_fraction(&self) -> Option<Ratio> {
        match self.compensation {
            Compensation::Admixer { fraction, .. } => Some(fraction),
            _ => None,
        }
    }

    #[must_use]
    pub fn bypass_fraction(&self) -> Option<Ratio> {
        match self.compensation {
            Compensation::Bypass { fraction, .. } => Some(fraction),
            _ => None,
        }
    }

    /// Log-mean temperature difference of the solved surface temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InfeasibleThermalDuty`] if the solved temperatures
    /// cross.
    pub fn logarithmic_temperature_difference(&self) -> Result<TemperatureInterval, HxError> {
        surface_lmtd(&self.hot, &self.cold)
    }
}

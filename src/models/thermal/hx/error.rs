use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::support::{constraint::ConstraintError, lambert_w::LambertWError};

use super::{MixerKind, StreamSide};

/// Errors that can occur while sizing or compensating an exchanger.
#[derive(Debug, Error)]
pub enum HxError {
    /// An unknown mixer or side token, or a compensation without a side.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A supplied quantity violates its numeric constraint.
    #[error("invalid input")]
    InvalidInput(#[from] ConstraintError),

    /// The exchanger end differences cross or are not finite.
    ///
    /// Note: Either value may be NaN if the inputs produced non-numeric results.
    #[error("infeasible thermal duty: delta_t_a={delta_t_a:?}, delta_t_b={delta_t_b:?}")]
    InfeasibleThermalDuty {
        /// Hot exchanger outlet minus cold exchanger inlet.
        delta_t_a: TemperatureInterval,

        /// Hot exchanger inlet minus cold exchanger outlet.
        delta_t_b: TemperatureInterval,
    },

    /// No compensated end difference exists for the requested mixer placement.
    #[error("infeasible {mixer} on the {side} side: seed={seed:?}, target={target:?}")]
    InfeasibleCompensation {
        /// Required mixer classification.
        mixer: MixerKind,

        /// Stream carrying the mixer.
        side: StreamSide,

        /// Fixed end difference the solve starts from.
        seed: TemperatureInterval,

        /// Log-mean temperature difference forced by the existing area.
        target: TemperatureInterval,
    },

    /// The lower-branch Lambert W root find failed.
    #[error("lambert w evaluation failed")]
    LambertW(#[from] LambertWError),
}

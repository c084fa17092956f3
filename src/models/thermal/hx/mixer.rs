//! Mixer placement and classification.
//!
//! A bypass diverts part of one stream around the exchanger surface and an
//! admixer recirculates part of that stream's outlet back to its inlet. Either
//! way the stream leaving the mixer outlet is unchanged, only the temperatures
//! seen by the surface move.

use std::{fmt, str::FromStr};

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{
    Constrained, ConstraintResult, UnitInterval, UnitIntervalUpperOpen,
};

use super::HxError;

/// One of the two streams of an exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamSide {
    Hot,
    Cold,
}

impl StreamSide {
    /// Both sides, hot first.
    pub const BOTH: [StreamSide; 2] = [StreamSide::Hot, StreamSide::Cold];

    /// The sign of this side's temperature change along its flow path.
    ///
    /// The hot stream cools and the cold stream warms.
    pub(crate) fn direction(self) -> f64 {
        match self {
            StreamSide::Hot => -1.,
            StreamSide::Cold => 1.,
        }
    }
}

/// Side carrying a compensating mixer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MixerSide {
    #[default]
    None,
    Hot,
    Cold,
}

impl MixerSide {
    /// The stream this side refers to, or `None` for [`MixerSide::None`].
    #[must_use]
    pub fn stream(self) -> Option<StreamSide> {
        match self {
            MixerSide::None => None,
            MixerSide::Hot => Some(StreamSide::Hot),
            MixerSide::Cold => Some(StreamSide::Cold),
        }
    }
}

impl From<StreamSide> for MixerSide {
    fn from(side: StreamSide) -> Self {
        match side {
            StreamSide::Hot => MixerSide::Hot,
            StreamSide::Cold => MixerSide::Cold,
        }
    }
}

/// Fraction-free mixer classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MixerKind {
    #[default]
    None,
    Bypass,
    Admixer,
}

/// A mixer on one stream of a forward exchanger.
///
/// A zero fraction of either kind behaves exactly like [`Mixer::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Mixer {
    #[default]
    None,

    /// Share of the stream routed around the surface, in `[0, 1)`.
    Bypass(Constrained<Ratio, UnitIntervalUpperOpen>),

    /// Recirculated outlet flow relative to the stream's own flow, in `[0, 1]`.
    Admixer(Constrained<Ratio, UnitInterval>),
}

impl Mixer {
    /// Creates a bypass from a plain fraction.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `fraction` is outside `[0, 1)`.
    pub fn bypass(fraction: f64) -> ConstraintResult<Self> {
        Ok(Self::Bypass(UnitIntervalUpperOpen::new(Ratio::new::<ratio>(
            fraction,
        ))?))
    }

    /// Creates an admixer from a plain fraction.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `fraction` is outside `[0, 1]`.
    pub fn admixer(fraction: f64) -> ConstraintResult<Self> {
        Ok(Self::Admixer(UnitInterval::new(Ratio::new::<ratio>(
            fraction,
        ))?))
    }

    /// The classification of this mixer.
    #[must_use]
    pub fn kind(&self) -> MixerKind {
        match self {
            Mixer::None => MixerKind::None,
            Mixer::Bypass(_) => MixerKind::Bypass,
            Mixer::Admixer(_) => MixerKind::Admixer,
        }
    }

    /// The mixer fraction, zero for [`Mixer::None`].
    #[must_use]
    pub fn fraction(&self) -> f64 {
        match self {
            Mixer::None => 0.,
            Mixer::Bypass(f) => f.as_ref().get::<ratio>(),
            Mixer::Admixer(f) => f.as_ref().get::<ratio>(),
        }
    }

    /// Share of the stream's flow that crosses the exchanger surface.
    pub(crate) fn flow_factor(&self) -> f64 {
        match self {
            Mixer::None => 1.,
            Mixer::Bypass(_) => 1. - self.fraction(),
            Mixer::Admixer(_) => 1. + self.fraction(),
        }
    }
}

/// Mixers on both streams of a forward exchanger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mixers {
    pub hot: Mixer,
    pub cold: Mixer,
}

impl Mixers {
    /// A single mixer on one side, none on the other.
    #[must_use]
    pub fn on(side: StreamSide, mixer: Mixer) -> Self {
        let mut mixers = Self::default();
        *mixers.side_mut(side) = mixer;
        mixers
    }

    #[must_use]
    pub fn side(&self, side: StreamSide) -> &Mixer {
        match side {
            StreamSide::Hot => &self.hot,
            StreamSide::Cold => &self.cold,
        }
    }

    pub fn side_mut(&mut self, side: StreamSide) -> &mut Mixer {
        match side {
            StreamSide::Hot => &mut self.hot,
            StreamSide::Cold => &mut self.cold,
        }
    }
}

fn unknown_token(what: &str, token: &str) -> HxError {
    HxError::InvalidConfiguration(format!("unknown {what} `{token}`"))
}

impl FromStr for StreamSide {
    type Err = HxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(StreamSide::Hot),
            "cold" => Ok(StreamSide::Cold),
            _ => Err(unknown_token("stream side", s)),
        }
    }
}

impl FromStr for MixerSide {
    type Err = HxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(MixerSide::None),
            "hot" => Ok(MixerSide::Hot),
            "cold" => Ok(MixerSide::Cold),
            _ => Err(unknown_token("mixer side", s)),
        }
    }
}

impl FromStr for MixerKind {
    type Err = HxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(MixerKind::None),
            "bypass" => Ok(MixerKind::Bypass),
            "admixer" => Ok(MixerKind::Admixer),
            _ => Err(unknown_token("mixer type", s)),
        }
    }
}

impl fmt::Display for StreamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StreamSide::Hot => "hot",
            StreamSide::Cold => "cold",
        })
    }
}

impl fmt::Display for MixerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stream() {
            Some(side) => side.fmt(f),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for MixerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MixerKind::None => "none",
            MixerKind::Bypass => "bypass",
            MixerKind::Admixer => "admixer",
        })
    }
}

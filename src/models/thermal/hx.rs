//! Two-stream counter-flow heat exchangers with bypass and admixer mixers.
//!
//! - [`ForwardExchanger`] sizes a surface for a duty, with an optional mixer
//!   on each stream.
//! - [`ReverseExchanger`] takes an existing surface and finds the mixer that
//!   lets it carry a duty.
//!
//! [`ForwardHx`] and [`ReverseHx`] expose both as [`twine_core::Model`]s.

mod adapters;
mod error;
mod forward;
mod mixer;
mod reverse;
mod streams;
mod surface;

#[cfg(test)]
mod test_support;

pub use adapters::{ForwardHx, ReverseHx};
pub use error::HxError;
pub use forward::{ForwardExchanger, ForwardResults, ForwardStreamResults};
pub use mixer::{Mixer, MixerKind, MixerSide, Mixers, StreamSide};
pub use reverse::{Compensation, ReverseExchanger, Solution, SolveState};
pub use streams::{StreamData, StreamPair};
pub use surface::SurfaceTemperatures;

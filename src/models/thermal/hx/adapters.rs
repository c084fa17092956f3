//! [`Model`] adapters over the exchanger types.
//!
//! Each adapter is a thin wrapper that delegates to [`ForwardExchanger`] or
//! [`ReverseExchanger`], so the exchangers compose with Twine solvers.

use twine_core::Model;

use super::{ForwardExchanger, ForwardResults, HxError, MixerSide, ReverseExchanger, Solution};

/// Sizes a [`ForwardExchanger`], producing every derived value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardHx;

impl Model for ForwardHx {
    type Input = ForwardExchanger;
    type Output = ForwardResults;
    type Error = HxError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.results()
    }
}

/// Compensates a [`ReverseExchanger`] with a mixer on a fixed side.
///
/// The input exchanger is not modified, so its stored solution is untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseHx {
    pub mixer_side: MixerSide,
}

impl ReverseHx {
    #[must_use]
    pub fn new(mixer_side: MixerSide) -> Self {
        Self { mixer_side }
    }
}

impl Model for ReverseHx {
    type Input = ReverseExchanger;
    type Output = Solution;
    type Error = HxError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.compute(self.mixer_side)
    }
}

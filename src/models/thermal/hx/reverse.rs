//! Compensation of an existing counter-flow exchanger.
//!
//! An existing surface generally does not match the area the duty calls for.
//! A bypass spoils a surface that is too large, and an admixer is placed when
//! it is too small. The reverse model classifies which one is needed and, for
//! a chosen side, solves the surface temperatures that make the existing area
//! carry the duty exactly.
//!
//! Holding the existing area fixes the log-mean temperature difference
//! `L = Q / (U·A)`. The mixer pins one end difference `ΔT₀`, so the other end
//! `ΔT` must satisfy `(ΔT - ΔT₀) / ln(ΔT / ΔT₀) = L`. With `x = ΔT₀ / L` and
//! `y = ΔT / L` this is `y·e^-y = x·e^-x`, whose root other than `x` is
//! `y = -W₋₁(-x·e^-x)` for `0 < x < 1`.

mod solution;

pub use solution::{Compensation, SolveState, Solution};

use std::cmp::Ordering;

use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    hx::{HeatLoad, lmtd_for_area, required_area},
    lambert_w::{LambertWConfig, lambert_w_lower_with},
    units::TemperatureDifference,
};

use super::{
    HxError, MixerKind, MixerSide, StreamPair, StreamSide,
    surface::{SurfaceTemperatures, surface_lmtd},
};

/// An exchanger with a fixed surface area, compensated by a mixer.
#[derive(Debug, Clone)]
pub struct ReverseExchanger {
    pub streams: StreamPair,
    pub heat_load: HeatLoad,

    /// Surface area already installed.
    pub existent_area: Constrained<Area, StrictlyPositive>,

    /// Configuration for the Lambert W root find.
    pub solver: LambertWConfig,

    state: SolveState,
}

impl ReverseExchanger {
    /// Creates an unsolved exchanger with the default solver configuration.
    #[must_use]
    pub fn new(
        streams: StreamPair,
        heat_load: HeatLoad,
        existent_area: Constrained<Area, StrictlyPositive>,
    ) -> Self {
        Self {
            streams,
            heat_load,
            existent_area,
            solver: LambertWConfig::default(),
            state: SolveState::Unsolved,
        }
    }

    #[must_use]
    pub fn with_solver(mut self, solver: LambertWConfig) -> Self {
        self.solver = solver;
        self
    }

    #[must_use]
    pub fn overall_heat_transfer_coefficient(&self) -> HeatTransfer {
        self.streams.overall_heat_transfer_coefficient()
    }

    /// Stream outlet temperature from the energy balance.
    #[must_use]
    pub fn outlet_temperature(&self, side: StreamSide) -> ThermodynamicTemperature {
        self.streams.outlet_temperature(side, self.heat_load)
    }

    /// Surface temperatures without any mixer.
    fn unmixed_surface(&self, side: StreamSide) -> SurfaceTemperatures {
        SurfaceTemperatures {
            inlet: self.streams.side(side).inlet_temperature,
            outlet: self.outlet_temperature(side),
        }
    }

    /// Area the duty would need with no mixer on either side.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InfeasibleThermalDuty`] if the unmixed temperatures
    /// cross.
    pub fn area_no_mixer(&self) -> Result<Area, HxError> {
        let lmtd = surface_lmtd(
            &self.unmixed_surface(StreamSide::Hot),
            &self.unmixed_surface(StreamSide::Cold),
        )?;
        Ok(required_area(
            self.heat_load,
            self.overall_heat_transfer_coefficient(),
            lmtd,
        ))
    }

    /// Mixer needed to make the existing area carry the duty.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InfeasibleThermalDuty`] if the unmixed temperatures
    /// cross.
    pub fn mixer_type(&self) -> Result<MixerKind, HxError> {
        let needed = self.area_no_mixer()?.get::<square_meter>();
        let existing = self.existent_area.as_ref().get::<square_meter>();

        Ok(match needed.total_cmp(&existing) {
            Ordering::Greater => MixerKind::Admixer,
            Ordering::Less => MixerKind::Bypass,
            Ordering::Equal => MixerKind::None,
        })
    }

    /// Log-mean temperature difference the existing area forces on the duty.
    #[must_use]
    pub fn logarithmic_mean_temperature_difference(&self) -> TemperatureInterval {
        lmtd_for_area(
            self.heat_load,
            self.overall_heat_transfer_coefficient(),
            self.existent_area.into_inner(),
        )
    }

    /// Solves the compensated surface temperatures without storing them.
    ///
    /// # Errors
    ///
    /// - [`HxError::InfeasibleThermalDuty`] if the unmixed temperatures cross.
    /// - [`HxError::InvalidConfiguration`] if a mixer is needed but
    ///   `mixer_side` is [`MixerSide::None`].
    /// - [`HxError::InfeasibleCompensation`] if no compensated end difference
    ///   exists on the requested side. The mixer holds one unmixed end
    ///   difference fixed, and that end must lie in `(0, L]` for the target
    ///   LMTD `L`. An end larger than `L` has no lower-branch partner, so a
    ///   bypass fails on both sides when both unmixed ends exceed `L`.
    /// - [`HxError::LambertW`] if the root find fails.
    pub fn compute(&self, mixer_side: MixerSide) -> Result<Solution, HxError> {
        let mixer_type = self.mixer_type()?;
        let unmixed_hot = self.unmixed_surface(StreamSide::Hot);
        let unmixed_cold = self.unmixed_surface(StreamSide::Cold);

        let mut solution = Solution {
            mixer_type,
            mixer_side,
            hot: unmixed_hot,
            cold: unmixed_cold,
            compensation: Compensation::None,
        };
        tracing::debug!(%mixer_type, %mixer_side, "classified exchanger compensation");

        if mixer_type == MixerKind::None {
            return Ok(solution);
        }
        let Some(side) = mixer_side.stream() else {
            return Err(HxError::InvalidConfiguration(format!(
                "{mixer_type} compensation needs a hot or cold mixer side"
            )));
        };

        let target = self.logarithmic_mean_temperature_difference();
        let inlet = self.streams.side(side).inlet_temperature;
        let solve_end = |seed| self.other_end(seed, target, mixer_type, side);

        solution.compensation = match (mixer_type, side) {
            (MixerKind::Admixer, StreamSide::Hot) => {
                let delta_t_b = solve_end(unmixed_hot.outlet.minus(unmixed_cold.inlet))?;
                solution.hot.inlet = solution.cold.outlet + delta_t_b;
                Compensation::Admixer {
                    side,
                    fraction: ratio_of(
                        inlet.minus(solution.hot.inlet),
                        solution.hot.inlet.minus(unmixed_hot.outlet),
                    ),
                }
            }
            (MixerKind::Admixer, StreamSide::Cold) => {
                let delta_t_a = solve_end(unmixed_hot.inlet.minus(unmixed_cold.outlet))?;
                solution.cold.inlet = solution.hot.outlet - delta_t_a;
                Compensation::Admixer {
                    side,
                    fraction: ratio_of(
                        inlet.minus(solution.cold.inlet),
                        solution.cold.inlet.minus(unmixed_cold.outlet),
                    ),
                }
            }
            (MixerKind::Bypass, StreamSide::Hot) => {
                let delta_t_a = solve_end(unmixed_hot.inlet.minus(unmixed_cold.outlet))?;
                solution.hot.outlet = solution.cold.inlet + delta_t_a;
                Compensation::Bypass {
                    side,
                    fraction: ratio_of(
                        unmixed_hot.outlet.minus(inlet),
                        solution.hot.outlet.minus(inlet),
                    ),
                }
            }
            (MixerKind::Bypass, StreamSide::Cold) => {
                let delta_t_b = solve_end(unmixed_hot.outlet.minus(unmixed_cold.inlet))?;
                solution.cold.outlet = solution.hot.inlet - delta_t_b;
                Compensation::Bypass {
                    side,
                    fraction: ratio_of(
                        unmixed_cold.outlet.minus(inlet),
                        solution.cold.outlet.minus(inlet),
                    ),
                }
            }
            (MixerKind::None, _) => Compensation::None,
        };

        Ok(solution)
    }

    /// Solves the compensated surface temperatures, stores a copy and
    /// returns it.
    ///
    /// A later change to the inputs does not affect the stored solution. A
    /// failed solve leaves the exchanger unsolved.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`ReverseExchanger::compute`].
    pub fn solve(&mut self, mixer_side: MixerSide) -> Result<Solution, HxError> {
        let result = self.compute(mixer_side);
        self.state = match &result {
            Ok(solution) => SolveState::Solved(*solution),
            Err(_) => SolveState::Unsolved,
        };
        result
    }

    /// The stored solution, if [`ReverseExchanger::solve`] has succeeded.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.state.solution()
    }

    #[must_use]
    pub fn state(&self) -> &SolveState {
        &self.state
    }

    /// End difference paired with `seed` so the surface has the `target` LMTD.
    fn other_end(
        &self,
        seed: TemperatureInterval,
        target: TemperatureInterval,
        mixer: MixerKind,
        side: StreamSide,
    ) -> Result<TemperatureInterval, HxError> {
        if seed == target {
            return Ok(seed);
        }

        let x = seed.get::<delta_kelvin>() / target.get::<delta_kelvin>();
        if !(x.is_finite() && x > 0. && x <= 1.) {
            return Err(HxError::InfeasibleCompensation {
                mixer,
                side,
                seed,
                target,
            });
        }

        let w = lambert_w_lower_with(-x * (-x).exp(), &self.solver)?;
        let beta = -w / x;
        tracing::trace!(x, beta, "compensated end difference");

        Ok(seed * beta)
    }
}

fn ratio_of(numerator: TemperatureInterval, denominator: TemperatureInterval) -> Ratio {
    Ratio::new::<ratio>(numerator.get::<delta_kelvin>() / denominator.get::<delta_kelvin>())
}

//! Simulation of GARCH(p,q) conditional-heteroskedasticity processes
//!
//!   σ²(t) = ω + Σᵢ αᵢ × r²(t-i) + Σⱼ βⱼ × σ²(t-j)
//!   r(t) ~ D(mean, σ²(t))
//!
//! A [`GarchModel`] is validated once at construction: malformed parameters
//! give a [`ConfigurationError`], non-stationary ones a [`NumericalError`].
//! Simulation then cannot fail. It seeds the process at the unconditional
//! variance, builds max(p, q) points of burn-in history with partial lag
//! windows, runs ⌈1.1 × length⌉ full-window steps, and keeps the last
//! `length` points in chronological order.
//!
//! Lag convention: coefficient index 0 is lag 1 (`alphas[0]` multiplies the
//! most recent squared return).

pub mod analysis;
pub mod basic_processes;
pub mod burn_in;
pub mod config;
pub mod error;
pub mod experiment;
pub mod innovation;
pub mod lag_buffer;
pub mod model;
pub mod output;
pub mod params;
pub mod recursion;
pub mod simulator;
pub mod state;
pub mod validation;

pub use error::{ConfigurationError, ExperimentError, GarchError, GarchResult, NumericalError};
pub use innovation::{Innovation, InnovationSampler};
pub use model::GarchModel;
pub use params::GarchParams;
pub use simulator::{SimulationPath, Simulator};

//! Public Twine models.
//!
//! Models are the primary public interface of this crate. Each model type
//! carries its own computation, and a thin [`twine_core::Model`] adapter
//! delegates to it so models compose with Twine solvers.

pub mod thermal;

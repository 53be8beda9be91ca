//! Nachhall Core - DSP primitives for room-acoustics analysis
//!
//! This crate provides the foundational building blocks used by the
//! reverberation analysis engine:
//!
//! - [`BandpassFilter`] - Second-order IIR band-pass stage for octave-band
//!   isolation
//! - Level conversions: [`energy_to_db`], [`amplitude_to_db`]
//! - [`linear_regression`] - Ordinary least-squares fit with R² for decay
//!   slope estimation
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nachhall-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bandpass;
pub mod bands;
pub mod level;
pub mod regression;

pub use bandpass::BandpassFilter;
pub use bands::{EXTENDED_OCTAVE_BANDS, OCTAVE_BANDS};
pub use level::{DB_FLOOR_EPSILON, amplitude_to_db, energy_to_db};
pub use regression::{LinearFit, linear_regression};

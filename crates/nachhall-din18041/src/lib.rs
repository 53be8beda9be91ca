//! Nachhall DIN 18041 - Regulatory targets, compliance, and absorption planning
//!
//! This crate covers the "is this room acceptable, and if not, what do we
//! hang on the walls" half of the system:
//!
//! - [`targets`] - DIN 18041 target reverberation times: the per-band
//!   compliance table (with tolerances) and the volume-scaled planning table
//! - [`evaluate`] - Classification of measured RT60 against targets and
//!   aggregation into an overall verdict
//! - [`sabine`] - Sabine's formula, per-band RT60 prediction from surfaces,
//!   and required-absorption queries
//! - [`material`] - Acoustic materials and surfaces with clamped absorption
//!   coefficients
//! - [`catalog`] - Built-in material and absorber-product lookup tables
//!
//! All tables encode the regulatory standard verbatim; tests assert their
//! exact numeric values.

pub mod catalog;
pub mod evaluate;
pub mod material;
pub mod sabine;
pub mod targets;

pub use catalog::{absorber_products, builtin_materials, recommend_products};
pub use evaluate::{
    BandRt60, EvaluationStatus, Rt60Deviation, TreatmentPriority, evaluate_compliance,
    overall_compliance, treatment_priority,
};
pub use material::{AbsorberProduct, AcousticMaterial, AcousticSurface};
pub use sabine::{SABINE_CONSTANT, required_absorption, rt60_sabine, rt60_spectrum, total_absorption};
pub use targets::{Din18041Target, RoomType, RoomUsage, planning_target_rt60, targets_for};

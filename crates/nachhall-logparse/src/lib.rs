//! Nachhall logparse - Reader for RT60 measurement log files
//!
//! Measurement hardware exports plain-text logs with section headers
//! (`Setup:`, `T20:`, `Correltn:`, `CheckSum:`), `//` comments, and
//! numbers that may use either `.` or `,` as the decimal separator.
//! The parser never fails on malformed input: lines it cannot read are
//! dropped, and suspect values are carried with a `valid` flag instead
//! of aborting the whole file.

mod model;
mod parser;

pub use model::{Rt60Band, Rt60LogModel};
pub use parser::{RT60_MAX_SECONDS, RT60_MIN_SECONDS, parse_log};

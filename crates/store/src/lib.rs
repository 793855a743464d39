#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod workout_log;

pub use workout_log::*;

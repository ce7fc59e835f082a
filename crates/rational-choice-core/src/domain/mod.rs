//! Domain model (bounds, errors, evaluation results).

pub mod bounds;
pub mod errors;
pub mod evaluation;

pub use self::bounds::{Bounds, GateConfig};
pub use self::errors::{ChoiceError, Result};
pub use self::evaluation::Evaluation;

//! rational-choice-core
//!
//! Tiny fuzzy-logic gate for making choices on a continuum of permitted
//! values instead of a hard threshold.
//!
//! # モジュール構成
//! - **domain**: 値オブジェクトとエラー（Bounds, GateConfig, Evaluation, ChoiceError）
//! - **ports**: 単一次元の選択の抽象化（Choose trait）
//! - **dimension**: 1 つの実数値に対する選択（Dimension）
//! - **many_dimensions**: 複数の値に対する選択（ManyDimensions）

pub mod domain;
pub mod ports;
pub mod dimension;
pub mod many_dimensions;

pub use self::dimension::Dimension;
pub use self::domain::{Bounds, ChoiceError, Evaluation, GateConfig, Result};
pub use self::many_dimensions::ManyDimensions;
pub use self::ports::Choose;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

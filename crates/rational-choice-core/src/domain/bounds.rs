//! Bounds - Dimension / ManyDimensions の宣言的な設定

use serde::{Deserialize, Serialize};

/// Bounds は呼び出し側が意図した通りの 2 つのしきい値
///
/// `false_at_or_below` が `true_at_or_above` より大きくてもよい
/// （その場合、小さい値で `true`、大きい値で `false` になる）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds {
    pub false_at_or_below: f64,
    pub true_at_or_above: f64,
}

impl Bounds {
    pub fn new(false_at_or_below: impl Into<f64>, true_at_or_above: impl Into<f64>) -> Self {
        Self {
            false_at_or_below: false_at_or_below.into(),
            true_at_or_above: true_at_or_above.into(),
        }
    }
}

/// GateConfig は多次元ゲートの設定（測定値ごとに 1 つの Bounds、評価順）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    pub dimensions: Vec<Bounds>,
}

impl GateConfig {
    pub fn new(dimensions: Vec<Bounds>) -> Self {
        Self { dimensions }
    }
}

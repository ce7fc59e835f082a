//! Evaluation - 多次元評価の結果（呼び出しごとに再計算、保持しない）

/// Evaluation は 1 回の多次元選択の内訳
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Per-dimension choices, in dimension order.
    pub choices: Vec<bool>,

    /// The final aggregated choice.
    pub outcome: bool,
}

impl Evaluation {
    /// Number of dimensions that chose `true`.
    pub fn truthy(&self) -> usize {
        self.choices.iter().filter(|c| **c).count()
    }

    /// Whether the aggregate step was decided by a random draw.
    ///
    /// Only a mixed set of per-dimension choices leaves the aggregate in its fuzzy zone.
    pub fn was_split(&self) -> bool {
        let k = self.truthy();
        k > 0 && k < self.choices.len()
    }
}

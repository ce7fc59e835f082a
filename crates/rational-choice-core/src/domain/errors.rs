//! Errors - エラー型と分類
//!
//! すべて呼び出し側の設定ミスを表す（リトライしても解決しない）。

use thiserror::Error;

/// ChoiceError は Dimension / ManyDimensions の構築・評価時のエラー
///
/// # 分類
/// - Domain: 補間できる範囲がない（境界値が同じ、または有限でない）
/// - Cardinality: 値の数と次元の数が合わない
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChoiceError {
    /// Both bounds of a dimension compare equal, so there is no range to interpolate over.
    #[error("bounds were the same at {bound}")]
    Domain { bound: f64 },

    /// A bound is NaN or infinite.
    #[error("bound must be a finite number, got {bound}")]
    NonFinite { bound: f64 },

    /// A multi-dimensional choice was constructed without any dimensions.
    #[error("ManyDimensions has no dimensions to evaluate")]
    NoDimensions,

    /// The number of values given to `choose` differs from the number of dimensions.
    #[error("ManyDimensions has {dimensions} dimensions but {values} values were given")]
    Cardinality { dimensions: usize, values: usize },
}

impl ChoiceError {
    /// Whether this error is about the range of a single dimension.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. } | Self::NonFinite { .. })
    }

    /// Whether this error is about the arity of a multi-dimensional choice.
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Self::NoDimensions | Self::Cardinality { .. })
    }
}

pub type Result<T> = std::result::Result<T, ChoiceError>;

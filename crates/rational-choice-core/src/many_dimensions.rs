//! ManyDimensions - 多次元の選択
//!
//! 各次元がそれぞれの値で選択し、`true` になった数 `k` を `[0, n]` の
//! Dimension でもう一度評価します。`n` 次元中 `k` 次元が `true` なら、
//! 最終結果は確率 `k / n` で `true` になります。

use rand::RngCore;
use tracing::{debug, trace};

use crate::dimension::Dimension;
use crate::domain::{ChoiceError, Evaluation, GateConfig, Result};
use crate::ports::Choose;

/// ManyDimensions は複数の測定値をまとめて 1 つの bool に落とす
///
/// # 乱数源
/// - 1 つの乱数源を次元の格納順に渡し、最後に集約ステップで使う
/// - seed 固定の乱数源なら選択の列全体が再現可能
#[derive(Debug, Clone)]
pub struct ManyDimensions<D = Dimension> {
    dimensions: Vec<D>,
    aggregate: Dimension,
}

impl<D: Choose> ManyDimensions<D> {
    /// Fails with `ChoiceError::NoDimensions` when `dimensions` is empty.
    pub fn new(dimensions: Vec<D>) -> Result<Self> {
        if dimensions.is_empty() {
            return Err(ChoiceError::NoDimensions);
        }
        let n = dimensions.len() as f64;
        let aggregate = Dimension::new(0.0, n)?;
        debug!(dimensions = dimensions.len(), "created multi-dimensional choice");
        Ok(Self {
            dimensions,
            aggregate,
        })
    }

    /// Number of dimensions, and of values `choose` expects.
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Always false; construction rejects an empty set of dimensions.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// The dimensions in evaluation order.
    pub fn dimensions(&self) -> &[D] {
        &self.dimensions
    }

    /// Choose using the thread-local generator.
    pub fn choose<V: Copy + Into<f64>>(&self, values: &[V]) -> Result<bool> {
        self.choose_with(values, &mut rand::thread_rng())
    }

    /// Choose using the given random source.
    pub fn choose_with<V, R>(&self, values: &[V], rng: &mut R) -> Result<bool>
    where
        V: Copy + Into<f64>,
        R: RngCore + ?Sized,
    {
        Ok(self.evaluate_with(values, rng)?.outcome)
    }

    /// Like `choose_with`, but also returns the per-dimension choices.
    ///
    /// Fails with `ChoiceError::Cardinality` before any draw when the number
    /// of values differs from the number of dimensions.
    pub fn evaluate_with<V, R>(&self, values: &[V], mut rng: &mut R) -> Result<Evaluation>
    where
        V: Copy + Into<f64>,
        R: RngCore + ?Sized,
    {
        if values.len() != self.dimensions.len() {
            return Err(ChoiceError::Cardinality {
                dimensions: self.dimensions.len(),
                values: values.len(),
            });
        }

        // `&mut R` is sized even when `R` is not, so it coerces to `dyn RngCore`.
        let choices: Vec<bool> = self
            .dimensions
            .iter()
            .zip(values)
            .map(|(dimension, value)| dimension.choose_with((*value).into(), &mut rng))
            .collect();

        let truthy = choices.iter().filter(|c| **c).count();
        let outcome = self.aggregate.choose_with(truthy as f64, rng);
        trace!(
            dimensions = choices.len(),
            truthy,
            outcome,
            "evaluated multi-dimensional choice"
        );

        Ok(Evaluation { choices, outcome })
    }
}

impl ManyDimensions<Dimension> {
    /// Build a gate from configured bounds, in configuration order.
    pub fn from_config(config: &GateConfig) -> Result<Self> {
        let dimensions = config
            .dimensions
            .iter()
            .map(|bounds| Dimension::from_bounds(*bounds))
            .collect::<Result<Vec<_>>>()?;
        Self::new(dimensions)
    }
}

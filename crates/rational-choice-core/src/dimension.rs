//! Dimension - 単一次元（1 つの実数値）のファジーな選択

use rand::{Rng, RngCore};

use crate::domain::{Bounds, ChoiceError, Result};
use crate::ports::Choose;

/// Dimension は 2 つの境界値の間に線形の確率ランプを持つ測定軸
///
/// # 判定
/// - `false_at_or_below` 以下: 常に `false`
/// - `true_at_or_above` 以上: 常に `true`
/// - その間（両端を含まない）: true 側の境界に近いほど `true` になる確率が線形に上がる
///
/// ```ignore
/// // 接続数 10 なら余裕、20 なら混雑
/// let accept = Dimension::new(20, 10)?;
/// let ok = accept.choose(current_connections + 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    lower: f64,
    upper: f64,
    flipped: bool,
}

impl Dimension {
    /// Create a dimension from its false and true thresholds.
    ///
    /// The thresholds may be given in either numeric order. Fails with
    /// `ChoiceError::Domain` when they are equal and `ChoiceError::NonFinite`
    /// when either is NaN or infinite.
    pub fn new(
        false_at_or_below: impl Into<f64>,
        true_at_or_above: impl Into<f64>,
    ) -> Result<Self> {
        let false_at_or_below = false_at_or_below.into();
        let true_at_or_above = true_at_or_above.into();

        for bound in [false_at_or_below, true_at_or_above] {
            if !bound.is_finite() {
                return Err(ChoiceError::NonFinite { bound });
            }
        }
        if false_at_or_below == true_at_or_above {
            return Err(ChoiceError::Domain {
                bound: false_at_or_below,
            });
        }

        Ok(Self {
            lower: false_at_or_below.min(true_at_or_above),
            upper: false_at_or_below.max(true_at_or_above),
            flipped: false_at_or_below > true_at_or_above,
        })
    }

    /// Create a dimension from configured bounds.
    pub fn from_bounds(bounds: Bounds) -> Result<Self> {
        Self::new(bounds.false_at_or_below, bounds.true_at_or_above)
    }

    /// The numerically smaller bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The numerically larger bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether the false bound lies above the true bound.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// The bounds as they were given to `new`.
    pub fn bounds(&self) -> Bounds {
        if self.flipped {
            Bounds::new(self.upper, self.lower)
        } else {
            Bounds::new(self.lower, self.upper)
        }
    }

    /// Whether choosing on `value` involves a random draw.
    ///
    /// Both bounds are excluded: a value exactly on a bound is always decided.
    pub fn is_fuzzy(&self, value: impl Into<f64>) -> bool {
        let value = value.into();
        value > self.lower && value < self.upper
    }

    /// Probability that `choose` returns `true` for `value`.
    pub fn probability(&self, value: impl Into<f64>) -> f64 {
        let value = value.into();
        let p = if self.is_fuzzy(value) {
            self.position(value)
        } else if value >= self.upper {
            1.0
        } else {
            0.0
        };
        if self.flipped { 1.0 - p } else { p }
    }

    /// Choose using the thread-local generator.
    pub fn choose(&self, value: impl Into<f64>) -> bool {
        self.choose_with(value, &mut rand::thread_rng())
    }

    /// Choose using the given random source.
    ///
    /// Draws exactly one uniform number when `value` is fuzzy and none otherwise.
    pub fn choose_with<R: RngCore + ?Sized>(&self, value: impl Into<f64>, rng: &mut R) -> bool {
        let value = value.into();
        let choice = if self.is_fuzzy(value) {
            rng.r#gen::<f64>() < self.position(value)
        } else {
            value >= self.upper
        };
        choice ^ self.flipped
    }

    /// Normalized position of a fuzzy value, inside (0, 1).
    fn position(&self, value: f64) -> f64 {
        let span = self.upper - self.lower;
        if span.is_finite() {
            (value - self.lower) / span
        } else {
            // halved so differences between bounds near f64::MAX stay finite
            (value / 2.0 - self.lower / 2.0) / (self.upper / 2.0 - self.lower / 2.0)
        }
    }
}

impl TryFrom<Bounds> for Dimension {
    type Error = ChoiceError;

    fn try_from(bounds: Bounds) -> Result<Self> {
        Self::from_bounds(bounds)
    }
}

impl Choose for Dimension {
    fn choose_with(&self, value: f64, rng: &mut dyn RngCore) -> bool {
        Dimension::choose_with(self, value, rng)
    }
}

//! Choose port - 単一次元の選択の抽象化

use rand::RngCore;

/// Choose は 1 つの実数値から true / false を選ぶ
///
/// # テスト容易性
/// - 乱数源は呼び出し側から注入する（`choose_with`）
/// - テストでは seed 固定の `StdRng` やスクリプト化した乱数源を使用
pub trait Choose {
    /// Choose using the given random source.
    ///
    /// Implementations must draw at most once per call, and only when the
    /// outcome is actually uncertain.
    fn choose_with(&self, value: f64, rng: &mut dyn RngCore) -> bool;

    /// Choose using the thread-local generator.
    fn choose(&self, value: f64) -> bool {
        self.choose_with(value, &mut rand::thread_rng())
    }
}

impl<T: Choose + ?Sized> Choose for &T {
    fn choose_with(&self, value: f64, rng: &mut dyn RngCore) -> bool {
        (**self).choose_with(value, rng)
    }
}

impl<T: Choose + ?Sized> Choose for Box<T> {
    fn choose_with(&self, value: f64, rng: &mut dyn RngCore) -> bool {
        (**self).choose_with(value, rng)
    }
}

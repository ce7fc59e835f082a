//! Random source test doubles.

use std::collections::VecDeque;

use rand::RngCore;

/// A random source that replays a fixed list of uniform draws.
///
/// Each value `u` in `[0, 1)` is encoded so that `Rng::gen::<f64>()` returns
/// `u` (up to 53 bits of precision). Panics when the script runs out, so an
/// empty script asserts that no draw happens at all.
pub(crate) struct ScriptedRng {
    draws: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedRng {
    pub(crate) fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new([])
    }

    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    pub(crate) fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let u = self
            .draws
            .pop_front()
            .expect("unexpected random draw: script exhausted");
        assert!((0.0..1.0).contains(&u), "scripted draw {u} outside [0, 1)");
        self.consumed += 1;
        // Standard<f64> keeps the top 53 bits
        ((u * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn replays_draws_in_order() {
        let mut rng = ScriptedRng::new([0.5, 0.25, 0.0]);
        assert_eq!(rng.r#gen::<f64>(), 0.5);
        assert_eq!(rng.r#gen::<f64>(), 0.25);
        assert_eq!(rng.r#gen::<f64>(), 0.0);
        assert_eq!(rng.consumed(), 3);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "unexpected random draw")]
    fn empty_script_panics_on_draw() {
        let mut rng = ScriptedRng::empty();
        let _: f64 = rng.r#gen();
    }
}

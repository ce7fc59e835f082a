//! Ports - 抽象化レイヤー
//!
//! 単一の値を評価する「次元」の契約を trait として定義します。
//! ManyDimensions は具体的な Dimension ではなくこの trait に依存します。

pub mod choose;

#[cfg(test)]
pub(crate) mod scripted;

pub use self::choose::Choose;

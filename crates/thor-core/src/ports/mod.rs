//! Ports - 抽象化レイヤー
//!
//! dispatch が依存するのはこの trait だけです。ホストオブジェクトの実装
//! （手書きの struct、CommandSet など）は差し替え可能です。

pub mod target;

pub use self::target::{CommandMeta, Target, Visibility};

//! App - dispatch 層
//!
//! # 主要コンポーネント
//! - **dispatch**: visibility チェック → invoke → 失敗の分類
//! - **translate**: ErrorTranslator（呼び出し失敗 → ThorError）
//! - **usage**: usage 行の組み立て
//! - **config**: DispatchConfig

pub mod config;
pub mod dispatch;
pub mod translate;
pub mod usage;

pub use self::config::DispatchConfig;
pub use self::translate::ErrorTranslator;

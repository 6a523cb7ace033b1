//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **CommandSet**: クロージャで組み立てるインメモリの Target（テスト・CLI 用）

pub mod command_set;

pub use self::command_set::{CommandSet, MemberFn};

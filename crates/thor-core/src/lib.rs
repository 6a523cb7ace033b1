//! thor-core
//!
//! Command dispatch for the Thor command-line framework: run a named task on
//! a host object, classify what went wrong, and render usage lines.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（task, descriptor, namespace, failure, errors）
//! - **ports**: 抽象化レイヤー（Target, CommandMeta）
//! - **app**: dispatch ロジック（dispatch, translate, usage, config）
//! - **impls**: 実装（CommandSet: クロージャベースの Target）

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;

pub use app::DispatchConfig;
pub use domain::{
    ArgumentDescriptor, Arity, Descriptor, FailureKind, Frame, InvokeFailure, OptionDescriptor,
    Task, TaskKind, ThorError,
};
pub use impls::CommandSet;
pub use ports::{CommandMeta, Target, Visibility};

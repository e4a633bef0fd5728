//! taskdeck-core
//!
//! Core building blocks for the Taskdeck backend.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, spec, errors, counts）
//! - **ports**: 抽象化レイヤー（TaskStore, Clock, IdGenerator）
//! - **store**: TaskStore 実装（in-memory 実装）
//! - **service**: アプリケーションロジック（list / create / update_status / delete）
//!
//! HTTP の型はこのクレートに持ち込まない。エンベロープやステータスコードへの
//! 変換は taskdeck-server 側の責務。

pub mod domain;
pub mod ports;
pub mod service;
pub mod store;

//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - ハンドラは薄く保ち、ビジネスロジックは taskdeck-core に委譲

pub mod health;
pub mod tasks;

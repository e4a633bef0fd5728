//! taskdeck-server
//!
//! Taskdeck の HTTP 面。taskdeck-core の TaskService を axum のルートに
//! 紐付け、結果を JSON エンベロープで返します。静的なシングルページ
//! フロントエンドも同じサーバから配信します。
//!
//! バイナリ本体は `main.rs`。ここを library crate にしてあるのは
//! integration test からルータを組み立てられるようにするため。

pub mod rest;

use std::time::Instant;

use taskdeck_core::service::TaskService;

/// Shared application dependencies, one per process.
pub struct AppContext {
    pub service: TaskService,
    pub started_at: Instant,
}

impl AppContext {
    /// Production wiring (in-memory store, system clock, UUID v4).
    pub fn new() -> Self {
        Self {
            service: TaskService::in_memory(),
            started_at: Instant::now(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

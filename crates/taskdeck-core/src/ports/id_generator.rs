//! IdGenerator port - ID 生成の抽象化
//!
//! IdGenerator は新しいタスクの ID を生成するためのインターフェースです。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UuidGenerator**: UUID v4 ベース（本番用）

use uuid::Uuid;

use crate::domain::ids::TaskId;

/// IdGenerator は一意な ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait IdGenerator: Send + Sync {
    /// Task ID を生成
    fn generate_task_id(&self) -> TaskId;
}

/// UuidGenerator は UUID v4（ランダム）ベースの ID 生成器
///
/// v4 はランダム生成なので Clock に依存しない。衝突確率は実用上無視できる。
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_task_id(&self) -> TaskId {
        TaskId::from_uuid(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_generates_unique_ids() {
        let id_gen = UuidGenerator;

        let id1 = id_gen.generate_task_id();
        let id2 = id_gen.generate_task_id();
        let id3 = id_gen.generate_task_id();

        // 各 ID が一意であることを確認
        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn generated_ids_are_v4() {
        let id = UuidGenerator.generate_task_id();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }
}

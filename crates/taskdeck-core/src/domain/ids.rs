//! Domain identifiers (strongly-typed IDs).
//!
//! # UUID ベースの ID + ジェネリック実装
//! API の契約上、ID は UUID（v4）の文字列です。ワイヤ上では素の
//! `"550e8400-e29b-..."` 形式になります（プレフィックスなし）。
//!
//! ## Phantom Type パターン
//! `Id<T>` というジェネリック型で共通実装を提供しつつ、
//! `T` は実行時には使わない（PhantomData）マーカー型として、
//! コンパイル時の型安全性を提供します。将来エンティティが増えても
//! ID 型を混同できません。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// IdMarker は各 ID 型のマーカー trait
///
/// メソッドは持たない。`Id<T>` の `T` に入れられる型を限定するためだけに
/// 存在します。
pub trait IdMarker: Send + Sync + 'static {}

/// ジェネリック ID 型
///
/// `T` は PhantomData で、実行時にはメモリを消費しませんが、
/// コンパイル時に型安全性を提供します。
///
/// ワイヤ表現は素の UUID 文字列（`#[serde(transparent)]`）。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    uuid: Uuid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// UUID から Id を作成
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: PhantomData,
        }
    }

    /// 内部の UUID を取得
    pub fn as_uuid(&self) -> Uuid {
        self.uuid
    }
}

impl<T: IdMarker> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

/// パスパラメータなど、文字列からのパース。
/// UUID として不正なら Err（HTTP 層ではこれが 400 になる）。
impl<T: IdMarker> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.uuid.fmt(f)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Task のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {}

/// Identifier of a Task (the sole domain entity).
pub type TaskId = Id<Task>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = TaskId::from_uuid(uuid);

        // プレフィックスなしの素の UUID 文字列
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TaskId::from_uuid(Uuid::new_v4());

        let json = serde_json::to_value(id).unwrap();
        assert!(json.is_string());

        let back: TaskId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn parses_from_str() {
        let uuid = Uuid::new_v4();
        let id: TaskId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("not-a-uuid".parse::<TaskId>().is_err());
        assert!("".parse::<TaskId>().is_err());
        // 16進でも桁が足りなければ不正
        assert!("550e8400".parse::<TaskId>().is_err());
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;

        // Id<T> のサイズは Uuid と同じ（16 bytes）
        assert_eq!(size_of::<TaskId>(), size_of::<Uuid>());
        assert_eq!(size_of::<Uuid>(), 16);
    }
}

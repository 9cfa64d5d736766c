//! 名单传输编解码
//!
//! 导航参数只能携带字符串，跨页面传递名单前需要先压平成字符串，
//! 目标页面再还原成只读列表。

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Item;

/// 编码/解码策略
pub trait TransferCodec {
    fn encode(&self, items: &[Item]) -> String;
    fn decode(&self, payload: &str) -> Vec<Item>;
}

/// 以 `", "` 拼接名字，仅用于展示，无法还原
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatJoinCodec;

impl TransferCodec for FlatJoinCodec {
    fn encode(&self, items: &[Item]) -> String {
        items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 原样展示：整个字符串作为唯一一行
    fn decode(&self, payload: &str) -> Vec<Item> {
        vec![Item::new(payload)]
    }
}

/// JSON 数组：`[{"name": ...}, ...]`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonListCodec;

impl TransferCodec for JsonListCodec {
    fn encode(&self, items: &[Item]) -> String {
        // Vec<Item> 序列化不会失败
        serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
    }

    /// 解析失败时返回空列表
    fn decode(&self, payload: &str) -> Vec<Item> {
        match serde_json::from_str::<Vec<Item>>(payload) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, len = payload.len(), "malformed list payload, showing empty list");
                Vec::new()
            }
        }
    }
}

/// 配置中可选的编解码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    Flat,
    #[default]
    Json,
}

impl CodecKind {
    pub fn codec(self) -> &'static dyn TransferCodec {
        match self {
            CodecKind::Flat => &FlatJoinCodec,
            CodecKind::Json => &JsonListCodec,
        }
    }

    pub fn encode(self, items: &[Item]) -> String {
        self.codec().encode(items)
    }

    pub fn decode(self, payload: &str) -> Vec<Item> {
        self.codec().decode(payload)
    }
}

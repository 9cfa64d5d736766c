use serde::{Deserialize, Serialize};
use tracing::debug;

/// 初始名单
pub const SEED_NAMES: [&str; 3] = ["Tanu", "Tina", "Tono"];

/// 名单条目，仅按值比较
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 与 Kotlin `isNotBlank` 一致：非空且不全是空白字符
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// 运行时名单状态：已提交的条目 + 正在输入的草稿
///
/// 只有 `set_draft_name` 和 `commit_draft` 两个修改入口，
/// 调用方在每次修改返回后自行重绘。
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    items: Vec<Item>,
    draft: Item,
}

impl ListStore {
    /// 以给定名字初始化名单
    pub fn with_seed<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: names.into_iter().map(Item::new).collect(),
            draft: Item::default(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn draft(&self) -> &Item {
        &self.draft
    }

    /// 原样替换草稿名字（不裁剪空白、不限长度）
    pub fn set_draft_name(&mut self, text: impl Into<String>) {
        self.draft.name = text.into();
    }

    /// 提交草稿
    ///
    /// 草稿为空白时不做任何修改并返回 `false`；否则把草稿的副本追加到末尾，
    /// 清空草稿并返回 `true`。存入的名字保持原样，不做裁剪。
    pub fn commit_draft(&mut self) -> bool {
        if self.draft.is_blank() {
            debug!(draft = ?self.draft.name, "blank draft rejected");
            return false;
        }

        let item = std::mem::take(&mut self.draft);
        debug!(name = %item.name, index = self.items.len(), "draft committed");
        self.items.push(item);
        true
    }
}

//! App 状态定义 (Model)

use crate::codec::CodecKind;
use crate::models::{Item, ListStore};

/// 应用状态
pub struct App {
    pub store: ListStore,
    pub codec: CodecKind,
    pub screen: Screen,
    pub message: Option<String>,
}

/// 当前页面
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    /// 结果页：从路由参数解码出的只读列表
    Result { rows: Vec<Item> },
}

impl App {
    /// 创建新的应用实例
    pub fn new(store: ListStore, codec: CodecKind) -> Self {
        Self {
            store,
            codec,
            screen: Screen::Home,
            message: None,
        }
    }
}

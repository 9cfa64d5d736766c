//! 业务逻辑处理 (Update/Dispatch)

use tracing::{info, warn};

use super::actions::Action;
use super::state::{App, Screen};
use crate::navigation::{Route, parse_route};

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Submit => self.submit(),
            Action::Navigate => self.navigate_to_result(),
            Action::Back => self.back(),
        }
        false
    }

    // ============ 首页 ============

    /// 输入框的完整文本交给 store
    pub fn input_char(&mut self, c: char) {
        if self.screen != Screen::Home {
            return;
        }
        let mut text = self.store.draft().name.clone();
        text.push(c);
        self.store.set_draft_name(text);
    }

    pub fn delete_char(&mut self) {
        if self.screen != Screen::Home {
            return;
        }
        let mut text = self.store.draft().name.clone();
        text.pop();
        self.store.set_draft_name(text);
    }

    /// 添加按钮
    pub fn submit(&mut self) {
        if self.screen != Screen::Home {
            return;
        }
        if self.store.commit_draft() {
            self.message = Some(format!("已添加，共 {} 项", self.store.items().len()));
        } else {
            self.message = Some("名字不能为空".to_string());
        }
    }

    /// 跳转按钮：编码 -> 路由 -> 解析 -> 解码
    pub fn navigate_to_result(&mut self) {
        if self.screen != Screen::Home {
            return;
        }
        let list_data = self.codec.encode(self.store.items());
        let path = Route::Result { list_data }.path();
        info!(codec = ?self.codec, items = self.store.items().len(), "navigate to result");

        match parse_route(&path) {
            Some(Route::Result { list_data }) => {
                let rows = self.codec.decode(&list_data);
                self.screen = Screen::Result { rows };
                self.message = None;
            }
            other => {
                warn!(path = %path, route = ?other, "unexpected route");
            }
        }
    }

    // ============ 结果页 ============

    /// 返回首页，名单与草稿保留
    pub fn back(&mut self) {
        if let Screen::Result { .. } = self.screen {
            self.screen = Screen::Home;
            self.message = None;
        }
    }
}

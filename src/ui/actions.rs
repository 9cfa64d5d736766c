//! Action 枚举定义 (Intent)

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 首页
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    Submit,      // 添加按钮
    Navigate,    // 跳转按钮

    // 结果页
    Back,
}

//! 页面路由
//!
//! 结果页的名单以单个查询参数传递，转义由这里负责，编解码层不处理。

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

const HOME: &str = "home";
const RESULT_PREFIX: &str = "resultContent/?listData=";

/// 路由目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Result { list_data: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME.to_string(),
            Route::Result { list_data } => result_route(list_data),
        }
    }
}

/// 构造结果页路由，`payload` 经过百分号转义
pub fn result_route(payload: &str) -> String {
    format!(
        "{}{}",
        RESULT_PREFIX,
        utf8_percent_encode(payload, NON_ALPHANUMERIC)
    )
}

/// 解析路由字符串；无法识别时返回 `None`
pub fn parse_route(path: &str) -> Option<Route> {
    if path == HOME {
        return Some(Route::Home);
    }

    let raw = path
        .strip_prefix(RESULT_PREFIX)
        .or_else(|| (path == "resultContent/" || path == "resultContent/?").then_some(""))?;
    let list_data = percent_decode_str(raw).decode_utf8_lossy().into_owned();
    Some(Route::Result { list_data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home() {
        assert_eq!(Route::Home.path(), "home");
        assert_eq!(parse_route("home"), Some(Route::Home));
    }

    #[test]
    fn test_result_route_escapes_payload() {
        let payload = r#"[{"name":"a&b=c?"}]"#;
        let path = result_route(payload);
        assert!(path.starts_with("resultContent/?listData="));
        let query = &path["resultContent/?listData=".len()..];
        assert!(query.chars().all(|c| c.is_ascii_alphanumeric() || c == '%'));

        assert_eq!(
            parse_route(&path),
            Some(Route::Result {
                list_data: payload.to_string()
            })
        );
    }

    #[test]
    fn test_result_route_unicode_round_trip() {
        let payload = "Tanu, 名字, 🚀";
        let route = Route::Result {
            list_data: payload.to_string(),
        };
        assert_eq!(parse_route(&route.path()), Some(route));
    }

    #[test]
    fn test_missing_list_data_is_empty() {
        let empty = Some(Route::Result {
            list_data: String::new(),
        });
        assert_eq!(parse_route("resultContent/?listData="), empty);
        assert_eq!(parse_route("resultContent/"), empty);
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(parse_route("settings"), None);
        assert_eq!(parse_route(""), None);
    }
}

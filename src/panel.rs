//! # 面板描述模块
//!
//! ## 设计思路
//!
//! 生成的脚本以面板名称作为 Lua 全局变量前缀，并通过 `peripheral.wrap`
//! 以 `面:颜色` 复合地址定位外设。本模块集中管理这三类外部输入的
//! 解析与校验，保证非法输入在进入流水线之前被拒绝。
//!
//! ## 实现思路
//!
//! - `Side` / `PanelColor` 负责字符串解析与稳定输出。
//! - 名称校验使用 `once_cell::sync::Lazy` 预编译正则，首次调用编译、后续零成本复用。
//! - 与 Lua 保留字冲突的名称单独拒绝，否则生成的脚本无法通过 Lua 解析。

use once_cell::sync::Lazy;
use regex::Regex;

/// 合法的面板名称：Lua 标识符（字母或下划线开头，仅字母、数字、下划线）。
static PANEL_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("panel name pattern must compile")
});

/// Lua 5.x 保留字。名称与其冲突时生成的全局赋值语句非法。
const LUA_RESERVED_WORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// 面板参数统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("面板名称不能为空")]
    EmptyName,

    #[error("面板名称不是合法的 Lua 标识符：{0}")]
    InvalidName(String),

    #[error("面板名称与 Lua 保留字冲突：{0}")]
    ReservedName(String),

    #[error("未知面：{0}（可选：top / bottom / left / right / front / back）")]
    UnknownSide(String),

    #[error("未知颜色：{0}（可选：white / orange / magenta / lightBlue / yellow / lime / pink / gray / lightGray / cyan / purple / blue / brown / green / red / black）")]
    UnknownColor(String),
}

/// 面板所在面。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Side {
    /// 从外部字符串解析面标识。
    pub fn from_str(side: &str) -> Result<Self, PanelError> {
        match side.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            other => Err(PanelError::UnknownSide(other.to_string())),
        }
    }

    /// 输出稳定字符串，用于拼装 wrap 地址。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// 面板颜色通道（外设固件定义的 16 色）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl PanelColor {
    /// 从外部字符串解析颜色名。大小写不敏感。
    pub fn from_str(color: &str) -> Result<Self, PanelError> {
        match color.trim().to_lowercase().as_str() {
            "white" => Ok(Self::White),
            "orange" => Ok(Self::Orange),
            "magenta" => Ok(Self::Magenta),
            "lightblue" => Ok(Self::LightBlue),
            "yellow" => Ok(Self::Yellow),
            "lime" => Ok(Self::Lime),
            "pink" => Ok(Self::Pink),
            "gray" => Ok(Self::Gray),
            "lightgray" => Ok(Self::LightGray),
            "cyan" => Ok(Self::Cyan),
            "purple" => Ok(Self::Purple),
            "blue" => Ok(Self::Blue),
            "brown" => Ok(Self::Brown),
            "green" => Ok(Self::Green),
            "red" => Ok(Self::Red),
            "black" => Ok(Self::Black),
            other => Err(PanelError::UnknownColor(other.to_string())),
        }
    }

    /// 输出外设固件期望的驼峰写法（`lightBlue` / `lightGray`）。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Orange => "orange",
            Self::Magenta => "magenta",
            Self::LightBlue => "lightBlue",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Pink => "pink",
            Self::Gray => "gray",
            Self::LightGray => "lightGray",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Brown => "brown",
            Self::Green => "green",
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

/// 面板定位：面 + 颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTarget {
    pub side: Side,
    pub color: PanelColor,
}

impl PanelTarget {
    /// 从外部字符串对解析面板定位。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use panel_painter::panel::PanelTarget;
    ///
    /// let target = PanelTarget::parse("front", "white")?;
    /// assert_eq!(target.wrap_address(), "front:white");
    /// # Ok::<(), panel_painter::panel::PanelError>(())
    /// ```
    pub fn parse(side: &str, color: &str) -> Result<Self, PanelError> {
        Ok(Self {
            side: Side::from_str(side)?,
            color: PanelColor::from_str(color)?,
        })
    }

    /// 拼装 `peripheral.wrap` 使用的 `面:颜色` 复合地址。
    pub fn wrap_address(&self) -> String {
        format!("{}:{}", self.side.as_str(), self.color.as_str())
    }
}

/// 校验面板名称是否可作为生成脚本的 Lua 全局变量前缀。
pub fn validate_panel_name(name: &str) -> Result<(), PanelError> {
    if name.is_empty() {
        return Err(PanelError::EmptyName);
    }

    if !PANEL_NAME_PATTERN.is_match(name) {
        return Err(PanelError::InvalidName(name.to_string()));
    }

    if LUA_RESERVED_WORDS.contains(&name) {
        return Err(PanelError::ReservedName(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parse_is_case_insensitive() {
        assert_eq!(Side::from_str("FRONT").expect("parse side"), Side::Front);
        assert_eq!(Side::from_str(" back ").expect("parse side"), Side::Back);
    }

    #[test]
    fn side_rejects_unknown_value() {
        assert!(matches!(
            Side::from_str("middle"),
            Err(PanelError::UnknownSide(_))
        ));
    }

    #[test]
    fn color_round_trips_camel_case_names() {
        let color = PanelColor::from_str("lightBlue").expect("parse color");
        assert_eq!(color.as_str(), "lightBlue");

        let color = PanelColor::from_str("lightgray").expect("parse color");
        assert_eq!(color.as_str(), "lightGray");
    }

    #[test]
    fn color_rejects_unknown_value() {
        assert!(matches!(
            PanelColor::from_str("crimson"),
            Err(PanelError::UnknownColor(_))
        ));
    }

    #[test]
    fn wrap_address_joins_side_and_color() {
        let target = PanelTarget::parse("front", "white").expect("parse target");
        assert_eq!(target.wrap_address(), "front:white");
    }

    #[test]
    fn name_rejects_empty() {
        assert!(matches!(validate_panel_name(""), Err(PanelError::EmptyName)));
    }

    #[test]
    fn name_rejects_leading_digit() {
        assert!(matches!(
            validate_panel_name("1panel"),
            Err(PanelError::InvalidName(_))
        ));
    }

    #[test]
    fn name_rejects_spaces_and_punctuation() {
        assert!(matches!(
            validate_panel_name("my panel"),
            Err(PanelError::InvalidName(_))
        ));
        assert!(matches!(
            validate_panel_name("panel-1"),
            Err(PanelError::InvalidName(_))
        ));
    }

    #[test]
    fn name_rejects_lua_reserved_words() {
        assert!(matches!(
            validate_panel_name("end"),
            Err(PanelError::ReservedName(_))
        ));
        assert!(matches!(
            validate_panel_name("function"),
            Err(PanelError::ReservedName(_))
        ));
    }

    #[test]
    fn name_accepts_identifiers() {
        validate_panel_name("screen").expect("plain name should pass");
        validate_panel_name("_hidden").expect("underscore prefix should pass");
        validate_panel_name("panel_2").expect("digits after first char should pass");
    }
}

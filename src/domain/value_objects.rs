use serde::{Deserialize, Serialize};
use std::fmt;

/// 利用者ID - 認可コンテキストへの参照
///
/// 入力としてのみ意味を持ち、属性は保持しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 書籍ID - 蔵書データソースへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(i64);

impl BookId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// IDが偶数かどうか
    ///
    /// スタブでは貸出可否フラグの代わりにこの偶奇を使う。
    pub fn is_even(&self) -> bool {
        self.0 % 2 == 0
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

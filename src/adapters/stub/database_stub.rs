use crate::domain::value_objects::{BookId, UserId};
use crate::ports::database::LoanDatabase;

/// LoanDatabaseのスタブ実装
///
/// 実データベースの代わりに固定ルールで応答する。状態は持たない。
/// - 偶数IDの書籍は貸出可能、奇数IDは貸出不可
/// - 貸出記録は常に成功し、トレースを1行出すだけ
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseStub;

impl DatabaseStub {
    pub fn new() -> Self {
        Self
    }
}

impl LoanDatabase for DatabaseStub {
    fn check_availability(&self, book_id: BookId) -> bool {
        book_id.is_even()
    }

    fn record_loan(&self, user_id: UserId, book_id: BookId) -> bool {
        tracing::info!(%user_id, %book_id, "stub recorded loan");
        true
    }
}

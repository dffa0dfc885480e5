use crate::domain::value_objects::{BookId, UserId};

/// 蔵書データベースポート
///
/// 貸出サービスは在庫照会と貸出記録の2つの能力だけに依存する。
/// 実データベースが用意できるまではスタブで置き換える。
pub trait LoanDatabase: Send + Sync {
    /// 書籍が貸出可能か確認する
    fn check_availability(&self, book_id: BookId) -> bool;

    /// 貸出を記録する
    ///
    /// 記録に成功した場合は`true`を返す。
    fn record_loan(&self, user_id: UserId, book_id: BookId) -> bool;
}

use crate::domain::{LoanOutcome, value_objects::*};
use crate::ports::*;
use std::sync::Arc;

/// 貸出サービス
///
/// 具体的な実装ではなく、データベースと認可の能力（トレイト）だけに依存する。
/// スタブを実装に差し替えてもこの型は変更不要。
#[derive(Clone)]
pub struct LoanService {
    database: Arc<dyn LoanDatabase>,
    authorization: Arc<dyn AuthorizationService>,
}

impl LoanService {
    pub fn new(
        database: Arc<dyn LoanDatabase>,
        authorization: Arc<dyn AuthorizationService>,
    ) -> Self {
        Self {
            database,
            authorization,
        }
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 利用者が認可されていること（未認可ならデータベースには触れない）
    /// - 書籍が貸出可能であること
    /// - 貸出の記録に成功すること
    ///
    /// 呼び出しごとに独立しており、同じ引数なら常に同じ結果を返す。
    pub fn lend_book(&self, user_id: UserId, book_id: BookId) -> LoanOutcome {
        // 1. 認可確認
        if !self.authorization.is_authorized(user_id) {
            tracing::debug!(%user_id, %book_id, "user not authorized");
            return LoanOutcome::Unauthorized;
        }

        // 2. 在庫確認
        if !self.database.check_availability(book_id) {
            tracing::debug!(%user_id, %book_id, "book not available");
            return LoanOutcome::BookUnavailable;
        }

        // 3. 貸出記録
        if !self.database.record_loan(user_id, book_id) {
            tracing::debug!(%user_id, %book_id, "loan recording failed");
            return LoanOutcome::RecordingFailed;
        }

        tracing::debug!(%user_id, %book_id, "loan granted");
        LoanOutcome::Success
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// 貸出ユースケースの結果
///
/// 失敗も含めてすべて通常の戻り値として表現する。
/// 文字列表現は利用者に見せる文言そのもの。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanOutcome {
    /// 認可OK、在庫あり、記録成功
    #[serde(rename = "Préstamo exitoso")]
    Success,

    /// 利用者が認可されていない
    #[serde(rename = "Usuario no autorizado")]
    Unauthorized,

    /// 書籍が貸出不可
    #[serde(rename = "Libro no disponible")]
    BookUnavailable,

    /// 貸出の記録に失敗した
    #[serde(rename = "Error al registrar préstamo")]
    RecordingFailed,
}

impl LoanOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanOutcome::Success => "Préstamo exitoso",
            LoanOutcome::Unauthorized => "Usuario no autorizado",
            LoanOutcome::BookUnavailable => "Libro no disponible",
            LoanOutcome::RecordingFailed => "Error al registrar préstamo",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoanOutcome::Success)
    }
}

impl fmt::Display for LoanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

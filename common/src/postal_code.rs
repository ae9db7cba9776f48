//! 郵便番号（ドイツ PLZ）の検証
//!
//! 入力欄はキー入力ごとに `sanitize` を通し、5桁そろった時点でのみ
//! 有効/無効を判定する。入力途中の値はエラー扱いしない。

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// 郵便番号の桁数
pub const POSTAL_CODE_LEN: usize = 5;

/// 数字以外を除去し、先頭5文字に切り詰める
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(POSTAL_CODE_LEN)
        .collect()
}

/// ちょうど5桁の数字なら true
pub fn is_valid(code: &str) -> bool {
    code.len() == POSTAL_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// 検証済みの郵便番号
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(code: &str) -> Result<Self> {
        if is_valid(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(Error::InvalidPostalCode(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PostalCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 入力欄の表示ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// 5桁未満（エラー表示しない）
    #[default]
    Typing,
    Valid,
    Invalid,
}

/// 郵便番号入力欄の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalCodeField {
    value: String,
}

impl PostalCodeField {
    /// キー入力を反映し、親へ伝える値を返す
    ///
    /// 5桁かつ有効な場合のみ `Some`。それ以外は `None`（送信不可）。
    pub fn on_input(&mut self, raw: &str) -> Option<PostalCode> {
        self.value = sanitize(raw);
        if self.value.len() == POSTAL_CODE_LEN {
            PostalCode::parse(&self.value).ok()
        } else {
            None
        }
    }

    /// 位置情報から取得した郵便番号をそのまま採用する
    pub fn adopt(&mut self, code: &PostalCode) {
        self.value = code.as_str().to_string();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status(&self) -> FieldStatus {
        if self.value.len() < POSTAL_CODE_LEN {
            FieldStatus::Typing
        } else if is_valid(&self.value) {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

use thiserror::Error;
use waste_sort_common::LocateError;

#[derive(Error, Debug)]
pub enum WasteSortError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像以外のファイルです: {0}")]
    UnsupportedImage(String),

    #[error("郵便番号は5桁の数字で入力してください: {0}")]
    InvalidPostalCode(String),

    #[error("検証トークンがありません。`--token` または WASTE_SORT_TOKEN で指定してください")]
    MissingToken,

    #[error("解析に失敗しました: {0}")]
    AnalysisFailed(String),

    #[error("郵便番号を特定できません: {0}")]
    Locate(#[from] LocateError),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] waste_sort_common::Error),
}

pub type Result<T> = std::result::Result<T, WasteSortError>;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waste_sort_common::Language;

#[derive(Parser, Debug)]
#[command(name = "waste-sort")]
#[command(about = "ごみ分別AI判定ツール（ドイツの郵便番号に対応）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// ごみの写真を送信して分別方法を判定
    Analyze {
        /// 写真ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 郵便番号（5桁）
        #[arg(short, long)]
        postal_code: String,

        /// ボット検証トークン
        #[arg(short, long, env = "WASTE_SORT_TOKEN")]
        token: Option<String>,

        /// 回答の言語（省略時は保存済みの設定）
        #[arg(short, long)]
        language: Option<Language>,

        /// 結果のHTMLを保存するファイル
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 座標から郵便番号を特定
    Locate {
        /// 緯度
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// 経度
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// ボット検証トークン
        #[arg(short, long, env = "WASTE_SORT_TOKEN")]
        token: Option<String>,

        /// メッセージの言語
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// 対応言語の一覧
    Languages,

    /// 翻訳キーを表示
    Translate {
        /// 翻訳キー（例: title）
        key: String,

        /// 表示する言語
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// 設定管理
    Config {
        /// 表示言語を保存
        #[arg(long)]
        set_language: Option<Language>,

        /// 解析エンドポイントを設定（位置情報も同じホストに変更）
        #[arg(long)]
        set_analysis_url: Option<String>,

        /// 位置情報エンドポイントを設定
        #[arg(long)]
        set_geolocation_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "waste-sort", "analyze", "bottle.jpg", "--postal-code", "10115", "--token", "t", "-l", "en",
        ])
        .expect("analyzeの引数を解析できること");

        match cli.command {
            Commands::Analyze { image, postal_code, token, language, output } => {
                assert_eq!(image, PathBuf::from("bottle.jpg"));
                assert_eq!(postal_code, "10115");
                assert_eq!(token.as_deref(), Some("t"));
                assert_eq!(language, Some(Language::En));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_locate_negative() {
        let cli = Cli::try_parse_from(["waste-sort", "locate", "--lat", "52.52", "--lng", "-13.4"])
            .expect("負の座標を受け付けること");

        match cli.command {
            Commands::Locate { lat, lng, .. } => {
                assert_eq!(lat, 52.52);
                assert_eq!(lng, -13.4);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_language() {
        let result = Cli::try_parse_from(["waste-sort", "translate", "title", "--language", "xx"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["waste-sort", "-v", "config", "--set-language", "uk", "--show"])
            .expect("configの引数を解析できること");
        assert!(cli.verbose);

        match cli.command {
            Commands::Config { set_language, show, .. } => {
                assert_eq!(set_language, Some(Language::Uk));
                assert!(show);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

use clap::{Parser, Subcommand};
use menu_genius_common::{ItemsPerPage, Language};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-genius")]
#[command(about = "メニュー写真をAIで解読して料理カードを表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub backend_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メニュー画像を1枚解析して結果を表示
    Upload {
        /// メニュー画像ファイル
        #[arg(required = true)]
        image: PathBuf,

        /// 表示・解析言語（例: English, Spanish, ja）
        #[arg(short, long)]
        language: Option<Language>,

        /// 1ページあたりの件数 (2/4/6/8)
        #[arg(short = 'n', long, value_parser = parse_items_per_page)]
        items_per_page: Option<ItemsPerPage>,

        /// 表示するページ
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 料理リストをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に結果を閲覧（ページ送り・言語切替・別の画像）
    Browse {
        /// 最初に解析する画像（省略時は入力を求める）
        image: Option<PathBuf>,

        /// 表示・解析言語
        #[arg(short, long)]
        language: Option<Language>,

        /// 1ページあたりの件数 (2/4/6/8)
        #[arg(short = 'n', long, value_parser = parse_items_per_page)]
        items_per_page: Option<ItemsPerPage>,
    },

    /// 選択できる言語を表示
    Languages,

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_backend_url: Option<String>,

        /// 既定の言語を設定
        #[arg(long)]
        set_language: Option<Language>,

        /// 既定の表示件数を設定 (2/4/6/8)
        #[arg(long, value_parser = parse_items_per_page)]
        set_items_per_page: Option<ItemsPerPage>,

        /// 選択できる言語をカンマ区切りで設定
        #[arg(long, value_delimiter = ',')]
        set_languages: Option<Vec<Language>>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

fn parse_items_per_page(s: &str) -> Result<ItemsPerPage, String> {
    let value: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {}. Use 2, 4, 6, or 8", s))?;
    ItemsPerPage::new(value).map_err(|e| e.to_string())
}

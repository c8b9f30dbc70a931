// src/cli.rs
use std::path::PathBuf;

use chord_kernel_domain::DEFAULT_THRESHOLD;
use chord_kernel_infra::corpus::file_store::DEFAULT_DATASETS_DIR;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人間向けのテキストレポート
    #[default]
    Table,
    Json,
}

/// Scores how typical a chord progression is for a composer's corpus.
///
/// Values not given on the command line are asked for interactively, unless
/// `--progression` is set.
#[derive(Parser, Debug)]
#[command(name = "chord_kernel", version, about)]
pub struct Args {
    /// 参照するスタイル (作曲家) のキー
    #[arg(long, short = 's')]
    pub style: Option<String>,

    /// 転回形付きのコーパスを使う
    #[arg(long, short = 'i')]
    pub inversions: bool,

    /// 転回形なしのコーパスを使う (確認を省略)
    #[arg(long, conflicts_with = "inversions")]
    pub no_inversions: bool,

    /// 文脈として使うコード数
    #[arg(long, short = 'k')]
    pub look_back: Option<usize>,

    /// カンマ区切りのコード進行 (例: I,IV,V,I)
    #[arg(long, short = 'p')]
    pub progression: Option<String>,

    /// この頻度未満の位置を警告する
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// コーパスファイルのディレクトリ
    #[arg(long, env = "CHORD_KERNEL_DATASETS", default_value = DEFAULT_DATASETS_DIR)]
    pub datasets: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// 位置ごとの詳細行を出さない
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// デバッグログを有効化
    #[arg(long)]
    pub debug: bool,
}

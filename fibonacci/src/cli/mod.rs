// CLI層 - コマンドライン引数の定義と上限値の解決

pub mod args;

// 公開API
pub use args::*;

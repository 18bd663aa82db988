// コア層 - 上限値とエラー型の定義

pub mod error;
pub mod limit;

// 公開API
pub use error::*;
pub use limit::*;

// 統合テストのエントリーポイント

mod test_cli;
mod test_library;

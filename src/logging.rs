use env_logger::{Builder, Env, Target};

/// 標準エラー出力向けのロガーを初期化する。`main` から一度だけ呼ぶ。
///
/// 既定レベルは `warn` で、`RUST_LOG` が指定されていればそちらを優先する。
/// 標準出力はファイル内容と結果表示専用のため、ログは常に標準エラー出力へ書く。
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();
}

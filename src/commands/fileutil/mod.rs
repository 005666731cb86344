use std::fs::File;

use crate::error::{FileUtilError, Result};

pub mod args;
pub mod handlers;

use args::{Args, Options};
use handlers::Mode;

/// fileutil 全体を実行し、処理結果に応じて終了コードを決定する。
pub fn run(args: Args) -> i32 {
    let result = args.into_options().and_then(|options| process(&options));

    match result {
        Ok(()) => 0,
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

/// エラー内容を標準エラー出力へ書き出す。
pub fn report(error: &FileUtilError) {
    eprintln!("fileutil: {error}");
    if error.is_usage_error() {
        eprintln!("Try 'fileutil --help' for more information.");
    }
}

/// ソースを開き、処理種別に応じた出力を行う。
fn process(options: &Options) -> Result<()> {
    log::debug!("options: {options:?}");

    let mut src = File::open(&options.source).map_err(|source| FileUtilError::SourceNotFound {
        path: options.source.clone(),
        source,
    })?;

    match Mode::resolve(options)? {
        Mode::Stream => {
            // 書き込み失敗は報告のみで終了コードには反映しない
            match handlers::stream_to_stdout(&mut src) {
                Ok(bytes) => log::debug!("streamed {bytes} bytes to stdout"),
                Err(e) => report(&e),
            }
        }
        Mode::Copy { destination, force } => {
            let task = handlers::validate(&destination, &options.source, force)?;
            let bytes = handlers::execute(&task, &mut src)?;
            log::debug!(
                "copied {bytes} bytes to '{}'",
                task.final_target.display()
            );
            handlers::print_success("Copy successful");
        }
        Mode::Move { destination, force } => {
            let task = handlers::validate(&destination, &options.source, force)?;
            let bytes = handlers::execute(&task, &mut src)?;
            log::debug!("moved {bytes} bytes to '{}'", task.final_target.display());

            drop(src);
            handlers::remove_source(&options.source)?;
            handlers::print_success("Move successful");
        }
    }

    Ok(())
}

use crate::copy_engine;
use crate::error::{FileUtilError, Result};
use crate::path;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::{MetadataExt, OpenOptionsExt};
use std::path::{Path, PathBuf};

use super::args::Options;

/// 新規作成する出力ファイルのパーミッション。
#[cfg(unix)]
const DESTINATION_MODE: u32 = 0o664;

/// 実行オプションから決まる処理種別を表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Stream,
    Copy { destination: PathBuf, force: bool },
    Move { destination: PathBuf, force: bool },
}

impl Mode {
    /// オプションの組み合わせから処理種別を決定する。
    ///
    /// `-M` 指定時に `-d` が無い場合は `MissingDestination` となる。
    pub fn resolve(options: &Options) -> Result<Self> {
        match (&options.destination, options.move_file) {
            (Some(dir), true) => Ok(Self::Move {
                destination: dir.clone(),
                force: options.force,
            }),
            (None, true) => Err(FileUtilError::MissingDestination),
            (Some(dir), false) => Ok(Self::Copy {
                destination: dir.clone(),
                force: options.force,
            }),
            (None, false) => Ok(Self::Stream),
        }
    }
}

/// 実行フェーズで使う出力先ファイルの情報を保持する。
pub struct FileTask {
    pub final_target: PathBuf,
    pub force: bool,
}

/// 出力先ディレクトリを検証し、ソースのファイル名を付与した最終ターゲットを構築する。
pub fn validate(destination: &Path, source: &Path, force: bool) -> Result<FileTask> {
    check_directory(destination)?;

    let final_target = path::destination_path(destination, source);
    ensure_not_same_file(source, &final_target)?;

    Ok(FileTask {
        final_target,
        force,
    })
}

/// 出力先ディレクトリが読み取り可能なディレクトリとして開けるかを確認する。
pub fn check_directory(destination: &Path) -> Result<()> {
    fs::read_dir(destination)
        .map(drop)
        .map_err(|source| FileUtilError::InvalidDestination {
            path: destination.to_path_buf(),
            source,
        })
}

/// 出力先がソース自身を指していないことを確認する。
///
/// 同一ファイルの場合は強制モードでも `DestinationExists` とする。
fn ensure_not_same_file(source: &Path, final_target: &Path) -> Result<()> {
    let (Ok(source_meta), Ok(target_meta)) = (fs::metadata(source), fs::metadata(final_target))
    else {
        return Ok(());
    };

    #[cfg(unix)]
    let same = source_meta.dev() == target_meta.dev() && source_meta.ino() == target_meta.ino();
    #[cfg(not(unix))]
    let same = {
        let _ = (source_meta, target_meta);
        fs::canonicalize(source).ok() == fs::canonicalize(final_target).ok()
    };

    if same {
        return Err(FileUtilError::DestinationExists {
            path: final_target.to_path_buf(),
            source: io::Error::new(
                ErrorKind::AlreadyExists,
                "source and destination are the same file",
            ),
        });
    }

    Ok(())
}

/// 移動完了後にソースファイルを削除する。
pub fn remove_source(source: &Path) -> Result<()> {
    fs::remove_file(source).map_err(|e| FileUtilError::SourceRemoveError {
        path: source.to_path_buf(),
        source: e,
    })
}

/// 出力先ファイルを作成し、ソースの内容を書き込む。
///
/// 非強制モードでは既存ファイルを上書きしない。
pub fn execute(task: &FileTask, src: &mut File) -> Result<u64> {
    let mut target = create_destination(&task.final_target, task.force)?;
    copy_engine::copy_stream(src, &mut target)
}

/// 強制モードの有無に応じたオープン方法で出力先ファイルを開く。
fn create_destination(target: &Path, force: bool) -> Result<File> {
    let mut open_options = OpenOptions::new();
    open_options.write(true);
    if force {
        open_options.create(true).truncate(true);
    } else {
        open_options.create_new(true);
    }
    #[cfg(unix)]
    open_options.mode(DESTINATION_MODE);

    open_options.open(target).map_err(|source| {
        if !force && source.kind() == ErrorKind::AlreadyExists {
            FileUtilError::DestinationExists {
                path: target.to_path_buf(),
                source,
            }
        } else {
            FileUtilError::DestinationCreateError {
                path: target.to_path_buf(),
                source,
            }
        }
    })
}

/// ソースの内容を標準出力へそのまま流す。
///
/// 読み手側がパイプを閉じた場合は正常終了として扱う。
pub fn stream_to_stdout(src: &mut File) -> Result<u64> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match copy_engine::copy_stream(src, &mut out) {
        Err(FileUtilError::WriteError(e)) if e.kind() == ErrorKind::BrokenPipe => Ok(0),
        other => other,
    }
}

/// 成功メッセージを標準出力に書き出す。
pub fn print_success(message: &str) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = writeln!(out, "{message}").and_then(|_| out.flush()) {
        log::warn!("failed to print status line: {e}");
    }
}

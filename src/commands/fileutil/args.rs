use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{FileUtilError, Result};

/// ソースファイルが指定されなかった場合に使うファイル名。
pub const DEFAULT_SOURCE: &str = "logfile.txt";

#[derive(Parser, Debug)]
#[command(name = "fileutil")]
#[command(version, about = "Print, copy or move a single file", long_about = None)]
#[command(args_override_self = true)]
pub struct Args {
    /// Directory to copy the source file into
    #[arg(short = 'd', value_name = "DIR")]
    pub destination: Option<Option<PathBuf>>,

    /// Move mode: delete the source after copying (requires -d)
    #[arg(short = 'M')]
    pub move_file: bool,

    /// Force mode: overwrite an existing file in the destination
    #[arg(short = 'F')]
    pub force: bool,

    /// Source file (ignored when any of -d, -M or -F is given; defaults to logfile.txt)
    pub source: Option<PathBuf>,

    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

/// 検証済みの実行オプション。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    pub move_file: bool,
    pub force: bool,
}

impl Args {
    /// 引数の組み合わせを検証し、実行オプションへ変換する。
    ///
    /// `-d`/`-M`/`-F` のいずれかが指定された場合、位置引数の有無にかかわらず
    /// ソースは常に `logfile.txt` になる。
    pub fn into_options(self) -> Result<Options> {
        let destination = match self.destination {
            Some(Some(dir)) => Some(dir),
            Some(None) => return Err(FileUtilError::MissingArgument),
            None => None,
        };

        if self.force && destination.is_none() && !self.move_file {
            return Err(FileUtilError::RedundantFlag);
        }

        let any_flag = destination.is_some() || self.move_file || self.force;
        if !self.extra.is_empty() {
            log::debug!("ignoring extra arguments: {:?}", self.extra);
        }

        let source = match self.source {
            Some(path) if !any_flag => path,
            Some(path) => {
                log::debug!(
                    "mode flag present, ignoring source argument '{}'",
                    path.display()
                );
                PathBuf::from(DEFAULT_SOURCE)
            }
            None => PathBuf::from(DEFAULT_SOURCE),
        };

        Ok(Options {
            source,
            destination,
            move_file: self.move_file,
            force: self.force,
        })
    }
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// fileutil の実行中に発生しうる失敗を表す。
///
/// `WriteError` 以外はすべて実行全体を打ち切る致命的エラーとして扱う。
#[derive(Debug, Error)]
pub enum FileUtilError {
    #[error("invalid argument: immediately after -d, a directory path was expected")]
    MissingArgument,

    #[error("invalid argument: -F is redundant as nothing to force here")]
    RedundantFlag,

    #[error("cannot open given file '{}': {source}", .path.display())]
    SourceNotFound { path: PathBuf, source: io::Error },

    #[error("invalid argument: no destination given to move the file")]
    MissingDestination,

    #[error("invalid destination '{}': {source}", .path.display())]
    InvalidDestination { path: PathBuf, source: io::Error },

    #[error("file already exists in given directory '{}': {source}", .path.display())]
    DestinationExists { path: PathBuf, source: io::Error },

    #[error("error creating file '{}' in directory: {source}", .path.display())]
    DestinationCreateError { path: PathBuf, source: io::Error },

    #[error("writing error: {0}")]
    WriteError(#[source] io::Error),

    #[error("cannot remove source file '{}': {source}", .path.display())]
    SourceRemoveError { path: PathBuf, source: io::Error },
}

impl FileUtilError {
    /// エラー種別に対応するプロセス終了コードを返す。
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceNotFound { .. } => 1,
            _ => 2,
        }
    }

    /// 引数指定の誤りに起因し、ヘルプ案内を添えるべきエラーかを判定する。
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument | Self::RedundantFlag | Self::MissingDestination
        )
    }
}

pub type Result<T> = std::result::Result<T, FileUtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
    }

    #[test]
    fn only_unopenable_source_exits_with_one() {
        let err = FileUtilError::SourceNotFound {
            path: PathBuf::from("logfile.txt"),
            source: not_found(),
        };
        assert_eq!(err.exit_code(), 1);

        let others = [
            FileUtilError::MissingArgument,
            FileUtilError::RedundantFlag,
            FileUtilError::MissingDestination,
            FileUtilError::InvalidDestination {
                path: PathBuf::from("/missing"),
                source: not_found(),
            },
            FileUtilError::DestinationExists {
                path: PathBuf::from("/tmp/a.txt"),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "File exists"),
            },
            FileUtilError::DestinationCreateError {
                path: PathBuf::from("/tmp/a.txt"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            },
            FileUtilError::WriteError(io::Error::other("disk full")),
            FileUtilError::SourceRemoveError {
                path: PathBuf::from("logfile.txt"),
                source: not_found(),
            },
        ];
        for err in others {
            assert_eq!(err.exit_code(), 2, "{err}");
        }
    }

    #[test]
    fn system_errors_are_appended_after_a_colon() {
        let err = FileUtilError::InvalidDestination {
            path: PathBuf::from("/nowhere"),
            source: not_found(),
        };
        assert_eq!(
            err.to_string(),
            "invalid destination '/nowhere': No such file or directory"
        );
    }

    #[test]
    fn usage_errors_are_flagged() {
        assert!(FileUtilError::MissingArgument.is_usage_error());
        assert!(FileUtilError::RedundantFlag.is_usage_error());
        assert!(FileUtilError::MissingDestination.is_usage_error());
        assert!(!FileUtilError::WriteError(io::Error::other("x")).is_usage_error());
    }
}

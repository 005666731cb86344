use std::ffi::{OsStr, OsString};
#[cfg(unix)]
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// 最後の `/` 以降の部分を返す。`/` を含まない場合は全体を返す。
///
/// UTF-8 でないファイル名もバイト列のまま扱う。
#[cfg(unix)]
pub fn basename(path: &Path) -> &OsStr {
    let bytes = path.as_os_str().as_bytes();
    match bytes.iter().rposition(|&b| b == b'/') {
        Some(index) => OsStr::from_bytes(&bytes[index + 1..]),
        None => path.as_os_str(),
    }
}

#[cfg(not(unix))]
pub fn basename(path: &Path) -> &OsStr {
    match path.to_str().and_then(|s| s.rsplit_once('/')) {
        Some((_, name)) => OsStr::new(name),
        None => path.as_os_str(),
    }
}

/// 出力先ディレクトリの末尾に `/` を補い、ソースのファイル名を連結したパスを構築する。
pub fn destination_path(dir: &Path, source: &Path) -> PathBuf {
    let name = basename(source);
    let mut full = OsString::with_capacity(dir.as_os_str().len() + name.len() + 1);
    full.push(dir.as_os_str());
    if dir.as_os_str().as_encoded_bytes().last() != Some(&b'/') {
        full.push("/");
    }
    full.push(name);
    PathBuf::from(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_takes_text_after_last_slash() {
        assert_eq!(basename(Path::new("/home/student/logfile.txt")), "logfile.txt");
        assert_eq!(basename(Path::new("dir/sub/a.b.c")), "a.b.c");
        assert_eq!(basename(Path::new("logfile.txt")), "logfile.txt");
    }

    #[test]
    fn basename_of_trailing_slash_is_empty() {
        assert_eq!(basename(Path::new("dir/")), "");
        assert_eq!(basename(Path::new("/")), "");
    }

    #[cfg(unix)]
    #[test]
    fn basename_keeps_non_utf8_bytes() {
        let path = Path::new(OsStr::from_bytes(b"dir/\xffname.txt"));
        assert_eq!(basename(path).as_bytes(), b"\xffname.txt");
    }

    #[test]
    fn destination_path_adds_missing_separator() {
        assert_eq!(
            destination_path(Path::new("/tmp/dst"), Path::new("logfile.txt")),
            PathBuf::from("/tmp/dst/logfile.txt")
        );
    }

    #[test]
    fn destination_path_keeps_existing_separator() {
        assert_eq!(
            destination_path(Path::new("/tmp/dst/"), Path::new("/var/log/logfile.txt")),
            PathBuf::from("/tmp/dst/logfile.txt")
        );
    }
}

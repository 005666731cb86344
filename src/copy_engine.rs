use std::io::{ErrorKind, Read, Write};

use crate::error::{FileUtilError, Result};

/// 1 回の読み書きで転送するバイト数。
pub const BUFFER_SIZE: usize = 1024;

/// `src` から読める内容をすべて `dst` へ書き込み、書き込んだバイト数を返す。
///
/// 読み込みが 0 バイトまたは失敗した時点で終了し、両者は区別しない。
/// 書き込みに失敗した場合は即座に中断して [`FileUtilError::WriteError`] を返す。
/// それまでに書き込んだ内容は `dst` に残る。
pub fn copy_stream<R, W>(src: &mut R, dst: &mut W) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut total = 0u64;

    loop {
        let bytes_read = match src.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                log::debug!("read failed after {total} bytes, treating as end of stream: {e}");
                break;
            }
        };

        dst.write_all(&buffer[..bytes_read])
            .map_err(FileUtilError::WriteError)?;
        total += bytes_read as u64;
    }

    dst.flush().map_err(FileUtilError::WriteError)?;
    Ok(total)
}

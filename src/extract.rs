use std::fs;
use std::io;
use std::path::Path;

/// Reads a whole file as text with lenient decoding: byte sequences that are
/// not valid UTF-8 are replaced with U+FFFD instead of failing the read. The
/// text is returned unmodified; trimming happens at the archive writer.
pub fn read_plain_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

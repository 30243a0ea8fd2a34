//! Common file system operations

use std::fs;
use std::path::Path;

/// Copy a directory recursively, returning the number of files copied
///
/// Symlinks are followed: a linked folder is copied as a real folder and a
/// linked file as a regular file.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> std::io::Result<usize>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    // Read first so a missing source does not leave an empty destination behind
    let entries = fs::read_dir(src_ref)?;
    fs::create_dir_all(dst_ref)?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst_ref.join(entry.file_name());

        if entry_path.is_dir() {
            copied += copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
            copied += 1;
        }
    }

    Ok(copied)
}

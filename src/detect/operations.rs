use std::io;
use std::path::Path;

/// Names of the regular files directly inside `path` (subdirectories skipped)
pub fn list_file_names(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

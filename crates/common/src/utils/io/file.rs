use std::{fs, path::Path};

use eyre::{eyre, Result};

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use viewcall_common::utils::io::file::write_file;
///
/// let path = "/tmp/calldata.json";
/// let contents = "{}";
/// let result = write_file(path, contents);
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    // Create the directory if it doesn't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| eyre!("unable to create directory '{}': {}", parent.display(), e))?;
    }

    fs::write(path, contents)?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use viewcall_common::utils::io::file::read_file;
///
/// let path = "/tmp/calldata.json";
/// let contents = read_file(path);
/// ```
pub fn read_file(path: &str) -> Result<String> {
    Ok(fs::read_to_string(Path::new(path))?)
}

/// Delete a file from the disc. Returns `true` if the path no longer exists afterwards.
///
/// ```no_run
/// use viewcall_common::utils::io::file::delete_path;
///
/// let path = "/tmp/calldata.json";
/// let result = delete_path(path);
/// ```
pub fn delete_path(path: &str) -> bool {
    let path = Path::new(path);

    let _ = if path.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };

    !path.exists()
}

use crate::error::ProduceError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Create or truncate `path` and write `bytes` to it.
///
/// Parent directories are not created; a missing one is reported as a write
/// failure like any other I/O error.
pub fn write_output(
    path: &Path,
    bytes: &[u8],
) -> Result<(), ProduceError> {
    let wrap = |source| ProduceError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(bytes).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    Ok(())
}

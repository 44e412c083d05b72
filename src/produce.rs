use crate::config::Config;
use crate::error::ProduceError;
use crate::io::write_output;
use crate::payload::{IconFormat, decode_payload};
use std::path::PathBuf;
use tracing::{debug, warn};

/// What a successful run left on disk.
#[derive(Debug, Clone)]
pub struct Produced {
    pub path: PathBuf,
    pub bytes: usize,
    pub format: Option<IconFormat>,
}

/// Decode the configured payload and write it to the configured path.
///
/// The payload is fully decoded before the output file is opened, so a
/// decode failure never creates or truncates the file.
pub fn produce(config: &Config) -> Result<Produced, ProduceError> {
    let bytes = decode_payload(&config.payload)?;
    let format = IconFormat::sniff(&bytes);
    match format {
        Some(f) => debug!(len = bytes.len(), format = %f, "decoded payload"),
        None => warn!(len = bytes.len(), "decoded payload has no known icon signature"),
    }

    write_output(&config.output, &bytes)?;

    let path = dunce::canonicalize(&config.output).unwrap_or_else(|_| config.output.clone());
    debug!(path = %path.display(), "wrote favicon");

    Ok(Produced {
        path,
        bytes: bytes.len(),
        format,
    })
}

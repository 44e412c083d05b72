use create_favicon::Config;
use std::path::Path;

/// Config that writes the embedded favicon into `dir`.
pub fn config_in(dir: &Path) -> Config {
    Config {
        output: dir.join("favicon.ico"),
        ..Config::default()
    }
}

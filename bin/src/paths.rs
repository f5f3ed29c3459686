use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Find the config file for a run started in `start_dir`.
///
/// The nearest `.acejump/config.toml` in `start_dir` or an ancestor wins, then
/// `<config_dir>/acejump/config.toml`.
pub fn discover(start_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = walk_ancestors(start_dir) {
        tracing::info!("found project config: {}", path.display());
        return Some(path);
    }
    if let Some(path) = system_config() {
        tracing::info!("using system config: {}", path.display());
        return Some(path);
    }
    tracing::debug!("no config file found, using defaults");
    None
}

fn walk_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(".acejump").join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

fn system_config() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("acejump").join(CONFIG_FILE);
    path.is_file().then_some(path)
}

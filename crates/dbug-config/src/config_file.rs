use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".dbug-overlay.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.dbug-overlay.toml` in the current working directory
/// 2. `.dbug-overlay.toml` in the home directory
/// 3. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];

    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }

    match crate::app_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => log::debug!("No platform config path: {}", e),
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_directory_is_searched_first() {
        let paths = candidate_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE));
    }
}

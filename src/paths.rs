use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "CATALOG_CONFIG";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "catalog")
}

/// Returns the path to the config file.
///
/// Resolution order:
/// 1. `CATALOG_CONFIG` environment variable (if set and non-empty)
/// 2. Platform config directory + `config.yaml`
/// 3. Current working directory + `.catalog/config.yaml`
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }

    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.yaml"))
        .unwrap_or_else(|| PathBuf::from(".catalog").join("config.yaml"))
}

/// Returns the path of the log file written while the browser owns the terminal.
pub fn log_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().join("catalog.log"))
        .unwrap_or_else(|| PathBuf::from(".catalog").join("catalog.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_path_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(CONFIG_ENV, "/custom/path/catalog.yaml") };
        assert_eq!(config_path(), PathBuf::from("/custom/path/catalog.yaml"));
        unsafe { std::env::remove_var(CONFIG_ENV) };
    }

    #[test]
    #[serial]
    fn test_config_path_default_is_yaml() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var(CONFIG_ENV) };
        let path = config_path();
        assert_eq!(path.file_name().unwrap(), "config.yaml");
    }

    #[test]
    fn test_log_path_file_name() {
        assert_eq!(log_path().file_name().unwrap(), "catalog.log");
    }
}

use directories::ProjectDirs;
use std::path::PathBuf;

pub const APP_NAME: &str = "scribble";

const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "scribble.log";

/// Where scribble keeps its settings and log file
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    /// Settings file; falls back to the working directory when no home is known.
    pub fn config_file() -> PathBuf {
        Self::project()
            .map(|pd| pd.config_dir().join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(format!("{APP_NAME}_{CONFIG_FILE}")))
    }

    /// Log file in the XDG state dir where there is one, local data dir otherwise.
    /// `None` means there is nowhere sensible to log to.
    pub fn log_file() -> Option<PathBuf> {
        let pd = Self::project()?;
        let dir = pd.state_dir().unwrap_or_else(|| pd.data_local_dir());
        Some(dir.join(LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name() {
        let path = AppDirs::config_file();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();

        assert!(name == CONFIG_FILE || name == "scribble_config.json");
    }

    #[test]
    fn test_log_file_is_app_scoped() {
        if let Some(path) = AppDirs::log_file() {
            assert_eq!(path.file_name().unwrap(), LOG_FILE);
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn test_log_and_config_are_separate() {
        if let Some(log) = AppDirs::log_file() {
            assert_ne!(log, AppDirs::config_file());
        }
    }
}

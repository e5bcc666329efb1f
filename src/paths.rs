use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "noteworthy";
pub const DATA_DIR_ENV: &str = "NOTEWORTHY_DATA_DIR";

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join(APP_DIR_NAME)
}

pub fn find_config_file() -> Option<PathBuf> {
    let config_dir = get_config_dir();
    let paths = vec![
        config_dir.join("config.toml"),
        dirs::home_dir()?.join(".noteworthy").join("config.toml"),
    ];

    paths.into_iter().find(|p| p.exists())
}

/// Per-user data directory: `NOTEWORTHY_DATA_DIR` if set, otherwise the
/// platform data dir (`~/.local/share`, `~/Library/Application Support`,
/// `%APPDATA%`).
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    let data_home = dirs::data_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".local").join("share")
    });
    data_home.join(APP_DIR_NAME)
}

pub fn log_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("noteworthy.log")
}

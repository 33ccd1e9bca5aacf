use std::path::PathBuf;

pub fn get_default_datadir() -> PathBuf {
    if let Ok(path) = std::env::var("MARKSHELF_DATA_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("markshelf");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/markshelf");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("markshelf");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("markshelf");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/markshelf");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("markshelf");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Default location of the SQLite file holding the bookmark slot
pub fn get_default_db_path() -> PathBuf {
    get_default_datadir().join("markshelf.db")
}

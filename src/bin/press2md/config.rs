use std::env;
use std::path::PathBuf;

use press2md::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
        if exe_dir.join(CFG_FILE_NAME).exists() {
            return Some(exe_dir.join(CFG_FILE_NAME));
        }
    }

    if let Ok(cur_dir) = env::current_dir() {
        if cur_dir.join(CFG_FILE_NAME).exists() {
            return Some(cur_dir.join(CFG_FILE_NAME));
        }
    }

    let cfg_dir = dirs::config_dir()?;
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

/// Reads the given configuration, or the first `press2md.toml` found.
/// Defaults are used when there is none.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        eprintln!("No configuration found. Using defaults");
        return Ok(Config::default());
    };

    eprintln!("Reading config from {}", config_path.display());
    let mut config = read_config(&config_path).map_err(|e| e.to_string())?;

    if let Some(mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir().map(|dir| dir.join("press2md").join("log").join("press2md.log"));
        }
        match log.location {
            Some(ref location) => eprintln!("Log enabled. Files will be written in {}", location.display()),
            None => eprintln!("Log enabled. No cache directory available, using the console"),
        }
        config.log = Some(log);
    }

    Ok(config)
}

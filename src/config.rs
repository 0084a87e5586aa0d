use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use chrono_tz::Tz;
use clap::ValueEnum;
use serde::Deserialize;

use crate::error::ImportError;
use crate::text_utils::parse_timezone;

#[derive(Deserialize, ValueEnum, Copy, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SaveImages {
    /// Images attached to posts
    Attached,
    /// Images scraped from post body content
    Scraped,
    /// Both attached and scraped images
    #[default]
    All,
    /// No images
    None,
}

impl SaveImages {
    pub fn includes_attached(&self) -> bool {
        matches!(self, SaveImages::Attached | SaveImages::All)
    }

    pub fn includes_scraped(&self) -> bool {
        matches!(self, SaveImages::Scraped | SaveImages::All)
    }
}

impl Display for SaveImages {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SaveImages::Attached => "attached",
            SaveImages::Scraped => "scraped",
            SaveImages::All => "all",
            SaveImages::None => "none",
        };
        write!(f, "{}", name)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub save_images: SaveImages,
    pub custom_date_timezone: String,
    pub frontmatter_fields: Vec<String>,
    pub log: Option<Log>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("export.xml"),
            save_images: SaveImages::All,
            custom_date_timezone: "UTC".to_string(),
            frontmatter_fields: ["title", "date", "categories", "tags", "coverImage"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            log: None,
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz, ImportError> {
        parse_timezone(&self.custom_date_timezone)
    }
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file {}: {}", cfg_path.display(), e))),
    }
}

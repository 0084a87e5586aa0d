use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{error, info};

use press2md::logger::{configure_logger, ConsoleOutput};
use press2md::{import_posts, Config, HtmlPassthroughRenderer, Post, SaveImages};

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "press2md.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Path to WordPress export file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Which images to collect for each post
    #[arg(short, long)]
    save_images: Option<SaveImages>,

    /// Timezone applied to post dates, e.g. Europe/Paris
    #[arg(short = 'z', long)]
    timezone: Option<String>,

    /// Frontmatter fields, comma separated. A field can be renamed with name:alias
    #[arg(short, long, value_delimiter = ',')]
    frontmatter_fields: Option<Vec<String>>,

    /// Where the posts are written as JSON. Stdout when empty
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn apply_args(config: &mut Config, args: Args) -> Option<PathBuf> {
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(save_images) = args.save_images {
        config.save_images = save_images;
    }
    if let Some(timezone) = args.timezone {
        config.custom_date_timezone = timezone;
    }
    if let Some(fields) = args.frontmatter_fields {
        config.frontmatter_fields = fields;
    }
    args.output
}

fn write_posts(posts: &[Post], output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("Error creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, posts)?;
            writer.flush()?;
            info!("Posts written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, posts)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    let config_path = args.config_path.take().map(PathBuf::from);

    let mut config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run press2md --help");
            std::process::exit(2);
        }
    };
    let output = apply_args(&mut config, args);

    let console = match output {
        Some(_) => ConsoleOutput::Split,
        None => ConsoleOutput::StderrOnly,
    };
    if let Err(err) = configure_logger(&config, console) {
        // The default logger may write to stdout
        eprintln!("Error creating logger sinks. Desc={}", err);
    }

    info!("Starting press2md =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    info!("Images: {}, timezone: {}", config.save_images, config.custom_date_timezone);

    let posts = match import_posts(&config, &HtmlPassthroughRenderer {}) {
        Ok(posts) => posts,
        Err(err) => {
            error!("Import failed: {}", err);
            return Err(err.into());
        }
    };

    write_posts(&posts, output)
}

use crate::{
    format::{
        json::JsonBookmarks, plain::PlainBookmark, toml::TomlBookmarks, traits::BookmarkFormat,
        yaml::YamlBookmarks,
    },
    output::colorize::{Colorize, ColorizeBookmark},
};
use markshelf::error::Result;
use markshelf::models::bookmark::Bookmark;

pub mod json;
pub mod plain;
pub mod toml;
pub mod traits;
pub mod yaml;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
    Plain,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            "toml" => OutputFormat::Toml,
            "plain" | "text" => OutputFormat::Plain,
            _ => OutputFormat::Colored,
        }
    }

    pub fn render_bookmarks(self, records: &[Bookmark], no_color: bool) -> Result<String> {
        match self {
            OutputFormat::Json => JsonBookmarks(records).render(),
            OutputFormat::Yaml => YamlBookmarks(records).render(),
            OutputFormat::Toml => TomlBookmarks(records).render(),
            OutputFormat::Plain => render_each(records, |b| PlainBookmark(b).render()),
            OutputFormat::Colored if no_color => {
                render_each(records, |b| PlainBookmark(b).render())
            }
            OutputFormat::Colored => render_each(records, |b| Ok(ColorizeBookmark(b).to_colored())),
        }
    }

    pub fn print_bookmarks(self, records: &[Bookmark], no_color: bool) -> Result<()> {
        let rendered = self.render_bookmarks(records, no_color)?;
        println!("{}", rendered.trim_end());
        Ok(())
    }
}

fn render_each(
    records: &[Bookmark],
    render: impl Fn(&Bookmark) -> Result<String>,
) -> Result<String> {
    let blocks = records.iter().map(render).collect::<Result<Vec<_>>>()?;
    Ok(blocks.join("\n"))
}

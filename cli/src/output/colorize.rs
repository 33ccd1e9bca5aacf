use chrono::Local;
use markshelf::models::bookmark::Bookmark;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

pub struct ColorizeBookmark<'a>(pub &'a Bookmark);

impl<'a> Colorize for ColorizeBookmark<'a> {
    fn to_colored(&self) -> String {
        let b = self.0;
        let star = if b.is_favorite { "★" } else { "☆" };
        let mut s = format!(
            "{} {} {}\n",
            star.yellow(),
            b.title.bold().green(),
            format!("[{}]", b.category).bright_blue(),
        );

        s.push_str(&format!("  {} {}\n", ">".red(), b.url.yellow()));

        // Only show description if non-empty
        if !b.description.trim().is_empty() {
            s.push_str(&format!("  {} {}\n", "+".red(), b.description));
        }

        let created = b.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        s.push_str(&format!(
            "  {} {} {}\n",
            "#".red(),
            b.id.dimmed(),
            created.to_string().dimmed()
        ));
        s
    }
}

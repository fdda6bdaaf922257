//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use menugram::{Course, MenuItem, PostType};
use std::path::PathBuf;

/// Menugram - Instagram content for restaurants
#[derive(Parser, Debug)]
#[command(name = "menugram")]
#[command(about = "Generate Instagram taglines, captions and hashtags for restaurants", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./menugram.toml, then ~/.config/menugram/menugram.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible template selection
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print generated content as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Wait the configured generation delay before showing content
    #[arg(long, global = true)]
    pub simulate_latency: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Restaurant post: a menu, a single dish or a customer photo
    Post(PostArgs),

    /// Story for a single menu item
    Story(StoryArgs),

    /// Post for a dish reached by QR code
    Scan(ScanArgs),

    /// Five-course menu pipeline: caption, hashtags and story prompt
    Menu(MenuArgs),

    /// List the available visual styles
    Styles,
}

/// Style options shared by every generator.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Visual style: minimal, elegant, bold or playful
    #[arg(long)]
    pub style: Option<String>,

    /// Comma-separated brand colors
    #[arg(long)]
    pub colors: Option<String>,
}

/// Arguments for `post`
#[derive(Args, Debug)]
pub struct PostArgs {
    /// Restaurant name
    #[arg(long, default_value = "")]
    pub restaurant: String,

    /// Instagram handle
    #[arg(long, default_value = "")]
    pub handle: String,

    /// Location shown under the account name
    #[arg(long, default_value = "")]
    pub location: String,

    /// Post type: menu, single or user-image
    #[arg(long = "type", default_value = "menu")]
    pub post_type: PostType,

    /// Menu item as "name|description|price" (repeatable)
    #[arg(long = "item", value_parser = parse_item)]
    pub items: Vec<MenuItem>,

    /// Customer photo for user-image posts
    #[arg(long)]
    pub user_image: Option<String>,

    /// Replace the caption once after generating
    #[arg(long)]
    pub regenerate_caption: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Arguments for `story`
#[derive(Args, Debug)]
pub struct StoryArgs {
    /// Restaurant name
    #[arg(long, default_value = "")]
    pub restaurant: String,

    /// Location shown under the account name
    #[arg(long, default_value = "")]
    pub location: String,

    /// Menu item name
    #[arg(long, default_value = "")]
    pub item: String,

    /// Menu item description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Menu item price
    #[arg(long)]
    pub price: Option<String>,

    /// Image to feature
    #[arg(long)]
    pub image: Option<String>,

    /// Replace the caption once after generating
    #[arg(long)]
    pub regenerate_caption: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Arguments for `scan`
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Scanned item id (defaults to the first dish)
    #[arg(long)]
    pub item: Option<String>,

    /// Replace the caption once after generating
    #[arg(long)]
    pub regenerate_caption: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Arguments for `menu`
#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Restaurant name
    #[arg(long, default_value = "")]
    pub restaurant: String,

    /// Instagram handle
    #[arg(long, default_value = "")]
    pub handle: String,

    /// Course as "course|name|description|price" (repeatable)
    #[arg(long = "course", value_parser = parse_course)]
    pub courses: Vec<CourseEntry>,

    /// Write instagram-content.txt into this directory
    #[arg(long)]
    pub download: Option<PathBuf>,

    /// Generate a second caption after the first
    #[arg(long)]
    pub regenerate_caption: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// One `--course` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    /// Course slot
    pub course: Course,
    /// Dish name
    pub name: String,
    /// Dish description; blank uses the course suggestion
    pub description: String,
    /// Display price
    pub price: String,
}

fn split_fields(value: &str) -> Vec<String> {
    value.split('|').map(|field| field.trim().to_string()).collect()
}

/// Parse "name|description|price"; description and price are optional.
pub fn parse_item(value: &str) -> Result<MenuItem, String> {
    let mut fields = split_fields(value).into_iter();
    let name = fields.next().unwrap_or_default();
    let description = fields.next().unwrap_or_default();
    let price = fields.next().filter(|price| !price.is_empty());
    if fields.next().is_some() {
        return Err(format!("expected name|description|price, got '{value}'"));
    }
    Ok(MenuItem::new(name, description).with_price(price))
}

/// Parse "course|name|description|price"; description and price are optional.
pub fn parse_course(value: &str) -> Result<CourseEntry, String> {
    let mut fields = split_fields(value).into_iter();
    let course = fields.next().unwrap_or_default();
    let course: Course = course.parse().map_err(|_| {
        format!("unknown course '{course}' (appetizer, soup, main, dessert, beverage)")
    })?;
    let entry = CourseEntry {
        course,
        name: fields.next().unwrap_or_default(),
        description: fields.next().unwrap_or_default(),
        price: fields.next().unwrap_or_default(),
    };
    if fields.next().is_some() {
        return Err(format!(
            "expected course|name|description|price, got '{value}'"
        ));
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_fields_are_optional() {
        let item = parse_item("Truffle Arancini").unwrap();
        assert_eq!(item.name(), "Truffle Arancini");
        assert_eq!(item.description(), "");
        assert!(item.price().is_none());

        let item = parse_item("Osso Buco | Braised veal | $38").unwrap();
        assert_eq!(item.description(), "Braised veal");
        assert_eq!(item.price().as_deref(), Some("$38"));

        assert!(parse_item("a|b|c|d").is_err());
    }

    #[test]
    fn course_must_be_known() {
        let entry = parse_course("main|Osso Buco||$38").unwrap();
        assert_eq!(entry.course, Course::Main);
        assert_eq!(entry.description, "");

        assert!(parse_course("brunch|Eggs").unwrap_err().contains("brunch"));
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "menugram",
            "post",
            "--restaurant",
            "Bella Vista",
            "--type",
            "user-image",
            "--seed",
            "7",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(7));
        assert!(cli.json);
        match cli.command {
            Commands::Post(args) => assert_eq!(args.post_type, PostType::UserImage),
            other => panic!("unexpected command {other:?}"),
        }
    }
}

//! Command handlers.

use menugram::{
    ContentRequest, Flow, GeneratedContent, MenuCatalog, MenuDraft, MenuItem, MenugramResult,
    PostPreview, PostType, StoryPreview, StyleKey, StyleRegistry, content_download_text,
    full_caption, hashtag_line, to_json, write_download,
};
use strum::IntoEnumIterator;
use tracing::info;

use super::commands::{MenuArgs, PostArgs, ScanArgs, StoryArgs};
use super::studio::Studio;

/// Handle prefixed to the full caption; single-item screens use the restaurant name.
fn caption_prefix(request: &ContentRequest) -> &str {
    if request.restaurant_handle().trim().is_empty() {
        request.restaurant_name()
    } else {
        request.restaurant_handle()
    }
}

fn print_post(
    studio: &Studio,
    request: &ContentRequest,
    content: &GeneratedContent,
) -> MenugramResult<()> {
    if studio.json {
        println!("{}", to_json(content)?);
        return Ok(());
    }
    println!("{}", PostPreview::new(request, content, &studio.config.preview));
    println!("{:-<60}", "");
    println!("{}", full_caption(caption_prefix(request), content));
    Ok(())
}

/// Generate a restaurant post.
pub async fn run_post(studio: &Studio, args: PostArgs) -> MenugramResult<()> {
    let (style, colors) = studio.style(&args.style);
    let request = ContentRequest::new(args.restaurant, args.handle, args.post_type)
        .with_location(args.location)
        .with_menu_items(args.items)
        .with_user_image(args.user_image)
        .with_style(style)
        .with_brand_colors(colors);

    let content = studio
        .generate(Flow::Post, &request, args.regenerate_caption)
        .await?;
    print_post(studio, &request, &content)
}

/// Generate a single-item story.
pub async fn run_story(studio: &Studio, args: StoryArgs) -> MenugramResult<()> {
    let (style, colors) = studio.style(&args.style);
    let item = MenuItem::new(args.item, args.description)
        .with_price(args.price)
        .with_image(args.image);
    let request = ContentRequest::new(args.restaurant, "", PostType::Single)
        .with_location(args.location)
        .with_menu_items(vec![item])
        .with_style(style)
        .with_brand_colors(colors);

    let content = studio
        .generate(Flow::Item, &request, args.regenerate_caption)
        .await?;
    if studio.json {
        println!("{}", to_json(&content)?);
        return Ok(());
    }
    println!("{}", StoryPreview::new(&request, &content, &studio.config.preview));
    println!("{:-<60}", "");
    println!("{}", content.caption());
    println!("{}", hashtag_line(content.hashtags()));
    Ok(())
}

/// Generate a post for a scanned dish.
pub async fn run_scan(studio: &Studio, args: ScanArgs) -> MenugramResult<()> {
    let (style, colors) = studio.style(&args.style);
    let catalog = MenuCatalog::demo();
    let item = catalog.resolve(args.item.as_deref())?;
    info!(item = %item.name(), restaurant = %item.restaurant_name(), "Scanned menu item");
    let request = item.to_request(style, colors);

    let content = studio
        .generate(Flow::Item, &request, args.regenerate_caption)
        .await?;
    print_post(studio, &request, &content)
}

/// Run the five-course menu pipeline.
pub async fn run_menu(studio: &Studio, args: MenuArgs) -> MenugramResult<()> {
    let (style, colors) = studio.style(&args.style);
    let mut draft = MenuDraft::new();
    for entry in args.courses {
        let description = if entry.description.is_empty() {
            entry.course.suggested_description().to_string()
        } else {
            entry.description
        };
        draft.add(entry.course, entry.name, description, entry.price)?;
    }
    info!(progress = %draft.progress(), "Menu assembled");
    let request = draft.to_request(args.restaurant, args.handle, style, colors);

    let content = studio
        .generate(Flow::Batch, &request, args.regenerate_caption)
        .await?;

    if let Some(dir) = &args.download {
        let path = write_download(dir, &content)?;
        println!("Saved {}", path.display());
    }
    if studio.json {
        println!("{}", to_json(&content)?);
        return Ok(());
    }
    for (index, entry) in draft.entries().iter().enumerate() {
        println!(
            "{}. [{}] {}",
            index + 1,
            entry.course().display_name(),
            entry.item().name()
        );
    }
    println!("{:-<60}", "");
    println!("{}", content_download_text(&content));
    Ok(())
}

/// Print every style bundle.
pub fn list_styles(studio: &Studio) -> MenugramResult<()> {
    let registry = StyleRegistry::new();
    if studio.json {
        println!("{}", to_json(&registry.all())?);
        return Ok(());
    }
    for key in StyleKey::iter() {
        let attributes = registry.attributes(key);
        let (from, to) = attributes.background_gradient();
        println!("{:<8} {} - {}", key.to_string(), key.label(), key.description());
        println!(
            "         gradient {from} -> {to}, text {}, accent {}",
            attributes.text_color(),
            attributes.accent_color()
        );
    }
    Ok(())
}

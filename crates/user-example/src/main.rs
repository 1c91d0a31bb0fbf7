use balado::components::EpisodeTeaser;
use balado::content::{ContentNode, DerivedFields, FeedItem, NodeKind, parse_front_matter};
use balado::host::memory::MemoryHost;
use balado::pages::{self, Templates};
use balado::{fields, styles};
use maud::Render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    balado::init_logging();

    let host = MemoryHost::new();

    let file = ContentNode {
        id: "file-1".to_string(),
        parent: None,
        kind: NodeKind::File,
        source_path: "content/posts/2024-06-01---hello-balado/index.md".into(),
        frontmatter: Default::default(),
        fields: DerivedFields::default(),
    };
    let markdown = ContentNode {
        id: "md-1".to_string(),
        parent: Some("file-1".to_string()),
        kind: NodeKind::Markdown,
        source_path: "content/posts/2024-06-01---hello-balado/index.md".into(),
        frontmatter: parse_front_matter(
            "---\nlayout: post\ntags:\n  - Podcasting\n  - Rust\ncategory: Behind the scenes\n---\nHello!\n",
        )?,
        fields: DerivedFields::default(),
    };

    host.insert_node(file.clone());
    host.insert_node(markdown.clone());
    fields::on_create_node(&file, &host, &host);
    fields::on_create_node(&markdown, &host, &host);

    let episode = FeedItem {
        id: "ep-1".to_string(),
        guid: "urn:balado:ep-1".to_string(),
        title: "Episode #1: Hello, World!".to_string(),
        description: "Kicking things off.".to_string(),
        published: chrono::Utc::now(),
        link: "https://example.com/episodes/1".to_string(),
    };
    host.insert_feed_item(episode.clone());

    pages::create_pages(&host, &host, &Templates::default()).await?;
    for page in host.pages() {
        println!("{} -> {}", page.path, page.template.0);
    }

    let mut pipeline = styles::StylePipeline::new();
    styles::configure_styles(&mut pipeline);
    let css = pipeline.apply(
        "article { lost-column: 2/3; } h1 { font-size: 32px; margin-bottom: 24px; }",
    )?;
    println!("{css}");

    println!("{}", EpisodeTeaser::new(&episode).render().into_string());

    Ok(())
}

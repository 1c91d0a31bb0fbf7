//! The page-planning hook: queries the host for markdown nodes and podcast
//! feed items and registers one page per routable record.
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::content::Layout;
use crate::errors::PlanError;
use crate::host::{DataLayer, PageSink};
use crate::permalink;

/// An opaque template handle, resolved by file path on the host side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template(pub String);

impl Template {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

/// The five templates pages are planned against.
#[derive(Debug, Clone, PartialEq)]
pub struct Templates {
    pub page: Template,
    pub post: Template,
    pub tag: Template,
    pub category: Template,
    pub episode: Template,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            page: Template::new("templates/page.html"),
            post: Template::new("templates/post.html"),
            tag: Template::new("templates/tag.html"),
            category: Template::new("templates/category.html"),
            episode: Template::new("templates/episode.html"),
        }
    }
}

/// Opaque key/value payload handed to the template at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext(pub FxHashMap<String, String>);

impl PageContext {
    pub fn single(key: &str, value: impl Into<String>) -> Self {
        let mut map = FxHashMap::default();
        map.insert(key.to_string(), value.into());
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// A page-creation request, consumed by the host's routing table.
///
/// Paths must be unique across all requests of one build; the host rejects
/// duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub path: String,
    pub template: Template,
    pub context: PageContext,
}

/// Plan every page of the site.
///
/// Invoked by the host once per build. The markdown and podcast queries run
/// as independent futures: neither branch's outcome affects the other's
/// emissions, and the overall call resolves once both are done. The first
/// branch failure, markdown first, is surfaced to the caller.
pub async fn create_pages<D, S>(data: &D, sink: &S, templates: &Templates) -> Result<(), PlanError>
where
    D: DataLayer + Sync,
    S: PageSink + Sync,
{
    let (markdown, feed) = tokio::join!(
        plan_markdown(data, sink, templates),
        plan_feed(data, sink, templates),
    );

    markdown?;
    feed?;
    Ok(())
}

async fn plan_markdown<D, S>(data: &D, sink: &S, templates: &Templates) -> Result<(), PlanError>
where
    D: DataLayer + Sync,
    S: PageSink + Sync,
{
    let records = data
        .markdown_nodes()
        .await
        .into_result()
        .map_err(PlanError::Markdown)?;

    // Aggregation paths are shared between posts; emit each only once.
    let mut planned_aggregations = FxHashSet::default();
    let mut count = 0usize;

    for record in &records {
        match record.layout {
            Some(Layout::Page) => {
                sink.create_page(PageRequest {
                    path: record.slug.clone(),
                    template: templates.page.clone(),
                    context: PageContext::single("slug", record.slug.clone()),
                });
                count += 1;
            }
            Some(Layout::Post) => {
                sink.create_page(PageRequest {
                    path: record.slug.clone(),
                    template: templates.post.clone(),
                    context: PageContext::single("slug", record.slug.clone()),
                });
                count += 1;

                for tag in &record.tags {
                    let path = permalink::tag_path(tag);
                    if planned_aggregations.insert(path.clone()) {
                        debug!(target: "pages", "tag page {path}");
                        sink.create_page(PageRequest {
                            path,
                            template: templates.tag.clone(),
                            context: PageContext::single("tag", tag.clone()),
                        });
                        count += 1;
                    }
                }

                if let Some(category) = &record.category {
                    let path = permalink::category_path(category);
                    if planned_aggregations.insert(path.clone()) {
                        debug!(target: "pages", "category page {path}");
                        sink.create_page(PageRequest {
                            path,
                            template: templates.category.clone(),
                            context: PageContext::single("category", category.clone()),
                        });
                        count += 1;
                    }
                }
            }
            _ => {}
        }
    }

    info!(target: "pages", "planned {count} pages from {} markdown nodes", records.len());
    Ok(())
}

async fn plan_feed<D, S>(data: &D, sink: &S, templates: &Templates) -> Result<(), PlanError>
where
    D: DataLayer + Sync,
    S: PageSink + Sync,
{
    let items = data
        .feed_items()
        .await
        .into_result()
        .map_err(PlanError::Feed)?;

    for item in &items {
        sink.create_page(PageRequest {
            path: permalink::episode_path(&item.title),
            template: templates.episode.clone(),
            context: PageContext::single("guid", item.guid.clone()),
        });
    }

    info!(target: "pages", "planned {} episode pages", items.len());
    Ok(())
}

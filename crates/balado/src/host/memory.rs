//! In-memory host, for tests and local experiments.
use std::sync::Mutex;

use rustc_hash::FxHashMap;

use super::{DataLayer, FieldSink, MarkdownRecord, NodeField, NodeLookup, PageSink, QueryEnvelope};
use crate::content::{ContentNode, FeedItem, NodeKind};
use crate::pages::PageRequest;

/// A host substitute holding nodes, feed items and registered pages in
/// memory. Implements every port the wiring hooks need.
#[derive(Default)]
pub struct MemoryHost {
    nodes: Mutex<FxHashMap<String, ContentNode>>,
    feed: Mutex<Vec<FeedItem>>,
    pages: Mutex<Vec<PageRequest>>,
    markdown_errors: Mutex<Vec<String>>,
    feed_errors: Mutex<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a node into the store, as the host's source phase would.
    pub fn insert_node(&self, node: ContentNode) {
        self.nodes.lock().unwrap().insert(node.id.clone(), node);
    }

    pub fn insert_feed_item(&self, item: FeedItem) {
        self.feed.lock().unwrap().push(item);
    }

    /// Make the next markdown query report the given error collection.
    pub fn fail_markdown(&self, errors: Vec<String>) {
        *self.markdown_errors.lock().unwrap() = errors;
    }

    /// Make the next feed query report the given error collection.
    pub fn fail_feed(&self, errors: Vec<String>) {
        *self.feed_errors.lock().unwrap() = errors;
    }

    /// Pages registered so far, in emission order.
    pub fn pages(&self) -> Vec<PageRequest> {
        self.pages.lock().unwrap().clone()
    }

    pub fn node(&self, id: &str) -> Option<ContentNode> {
        self.nodes.lock().unwrap().get(id).cloned()
    }
}

impl NodeLookup for MemoryHost {
    fn get(&self, id: &str) -> Option<ContentNode> {
        self.node(id)
    }
}

impl FieldSink for MemoryHost {
    fn attach(&self, node_id: &str, field: NodeField) {
        let mut nodes = self.nodes.lock().unwrap();
        let Some(node) = nodes.get_mut(node_id) else {
            return;
        };
        match field {
            NodeField::Slug(slug) => node.fields.slug = Some(slug),
            NodeField::TagSlugs(slugs) => node.fields.tag_slugs = slugs,
            NodeField::CategorySlug(slug) => node.fields.category_slug = Some(slug),
        }
    }
}

impl PageSink for MemoryHost {
    fn create_page(&self, request: PageRequest) {
        self.pages.lock().unwrap().push(request);
    }
}

impl DataLayer for MemoryHost {
    async fn markdown_nodes(&self) -> QueryEnvelope<Vec<MarkdownRecord>> {
        let errors = self.markdown_errors.lock().unwrap().clone();
        if !errors.is_empty() {
            return QueryEnvelope::failed(errors);
        }

        let nodes = self.nodes.lock().unwrap();
        let mut records: Vec<MarkdownRecord> = nodes
            .values()
            .filter(|node| node.kind == NodeKind::Markdown && !node.frontmatter.draft)
            .filter_map(|node| {
                let slug = node.fields.slug.clone()?;
                Some(MarkdownRecord {
                    slug,
                    layout: node.frontmatter.layout.clone(),
                    tags: node.frontmatter.tags.clone().unwrap_or_default(),
                    category: node.frontmatter.category.clone(),
                })
            })
            .collect();
        // The store iterates in arbitrary order; give callers a stable one.
        records.sort_by(|a, b| a.slug.cmp(&b.slug));

        QueryEnvelope::ok(records)
    }

    async fn feed_items(&self) -> QueryEnvelope<Vec<FeedItem>> {
        let errors = self.feed_errors.lock().unwrap().clone();
        if !errors.is_empty() {
            return QueryEnvelope::failed(errors);
        }

        QueryEnvelope::ok(self.feed.lock().unwrap().clone())
    }
}

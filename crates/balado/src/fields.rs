//! The node-annotation hook: derives slugs and aggregation paths and
//! attaches them as fields during the host's load phase.
use log::{debug, warn};

use crate::content::{ContentNode, NodeKind};
use crate::host::{FieldSink, NodeField, NodeLookup};
use crate::permalink;

/// Annotate one freshly loaded node with its derived fields.
///
/// Invoked by the host once per node, in no particular order. Only the
/// node's own fields are written, so invocations need no synchronization. A
/// markdown node that already carries a slug is left untouched, which makes
/// repeated annotation passes harmless.
pub fn on_create_node(node: &ContentNode, nodes: &dyn NodeLookup, fields: &dyn FieldSink) {
    match node.kind {
        NodeKind::File => match permalink::from_source_dir(&node.source_path) {
            Some(slug) => fields.attach(&node.id, NodeField::Slug(slug)),
            None => warn!(
                target: "fields",
                "{} has no `---` delimiter in its directory, no slug derived",
                node.source_path.display()
            ),
        },
        NodeKind::Markdown => {
            if node.fields.slug.is_some() {
                return;
            }

            let inherited = node
                .parent
                .as_ref()
                .and_then(|parent| nodes.get(parent))
                .and_then(|parent| parent.fields.slug);

            // An explicit front-matter path overrides the inherited slug.
            match node.frontmatter.path.clone().or(inherited) {
                Some(slug) => {
                    debug!(target: "fields", "{} -> {}", node.id, slug);
                    fields.attach(&node.id, NodeField::Slug(slug));
                }
                None => {
                    warn!(target: "fields", "{} has no parent slug and no explicit path", node.id)
                }
            }

            if let Some(tags) = &node.frontmatter.tags {
                let tag_slugs = tags.iter().map(|tag| permalink::tag_path(tag)).collect();
                fields.attach(&node.id, NodeField::TagSlugs(tag_slugs));
            }

            if let Some(category) = &node.frontmatter.category {
                fields.attach(
                    &node.id,
                    NodeField::CategorySlug(permalink::category_path(category)),
                );
            }
        }
    }
}

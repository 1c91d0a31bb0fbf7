//! Ports through which the wiring hooks reach the host framework.
//!
//! The host owns the node store, the routing table and the bundler; this
//! crate only ever touches them through the narrow capabilities below, which
//! keeps every hook testable against [`memory::MemoryHost`].
use std::future::Future;

use crate::content::{ContentNode, FeedItem, Layout};
use crate::errors::QueryError;
use crate::pages::PageRequest;

pub mod memory;

/// Result envelope of a host data query.
///
/// The host reports query failures as an error collection inside an
/// otherwise successful envelope; callers must inspect it explicitly. There
/// is no implicit exception path across this boundary.
#[derive(Debug)]
pub struct QueryEnvelope<T> {
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> QueryEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }

    /// Convert the envelope into a result, surfacing the host's error
    /// collection as a failed outcome.
    pub fn into_result(self) -> Result<T, QueryError> {
        if !self.errors.is_empty() {
            return Err(QueryError::Reported(self.errors));
        }
        self.data.ok_or(QueryError::MissingData)
    }
}

/// Projection of an annotated markdown node, as returned by the host's
/// markdown query. Draft nodes are filtered out host-side.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownRecord {
    pub slug: String,
    pub layout: Option<Layout>,
    pub tags: Vec<String>,
    pub category: Option<String>,
}

/// Host data-query interface.
pub trait DataLayer {
    fn markdown_nodes(&self)
    -> impl Future<Output = QueryEnvelope<Vec<MarkdownRecord>>> + Send;
    fn feed_items(&self) -> impl Future<Output = QueryEnvelope<Vec<FeedItem>>> + Send;
}

/// Host page-registration interface. Duplicate paths are a host-level error.
pub trait PageSink {
    fn create_page(&self, request: PageRequest);
}

/// Read access to already loaded nodes.
pub trait NodeLookup {
    fn get(&self, id: &str) -> Option<ContentNode>;
}

/// A derived field, named and typed, ready to be attached to a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeField {
    Slug(String),
    TagSlugs(Vec<String>),
    CategorySlug(String),
}

/// Host node-field interface. Attachment is not idempotent by itself; the
/// caller guards against re-annotation.
pub trait FieldSink {
    fn attach(&self, node_id: &str, field: NodeField);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::QueryError;

    #[test]
    fn envelopes_with_errors_become_failures() {
        let envelope: QueryEnvelope<Vec<u32>> = QueryEnvelope {
            data: Some(vec![1]),
            errors: vec!["bad field".to_string()],
        };

        match envelope.into_result() {
            Err(QueryError::Reported(errors)) => {
                assert_eq!(errors, vec!["bad field".to_string()])
            }
            other => panic!("expected reported errors, got {other:?}"),
        }
    }

    #[test]
    fn clean_envelopes_yield_their_data() {
        assert_eq!(QueryEnvelope::ok(7).into_result().unwrap(), 7);
    }

    #[test]
    fn empty_envelopes_are_missing_data() {
        let envelope: QueryEnvelope<u32> = QueryEnvelope {
            data: None,
            errors: Vec::new(),
        };

        assert!(matches!(envelope.into_result(), Err(QueryError::MissingData)));
    }
}

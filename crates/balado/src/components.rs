//! Presentational components rendered by the host's templates.
use chrono::{DateTime, Utc};
use maud::{Markup, Render, html};
use slug::slugify;

use crate::content::FeedItem;

/// Teaser card for one podcast episode.
///
/// The link target is a display slug derived from the title alone; it is not
/// guaranteed to match the episode path the planner routes, which prepends a
/// slash and strips a wider symbol set. The mismatch is inherited behavior.
pub struct EpisodeTeaser<'a> {
    pub item: &'a FeedItem,
}

impl<'a> EpisodeTeaser<'a> {
    pub fn new(item: &'a FeedItem) -> Self {
        Self { item }
    }

    fn display_slug(&self) -> String {
        slugify(&self.item.title)
    }
}

impl Render for EpisodeTeaser<'_> {
    fn render(&self) -> Markup {
        let slug = self.display_slug();
        let published = &self.item.published;

        html! {
            div.post {
                div.post__meta {
                    time.post__meta-time datetime=(format_long(published)) {
                        (published.format("%d/%m/%Y"))
                    }
                    span.post__meta-divider {}
                }
                h2.post__title {
                    a.post__title-link href=(slug) { (self.item.title) }
                }
                p.post__description { (self.item.description) }
                a.post__readmore href=(slug) { "Read" }
            }
        }
    }
}

fn format_long(published: &DateTime<Utc>) -> String {
    published.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permalink;
    use chrono::TimeZone;

    fn item() -> FeedItem {
        FeedItem {
            id: "ep-1".to_string(),
            guid: "guid-1".to_string(),
            title: "Episode #1: Hello, World!".to_string(),
            description: "A first look.".to_string(),
            published: Utc.with_ymd_and_hms(2023, 4, 7, 8, 30, 0).unwrap(),
            link: "https://example.com/ep-1".to_string(),
        }
    }

    #[test]
    fn renders_title_description_and_dates() {
        let item = item();
        let markup = EpisodeTeaser::new(&item).render().into_string();

        assert!(markup.contains("Episode #1: Hello, World!"), "{markup}");
        assert!(markup.contains("A first look."), "{markup}");
        assert!(markup.contains("07/04/2023"), "{markup}");
        assert!(markup.contains("datetime=\"April 7, 2023\""), "{markup}");
    }

    #[test]
    fn links_point_at_the_display_slug() {
        let item = item();
        let markup = EpisodeTeaser::new(&item).render().into_string();

        assert!(markup.contains("href=\"episode-1-hello-world\""), "{markup}");
    }

    #[test]
    fn display_slug_diverges_from_the_routed_episode_path() {
        let item = item();
        let teaser = EpisodeTeaser::new(&item);

        // Known inherited mismatch: the planner prepends `/`.
        assert_eq!(teaser.display_slug(), "episode-1-hello-world");
        assert_eq!(
            permalink::episode_path(&item.title),
            "/episode-1-hello-world"
        );
    }
}

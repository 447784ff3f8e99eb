//! Document-head metadata: the shell's entire surface toward browsers and
//! crawlers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

pub static SITE_TITLE: &str = "Imp and Skizz Podcast";
pub static SITE_DESCRIPTION: &str =
    "Every episode of the Imp and Skizz podcast in one index, with links to \
     YouTube, Spotify, Apple Podcasts, and Patreon.";
pub static SITE_PREVIEW_IMAGE: &str = "https://impandskizzpodcast.com/og-preview.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPair {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub ty: String,
    pub href: String,
}

/// Declarative head structure, seeded once at bootstrap and written once per
/// page render. Child components never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadMetadata {
    pub charset: &'static str,
    pub title: String,
    pub meta: Vec<MetaPair>,
    pub links: Vec<LinkTag>,
}

impl HeadMetadata {
    /// The site defaults: charset and viewport directives, title,
    /// description, the Open Graph preview set, and one favicon link.
    pub fn defaults() -> Self {
        Self {
            charset: "utf-8",
            title: SITE_TITLE.to_owned(),
            meta: vec![
                meta("viewport", "width=device-width, initial-scale=1"),
                meta("description", SITE_DESCRIPTION),
                meta("og:type", "website"),
                meta("og:title", SITE_TITLE),
                meta("og:description", SITE_DESCRIPTION),
                meta("og:image", SITE_PREVIEW_IMAGE),
            ],
            links: vec![LinkTag {
                rel: "icon".to_owned(),
                ty: "image/x-icon".to_owned(),
                href: "/favicon.ico".to_owned(),
            }],
        }
    }
}

fn meta(name: &str, content: &str) -> MetaPair {
    MetaPair {
        name: name.to_owned(),
        content: content.to_owned(),
    }
}

/// Emits the head structure through the meta context. Rendered once per page
/// render pass, directly under the shell root.
#[component]
pub fn SiteHead(head: HeadMetadata) -> impl IntoView {
    view! {
        <Meta charset=head.charset/>
        <Title text=head.title.clone()/>
        {head
            .meta
            .iter()
            .map(|pair| view! { <Meta name=pair.name.clone() content=pair.content.clone()/> })
            .collect_view()}
        {head
            .links
            .iter()
            .map(|link| {
                view! { <Link rel=link.rel.clone() type_=link.ty.clone() href=link.href.clone()/> }
            })
            .collect_view()}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_carry_a_title() {
        let head = HeadMetadata::defaults();
        assert!(!head.title.is_empty());
        assert_eq!(head.charset, "utf-8");
    }

    #[test]
    fn defaults_carry_exactly_one_favicon() {
        let head = HeadMetadata::defaults();
        let favicons: Vec<_> = head.links.iter().filter(|link| link.rel == "icon").collect();
        assert_eq!(favicons.len(), 1);
        assert_eq!(favicons[0].href, "/favicon.ico");
    }

    #[test]
    fn defaults_carry_the_crawler_tags() {
        let head = HeadMetadata::defaults();
        for name in ["viewport", "description", "og:type", "og:title", "og:image"] {
            assert!(
                head.meta.iter().any(|pair| pair.name == name),
                "missing {name}",
            );
        }
        let og_type = head.meta.iter().find(|pair| pair.name == "og:type").unwrap();
        assert_eq!(og_type.content, "website");
    }
}

use url::Url;

/// A hyperlink template. Values are appended to the base as a single,
/// percent-encoded path segment, so `bob smith` under
/// `https://osm.org/user` becomes `https://osm.org/user/bob%20smith`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    base: Url,
}

impl Link {
    /// Returns `None` for bases that cannot carry a path, such as `mailto:`.
    pub fn new(base: Url) -> Option<Self> {
        if base.cannot_be_a_base() {
            return None;
        }

        Some(Link { base })
    }

    /// A link below `site`, e.g. `https://osm.org` + `changeset`.
    pub fn under(site: &Url, segment: &str) -> Option<Self> {
        let link = Link::new(site.clone())?;
        Some(Link {
            base: link.join(segment),
        })
    }

    pub fn resolve(&self, value: &str) -> String {
        self.join(value).into()
    }

    fn join(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }
}

/// The links attached to the property rows of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub user: Link,
    pub changeset: Link,
}

impl Links {
    /// Links into the web frontend at `site` (`https://osm.org`).
    pub fn for_site(site: &Url) -> Option<Self> {
        Some(Links {
            user: Link::under(site, "user")?,
            changeset: Link::under(site, "changeset")?,
        })
    }
}

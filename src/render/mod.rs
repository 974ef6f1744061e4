//! HTML pages, rendered with Tera from templates embedded in the binary.
//!
//! All interpolated values are escaped; cell values longer than the
//! configured width are truncated, keeping the full value in `title`.

pub mod filters;


use std::sync::Arc;

use axum::http::StatusCode;
use history_diff::HistoryTable;
use history_model::ElementKind;
use strum::IntoEnumIterator;
use tera::{Context, Tera};
use url::Url;

use crate::Config;

mod embedded {
    pub const BASE_HTML: &str = include_str!("../../templates/base.html");
    pub const MACROS_HTML: &str = include_str!("../../templates/macros.html");
    pub const INDEX_HTML: &str = include_str!("../../templates/index.html");
    pub const HISTORY_HTML: &str = include_str!("../../templates/history.html");
    pub const NODE_HTML: &str = include_str!("../../templates/node.html");
    pub const WAY_HTML: &str = include_str!("../../templates/way.html");
    pub const RELATION_HTML: &str = include_str!("../../templates/relation.html");
    pub const MISSING_ELEMENT_HTML: &str = include_str!("../../templates/missing_element.html");
    pub const ERROR_HTML: &str = include_str!("../../templates/error.html");
}

#[derive(Clone)]
pub struct Renderer {
    tera: Arc<Tera>,
    value_width: usize,
    web_url: Url,
}

impl Renderer {
    pub fn new(config: &Config) -> tera::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("base.html", embedded::BASE_HTML),
            ("macros.html", embedded::MACROS_HTML),
            ("index.html", embedded::INDEX_HTML),
            ("history.html", embedded::HISTORY_HTML),
            ("node.html", embedded::NODE_HTML),
            ("way.html", embedded::WAY_HTML),
            ("relation.html", embedded::RELATION_HTML),
            ("missing_element.html", embedded::MISSING_ELEMENT_HTML),
            ("error.html", embedded::ERROR_HTML),
        ])?;

        tera.set_escape_fn(filters::escape_html);
        tera.register_filter("humanize", filters::humanize_filter);

        Ok(Renderer {
            tera: Arc::new(tera),
            value_width: config.value_width,
            web_url: config.web_url.clone(),
        })
    }

    pub fn index(&self) -> tera::Result<String> {
        let kinds: Vec<String> = ElementKind::iter().map(|kind| kind.to_string()).collect();

        let mut context = Context::new();
        context.insert("kinds", &kinds);

        self.tera.render("index.html", &context)
    }

    /// Renders `node.html`, `way.html` or `relation.html` for the table's kind.
    pub fn history(&self, table: &HistoryTable) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("table", table);
        context.insert("kind_title", table.kind.title());
        context.insert("element_url", &self.element_url(table.kind, table.id));
        context.insert("changed_rows", &table.changed_rows());
        context.insert("columns", &(table.versions.len() + 1));
        context.insert("value_width", &self.value_width);

        self.tera.render(&format!("{}.html", table.kind), &context)
    }

    pub fn missing(&self, kind: ElementKind, id: i64) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("kind", &kind);
        context.insert("kind_title", kind.title());
        context.insert("id", &id);

        self.tera.render("missing_element.html", &context)
    }

    pub fn failure(&self, status: StatusCode, message: &str) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("status", &status.to_string());
        context.insert("message", message);

        self.tera.render("error.html", &context)
    }

    /// The element's page on the OpenStreetMap website.
    fn element_url(&self, kind: ElementKind, id: i64) -> String {
        let mut url = self.web_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(kind.as_ref()).push(&id.to_string());
        }
        url.into()
    }
}

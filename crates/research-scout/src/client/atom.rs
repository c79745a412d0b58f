//! Streaming parser for arXiv Atom feeds.
//!
//! Each `<entry>` is read independently; its children may appear in any
//! order and namespace prefixes are ignored. An entry is kept only when both
//! `<title>` and `<summary>` carry text. Everything else degrades to a
//! default (see [`crate::models::PaperRecord`]).

use chrono::NaiveDate;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::models::{DEFAULT_AUTHORS, DEFAULT_CATEGORY, PaperRecord, UNKNOWN_DATE};

/// Parse an Atom feed into paper records, in document order.
///
/// Malformed markup stops the scan; entries completed before the error are
/// returned and the partially read entry is discarded.
#[must_use]
pub fn parse_feed(markup: &str) -> Vec<PaperRecord> {
    // untrimmed: text around inline markup keeps its separating spaces
    let mut reader = Reader::from_str(markup);

    let mut papers = Vec::new();
    let mut entry: Option<EntryBuilder> = None;
    let mut field: Option<Field> = None;
    let mut in_author = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"entry" {
                    entry = Some(EntryBuilder::default());
                    field = None;
                    in_author = false;
                    continue;
                }
                let Some(current) = entry.as_mut() else {
                    continue;
                };
                let opened = match name.as_ref() {
                    b"author" => {
                        in_author = true;
                        None
                    }
                    b"name" if in_author => Some(Field::AuthorName),
                    b"title" if !in_author => Some(Field::Title),
                    b"summary" => Some(Field::Summary),
                    b"published" => Some(Field::Published),
                    b"id" if !in_author => Some(Field::Id),
                    b"primary_category" => {
                        current.set_primary(&e);
                        None
                    }
                    b"category" => {
                        current.push_category(&e);
                        None
                    }
                    _ => None,
                };
                // markup nested inside a field keeps the text read so far
                if opened.is_some() && field.is_none() {
                    current.text.clear();
                    field = opened;
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some(current) = entry.as_mut() {
                    match e.local_name().as_ref() {
                        b"primary_category" => current.set_primary(&e),
                        b"category" => current.push_category(&e),
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(current), Some(_)) = (entry.as_mut(), field) {
                    match t.unescape() {
                        Ok(text) => current.text.push_str(&text),
                        Err(_) => current.text.push_str(&String::from_utf8_lossy(&t)),
                    }
                }
            }
            Ok(Event::CData(c)) => {
                if let (Some(current), Some(_)) = (entry.as_mut(), field) {
                    current.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"entry" => {
                        if let Some(paper) = entry.take().and_then(EntryBuilder::finish) {
                            papers.push(paper);
                        }
                        field = None;
                        in_author = false;
                    }
                    b"author" => in_author = false,
                    tag => {
                        if let (Some(current), Some(open)) = (entry.as_mut(), field) {
                            if open.tag() == tag {
                                current.commit(open);
                                field = None;
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!(
                    position = reader.buffer_position(),
                    error = %e,
                    parsed = papers.len(),
                    "Malformed Atom feed, keeping entries parsed so far"
                );
                break;
            }
            Ok(_) => {}
        }
    }

    papers
}

/// Normalize an Atom timestamp to `YYYY-MM-DD`, or `"N/A"` when it is not a date.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    let day = raw.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| UNKNOWN_DATE.to_string())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text-bearing entry children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Summary,
    Published,
    Id,
    AuthorName,
}

impl Field {
    fn tag(self) -> &'static [u8] {
        match self {
            Self::Title => b"title",
            Self::Summary => b"summary",
            Self::Published => b"published",
            Self::Id => b"id",
            Self::AuthorName => b"name",
        }
    }
}

#[derive(Debug, Default)]
struct EntryBuilder {
    title: String,
    summary: String,
    published: String,
    id: String,
    primary_category: Option<String>,
    categories: Vec<String>,
    authors: Vec<String>,
    text: String,
}

impl EntryBuilder {
    fn commit(&mut self, field: Field) {
        let value = collapse_whitespace(&std::mem::take(&mut self.text));
        match field {
            Field::Title => self.title = value,
            Field::Summary => self.summary = value,
            Field::Published => self.published = value,
            Field::Id => self.id = value,
            Field::AuthorName => {
                if !value.is_empty() {
                    self.authors.push(value);
                }
            }
        }
    }

    fn set_primary(&mut self, e: &BytesStart<'_>) {
        if let Some(term) = term_attribute(e) {
            self.primary_category = Some(term);
        }
    }

    fn push_category(&mut self, e: &BytesStart<'_>) {
        if let Some(term) = term_attribute(e) {
            self.categories.push(term);
        }
    }

    fn finish(self) -> Option<PaperRecord> {
        if self.title.is_empty() || self.summary.is_empty() {
            return None;
        }

        let primary_category = self
            .primary_category
            .or_else(|| self.categories.first().cloned())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let mut categories = vec![primary_category.clone()];
        for category in self.categories {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let authors = if self.authors.is_empty() {
            DEFAULT_AUTHORS.to_string()
        } else {
            self.authors.join(", ")
        };
        let author_names = self.authors;

        Some(PaperRecord {
            title: self.title,
            r#abstract: self.summary,
            date: normalize_date(&self.published),
            url: self.id,
            categories,
            primary_category,
            authors,
            author_names,
        })
    }
}

fn term_attribute(e: &BytesStart<'_>) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"term")
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.trim().to_string()))
        .filter(|term| !term.is_empty())
}

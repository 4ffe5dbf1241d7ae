use serde::{Deserialize, Serialize};

/// One complete issue of the newsletter, as served by `/` and `/api/newsletter-data`.
///
/// Documents are built wholesale by the [`ContentGenerator`](crate::domain::ContentGenerator)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterDocument {
    pub header: Header,
    pub title: String,
    pub main_article: Article,
    pub left_column: Column,
    pub right_column: RightColumn,
    pub comic_section: ComicSection,
    pub contribute_section: ContributeSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub edition: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub content: String,
    pub image_caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub content: String,
}

/// The joke column. `content` holds the joke's setup line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RightColumn {
    pub title: String,
    pub content: String,
    pub joke_lines: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicSection {
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributeSection {
    pub title: String,
    pub paragraphs: Vec<String>,
}

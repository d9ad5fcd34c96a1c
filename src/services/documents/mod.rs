//! Document metadata and text extraction: authors, language, microformats,
//! publication date, raw and cleaned text, title and feed links.

mod service;
mod types;

pub use service::{DocumentsService, DocumentsServiceImpl};
pub use types::{
    Authors, DocumentAuthors, DocumentText, DocumentTitle, Feed, Feeds, Language, Microformat,
    Microformats, PublicationDate, PublicationResponse, TextOptions, TitleOptions,
};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::date::parse_date_or_today;
use crate::document::Document;
use crate::error::DocStoreError;
use crate::user::User;

/// Read operations every storage exposes. Each takes the calling user.
pub trait DocumentStorage {
    fn get_document(&self, document_id: &str, user: &User) -> Option<&Document>;

    /// Dispatch on `search_type` (`content`, `type` or `date`, any case).
    /// Unknown types yield no results.
    fn search_documents(&self, query: &str, search_type: &str, user: &User) -> Vec<&Document>;

    fn search_documents_by_type(&self, doc_type: &str, user: &User) -> Vec<&Document>;

    /// Documents uploaded strictly after `start` and strictly before `end`.
    fn search_documents_by_date(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user: &User,
    ) -> Vec<&Document>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Content,
    Type,
    Date,
}

impl FromStr for SearchMode {
    type Err = DocStoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "type" => Ok(Self::Type),
            "date" => Ok(Self::Date),
            _ => Err(DocStoreError::UnknownSearchMode(raw.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Content => "content",
            Self::Type => "type",
            Self::Date => "date",
        })
    }
}

/// Documents keyed by id, iterated in first-insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `document` under its id. An existing document with the same id
    /// is replaced in place and returned.
    pub fn add_document(&mut self, document: Document) -> Option<Document> {
        match self.index.get(document.id()) {
            Some(&slot) => {
                debug!(id = document.id(), "replacing document");
                Some(std::mem::replace(&mut self.documents[slot], document))
            }
            None => {
                debug!(id = document.id(), "adding document");
                self.index
                    .insert(document.id().to_string(), self.documents.len());
                self.documents.push(document);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    fn search_documents_by_content(&self, query: &str) -> Vec<&Document> {
        self.iter()
            .filter(|doc| doc.content().contains(query))
            .collect()
    }
}

impl DocumentStorage for InMemoryStorage {
    fn get_document(&self, document_id: &str, _user: &User) -> Option<&Document> {
        self.index
            .get(document_id)
            .map(|&slot| &self.documents[slot])
    }

    fn search_documents(&self, query: &str, search_type: &str, user: &User) -> Vec<&Document> {
        match search_type.parse::<SearchMode>() {
            Ok(SearchMode::Content) => self.search_documents_by_content(query),
            Ok(SearchMode::Type) => self.search_documents_by_type(query, user),
            Ok(SearchMode::Date) => {
                let day = parse_date_or_today(query).date;
                self.search_documents_by_date(day, day, user)
            }
            Err(err) => {
                warn!(%err, "invalid search type");
                Vec::new()
            }
        }
    }

    fn search_documents_by_type(&self, doc_type: &str, _user: &User) -> Vec<&Document> {
        let wanted = doc_type.to_lowercase();
        self.iter()
            .filter(|doc| doc.doc_type().to_lowercase() == wanted)
            .collect()
    }

    fn search_documents_by_date(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        _user: &User,
    ) -> Vec<&Document> {
        self.iter()
            .filter(|doc| doc.uploaded_on() > start && doc.uploaded_on() < end)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn search_mode_ignores_case() {
        assert_eq!("Content".parse::<SearchMode>().unwrap(), SearchMode::Content);
        assert_eq!("TYPE".parse::<SearchMode>().unwrap(), SearchMode::Type);
        assert_eq!("date".parse::<SearchMode>().unwrap(), SearchMode::Date);
        assert!("title".parse::<SearchMode>().is_err());
    }

    #[test]
    fn replacement_keeps_slot() {
        let mut storage = InMemoryStorage::new();
        storage.add_document(Document::new("a", "A", "first", "note", day(2024, 1, 1)));
        storage.add_document(Document::new("b", "B", "second", "note", day(2024, 1, 2)));
        let old = storage
            .add_document(Document::new("a", "A2", "third", "note", day(2024, 1, 3)))
            .unwrap();

        assert_eq!(old.content(), "first");
        assert_eq!(storage.len(), 2);
        let titles: Vec<&str> = storage.iter().map(Document::title).collect();
        assert_eq!(titles, vec!["A2", "B"]);
    }
}

use chrono::NaiveDate;

use crate::document::Document;
use crate::storage::DocumentStorage;
use crate::user::User;

/// Access layer in front of a real storage. Every call is forwarded as is,
/// user included.
#[derive(Debug)]
pub struct DocumentStorageProxy<'a, S: ?Sized> {
    real: &'a S,
}

impl<'a, S: DocumentStorage + ?Sized> DocumentStorageProxy<'a, S> {
    pub fn new(real: &'a S) -> Self {
        Self { real }
    }
}

impl<S: DocumentStorage + ?Sized> DocumentStorage for DocumentStorageProxy<'_, S> {
    fn get_document(&self, document_id: &str, user: &User) -> Option<&Document> {
        self.real.get_document(document_id, user)
    }

    fn search_documents(&self, query: &str, search_type: &str, user: &User) -> Vec<&Document> {
        self.real.search_documents(query, search_type, user)
    }

    fn search_documents_by_type(&self, doc_type: &str, user: &User) -> Vec<&Document> {
        self.real.search_documents_by_type(doc_type, user)
    }

    fn search_documents_by_date(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user: &User,
    ) -> Vec<&Document> {
        self.real.search_documents_by_date(start, end, user)
    }
}

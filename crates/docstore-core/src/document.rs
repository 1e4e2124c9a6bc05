use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: String,
    title: String,
    content: String,
    doc_type: String,
    uploaded_on: NaiveDate,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        doc_type: impl Into<String>,
        uploaded_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            doc_type: doc_type.into(),
            uploaded_on,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    pub fn uploaded_on(&self) -> NaiveDate {
        self.uploaded_on
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_doc_type(&mut self, doc_type: impl Into<String>) {
        self.doc_type = doc_type.into();
    }

    pub fn set_uploaded_on(&mut self, uploaded_on: NaiveDate) {
        self.uploaded_on = uploaded_on;
    }
}

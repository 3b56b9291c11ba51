use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Placeholder reported for every field the extractor could not locate.
pub const NOT_FOUND: &str = "Not Found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pan,
    Aadhar,
}

const PAN_FIELDS: [Field; 4] = [
    Field::Name,
    Field::FathersName,
    Field::DateOfBirth,
    Field::PanNumber,
];

const AADHAR_FIELDS: [Field; 5] = [
    Field::Name,
    Field::DateOfBirth,
    Field::Gender,
    Field::AadharNumber,
    Field::Address,
];

impl DocumentType {
    /// Declared fields, in presentation order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            DocumentType::Pan => &PAN_FIELDS,
            DocumentType::Aadhar => &AADHAR_FIELDS,
        }
    }

    /// Map a classifier label onto a document type. Labels are matched by
    /// substring, so "aadhar_front" and "PAN-card" both resolve.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("aadhar") {
            Some(DocumentType::Aadhar)
        } else if label.contains("pan") {
            Some(DocumentType::Pan)
        } else {
            None
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::Pan => "PAN Card",
            DocumentType::Aadhar => "Aadhar Card",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    FathersName,
    DateOfBirth,
    PanNumber,
    Gender,
    AadharNumber,
    Address,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::FathersName => "Father's Name",
            Field::DateOfBirth => "Date of Birth",
            Field::PanNumber => "PAN Number",
            Field::Gender => "Gender",
            Field::AadharNumber => "Aadhar Number",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Extraction result for one document.
///
/// Every declared field of the document type is present from construction
/// onwards, holding either an extracted value or [`NOT_FOUND`]. Entries keep
/// the declared order of [`DocumentType::fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    document_type: DocumentType,
    values: Vec<(Field, String)>,
}

impl FieldSet {
    pub fn new(document_type: DocumentType) -> Self {
        let values = document_type
            .fields()
            .iter()
            .map(|field| (*field, NOT_FOUND.to_string()))
            .collect();

        FieldSet {
            document_type,
            values,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Store a value for a declared field. Blank values and fields outside the
    /// declared set are ignored; returns whether the value was stored.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value: String = value.into();
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        match self.values.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => {
                *slot = value.to_string();
                true
            }
            None => {
                log::debug!("{} is not a {} field, ignoring", field, self.document_type);
                false
            }
        }
    }

    /// Raw stored value, sentinel included. `None` only for undeclared fields.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Extracted value, or `None` when the field was not located.
    pub fn found(&self, field: Field) -> Option<&str> {
        self.value(field).filter(|v| *v != NOT_FOUND)
    }

    pub fn is_found(&self, field: Field) -> bool {
        self.found(field).is_some()
    }

    pub fn found_count(&self) -> usize {
        self.values.iter().filter(|(_, v)| v != NOT_FOUND).count()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.label(), value)?;
        }
        map.end()
    }
}

/// Output of the document classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn document_type(&self) -> Option<DocumentType> {
        DocumentType::from_label(&self.label)
    }
}

/// Everything learned about one uploaded image.
#[derive(Debug, Clone, Serialize)]
pub struct KycReport {
    pub classification: Classification,
    pub document_type: Option<DocumentType>,
    pub raw_text: String,
    /// `None` when the classifier label matched no supported document type.
    pub fields: Option<FieldSet>,
}

use crate::utils::text::capitalize;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Lecture,
    Assignment,
    Slides,
    Video,
    Resource,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Lecture => "lecture",
            MaterialType::Assignment => "assignment",
            MaterialType::Slides => "slides",
            MaterialType::Video => "video",
            MaterialType::Resource => "resource",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MaterialType::Lecture => "📄",
            MaterialType::Assignment => "📋",
            MaterialType::Slides => "📊",
            MaterialType::Video => "🎥",
            MaterialType::Resource => "📚",
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

/// Course material uploaded for a subject
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub subject_id: String,
    pub material_type: MaterialType,
    pub name: String,
    pub file_name: String,
    pub description: String,
    pub uploaded_date: NaiveDate,
    pub download_count: u32,
}

/// Materials of one subject, as listed on the materials tab
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaterialGroup {
    pub subject_id: String,
    pub subject_name: String,
    pub materials: Vec<MaterialEntry>,
}

/// One listed material with its display decorations
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaterialEntry {
    #[serde(flatten)]
    pub material: Material,
    pub icon: &'static str,
    pub type_label: String,
}

impl From<Material> for MaterialEntry {
    fn from(material: Material) -> Self {
        Self {
            icon: material.material_type.icon(),
            type_label: material.material_type.label(),
            material,
        }
    }
}

/// Local metadata of a selected file; contents are never read
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Label shown once a file is picked, e.g. `✓ notes.pdf (12.50 KB)`
    pub fn selection_label(&self) -> String {
        format!("✓ {} ({:.2} KB)", self.name, self.size_bytes as f64 / 1024.0)
    }
}

use crate::core::error::{RecordKind, StoreError};
use crate::models::material::Material;
use dashmap::DashMap;

/// In-memory course materials grouped by subject id
pub struct MaterialStore {
    groups: DashMap<String, Vec<Material>>,
}

impl MaterialStore {
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
        }
    }

    /// Append a material to the end of its subject group
    pub fn add(&self, material: Material) {
        self.groups
            .entry(material.subject_id.clone())
            .or_default()
            .push(material);
    }

    /// Remove one material by id. An emptied subject group is dropped.
    ///
    /// Lookup, removal and the group cleanup happen in one pass, under the
    /// lock of the shard holding the material.
    pub fn remove(&self, material_id: &str) -> Result<Material, StoreError> {
        let mut removed = None;

        self.groups.retain(|_, group| {
            if removed.is_none() {
                if let Some(pos) = group.iter().position(|material| material.id == material_id) {
                    removed = Some(group.remove(pos));
                }
            }
            !group.is_empty()
        });

        removed.ok_or_else(|| StoreError::not_found(RecordKind::Material, material_id))
    }

    /// Bump the download counter and return the updated material
    pub fn record_download(&self, material_id: &str) -> Result<Material, StoreError> {
        self.groups
            .iter_mut()
            .find_map(|mut entry| {
                entry
                    .value_mut()
                    .iter_mut()
                    .find(|material| material.id == material_id)
                    .map(|material| {
                        material.download_count += 1;
                        material.clone()
                    })
            })
            .ok_or_else(|| StoreError::not_found(RecordKind::Material, material_id))
    }

    pub fn contains(&self, material_id: &str) -> bool {
        self.groups
            .iter()
            .any(|entry| entry.value().iter().any(|material| material.id == material_id))
    }

    /// Materials of one subject in upload order
    pub fn by_subject(&self, subject_id: &str) -> Vec<Material> {
        self.groups
            .get(subject_id)
            .map(|group| group.value().clone())
            .unwrap_or_default()
    }

    /// All groups, ordered by subject id
    pub fn groups(&self) -> Vec<(String, Vec<Material>)> {
        let mut groups: Vec<(String, Vec<Material>)> = self
            .groups
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        groups
    }

    /// Total number of materials across all subjects
    pub fn len(&self) -> usize {
        self.groups.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MaterialStore {
    fn default() -> Self {
        Self::new()
    }
}

use crate::core::error::{IntentError, RecordKind, StoreError};
use crate::core::portal::{Confirm, Portal};
use crate::models::event::PortalEvent;
use crate::models::material::{Material, MaterialEntry, MaterialGroup};
use crate::utils::ids::{generate_unique_id, MATERIAL_PREFIX};
use crate::utils::time::today;
use crate::validation::forms::UploadForm;
use tracing::info;

pub const DELETE_MATERIAL_PROMPT: &str = "Are you sure you want to delete this material?";

impl Portal {
    pub fn upload_material(&mut self, form: &UploadForm) -> Result<Material, IntentError> {
        self.begin("upload_material");

        let upload = form
            .validate()
            .or_else(|e| self.reject("upload_material", e))?;

        if self.state.config.subject(&upload.subject_id).is_none() {
            let err = StoreError::not_found(RecordKind::Subject, upload.subject_id.as_str());
            return self.reject("upload_material", err);
        }

        let materials = &self.state.materials;
        let material = Material {
            id: generate_unique_id(MATERIAL_PREFIX, |id| materials.contains(id)),
            subject_id: upload.subject_id,
            material_type: upload.material_type,
            name: upload.name,
            file_name: upload.file_name,
            description: upload.description,
            uploaded_date: today(),
            download_count: 0,
        };

        self.state.materials.add(material.clone());
        info!(
            id = %material.id,
            subject_id = %material.subject_id,
            material_type = material.material_type.as_str(),
            "Material uploaded"
        );
        self.emit(PortalEvent::MaterialAdded(material.clone()));

        self.accept("Material uploaded successfully");
        Ok(material)
    }

    /// Delete a material once the user confirms.
    ///
    /// Unknown ids are rejected before prompting. Returns `Ok(None)` when
    /// the user declines.
    pub fn delete_material(
        &mut self,
        id: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<Option<Material>, IntentError> {
        self.begin("delete_material");

        if !self.state.materials.contains(id) {
            return self.reject(
                "delete_material",
                StoreError::not_found(RecordKind::Material, id),
            );
        }

        if !confirm.confirm(DELETE_MATERIAL_PROMPT) {
            self.declined("delete_material");
            return Ok(None);
        }

        let removed = self
            .state
            .materials
            .remove(id)
            .or_else(|e| self.reject("delete_material", e))?;

        info!(id = %removed.id, subject_id = %removed.subject_id, "Material deleted");
        self.emit(PortalEvent::MaterialRemoved {
            id: removed.id.clone(),
        });

        self.accept("Material deleted successfully");
        Ok(Some(removed))
    }

    /// Count a download. Serving the file itself is up to the host.
    pub fn download_material(&mut self, id: &str) -> Result<Material, IntentError> {
        self.begin("download_material");

        let material = self
            .state
            .materials
            .record_download(id)
            .or_else(|e| self.reject("download_material", e))?;

        info!(
            id = %material.id,
            downloads = material.download_count,
            "Material download initiated"
        );

        self.accept("Material download initiated");
        Ok(material)
    }

    /// Materials grouped by subject, with subject names resolved
    pub fn material_groups(&self) -> Vec<MaterialGroup> {
        self.state
            .materials
            .groups()
            .into_iter()
            .map(|(subject_id, materials)| {
                let subject_name = self
                    .state
                    .config
                    .subject(&subject_id)
                    .map(|subject| subject.name.clone())
                    .unwrap_or_else(|| subject_id.clone());

                MaterialGroup {
                    subject_id,
                    subject_name,
                    materials: materials.into_iter().map(MaterialEntry::from).collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::error::{Field, ValidationError};
    use crate::core::portal::Preconfirmed;
    use crate::models::material::{FileMeta, MaterialType};
    use crate::models::notice::Severity;
    use crate::notify::sink::RecordingSink;

    fn portal() -> (Portal, RecordingSink) {
        let sink = RecordingSink::new();
        let portal = Portal::new(Config::default(), Box::new(sink.clone()));
        (portal, sink)
    }

    fn form(subject: &str, name: &str) -> UploadForm {
        UploadForm {
            subject: subject.to_string(),
            material_type: Some(MaterialType::Slides),
            name: name.to_string(),
            description: "Week 3".to_string(),
            file: Some(FileMeta::new("trees.pdf", 12_800)),
        }
    }

    #[test]
    fn test_upload_material() {
        let (mut portal, sink) = portal();

        let material = portal.upload_material(&form("CS201", "Trees")).unwrap();

        assert!(material.id.starts_with("MAT-"));
        assert_eq!(material.download_count, 0);
        assert_eq!(material.file_name, "trees.pdf");
        assert_eq!(portal.state().materials.by_subject("CS201"), vec![material.clone()]);
        assert_eq!(sink.events()[0], PortalEvent::MaterialAdded(material));
        assert_eq!(
            sink.notices(),
            vec![("Material uploaded successfully".to_string(), Severity::Success)]
        );
    }

    #[test]
    fn test_upload_without_name() {
        let (mut portal, sink) = portal();

        let err = portal.upload_material(&form("CS201", "  ")).unwrap_err();

        assert_eq!(err, IntentError::from(ValidationError::missing(Field::Name)));
        assert!(portal.state().materials.is_empty());
        assert_eq!(
            sink.notices(),
            vec![(
                "Please fill in all required fields".to_string(),
                Severity::Error
            )]
        );
    }

    #[test]
    fn test_upload_unknown_subject() {
        let (mut portal, _sink) = portal();

        let err = portal.upload_material(&form("ZZ999", "Trees")).unwrap_err();

        assert_eq!(
            err,
            IntentError::from(StoreError::not_found(RecordKind::Subject, "ZZ999"))
        );
        assert!(portal.state().materials.is_empty());
    }

    #[test]
    fn test_delete_material() {
        let (mut portal, sink) = portal();
        let keep = portal.upload_material(&form("CS201", "Trees")).unwrap();
        let gone = portal.upload_material(&form("CS201", "Graphs")).unwrap();
        sink.clear();

        let mut prompts = Vec::new();
        let removed = portal
            .delete_material(&gone.id, &mut |prompt: &str| {
                prompts.push(prompt.to_string());
                true
            })
            .unwrap();

        assert_eq!(removed, Some(gone.clone()));
        assert_eq!(prompts, vec![DELETE_MATERIAL_PROMPT]);
        assert_eq!(portal.state().materials.by_subject("CS201"), vec![keep]);
        assert_eq!(sink.events()[0], PortalEvent::MaterialRemoved { id: gone.id });
        assert_eq!(sink.notices()[0].0, "Material deleted successfully");
    }

    #[test]
    fn test_delete_declined() {
        let (mut portal, sink) = portal();
        let material = portal.upload_material(&form("CS201", "Trees")).unwrap();
        sink.clear();

        let removed = portal
            .delete_material(&material.id, &mut Preconfirmed(false))
            .unwrap();

        assert_eq!(removed, None);
        assert!(portal.state().materials.contains(&material.id));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_changes_nothing() {
        let (mut portal, sink) = portal();
        portal.upload_material(&form("CS201", "Trees")).unwrap();
        let leaves_before = portal.state().leaves.len();
        sink.clear();

        let mut asked = false;
        let err = portal
            .delete_material("MAT-NOPE", &mut |_: &str| {
                asked = true;
                true
            })
            .unwrap_err();

        assert_eq!(
            err,
            IntentError::from(StoreError::not_found(RecordKind::Material, "MAT-NOPE"))
        );
        assert!(!asked);
        assert_eq!(portal.state().materials.len(), 1);
        assert_eq!(portal.state().leaves.len(), leaves_before);
        assert_eq!(
            sink.notices(),
            vec![("Material not found".to_string(), Severity::Error)]
        );
    }

    #[test]
    fn test_download_material() {
        let (mut portal, sink) = portal();
        let material = portal.upload_material(&form("CS201", "Trees")).unwrap();

        portal.download_material(&material.id).unwrap();
        let updated = portal.download_material(&material.id).unwrap();

        assert_eq!(updated.download_count, 2);
        assert_eq!(sink.notices().last().unwrap().0, "Material download initiated");
        assert!(portal.download_material("MAT-NOPE").is_err());
    }

    #[test]
    fn test_material_groups() {
        let (mut portal, _sink) = portal();
        portal.upload_material(&form("MA101", "Limits")).unwrap();
        portal.upload_material(&form("CS201", "Trees")).unwrap();

        let groups = portal.material_groups();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].subject_id, "CS201");
        assert_eq!(groups[0].subject_name, "Data Structures");
        assert_eq!(groups[1].subject_name, "Engineering Mathematics");
        assert_eq!(groups[0].materials[0].icon, "📊");
        assert_eq!(groups[0].materials[0].type_label, "Slides");
    }
}

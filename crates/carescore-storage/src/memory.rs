use carescore_core::models::assessment::BradenAssessment;
use carescore_core::models::patient::Patient;
use tracing::debug;
use uuid::Uuid;

use crate::error::StorageError;
use crate::repository::AssessmentRepository;

/// Vector-backed repository. Insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    patients: Vec<Patient>,
    assessments: Vec<BradenAssessment>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    fn patient(&self, id: Uuid) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }

    fn insert_patient(&mut self, patient: Patient) -> Result<(), StorageError> {
        if self.patients.iter().any(|p| p.id == patient.id) {
            return Err(StorageError::Duplicate {
                kind: "patient",
                id: patient.id,
            });
        }
        debug!(patient_id = %patient.id, "patient added");
        self.patients.push(patient);
        Ok(())
    }

    fn update_patient(&mut self, patient: Patient) -> Result<(), StorageError> {
        let slot = self
            .patients
            .iter_mut()
            .find(|p| p.id == patient.id)
            .ok_or(StorageError::NotFound {
                kind: "patient",
                id: patient.id,
            })?;
        *slot = patient;
        Ok(())
    }

    fn delete_patient(&mut self, id: Uuid) -> Result<Patient, StorageError> {
        let index = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or(StorageError::NotFound { kind: "patient", id })?;
        let removed = self.patients.remove(index);
        let before = self.assessments.len();
        self.assessments.retain(|a| a.patient_id != id);
        debug!(
            patient_id = %id,
            assessments_removed = before - self.assessments.len(),
            "patient deleted"
        );
        Ok(removed)
    }

    fn assessments(&self) -> Vec<BradenAssessment> {
        self.assessments.clone()
    }

    fn assessment(&self, id: Uuid) -> Option<BradenAssessment> {
        self.assessments.iter().find(|a| a.id == id).cloned()
    }

    fn record_assessment(&mut self, assessment: BradenAssessment) -> Result<(), StorageError> {
        if self.assessments.iter().any(|a| a.id == assessment.id) {
            return Err(StorageError::Duplicate {
                kind: "assessment",
                id: assessment.id,
            });
        }
        debug!(
            assessment_id = %assessment.id,
            patient_id = %assessment.patient_id,
            score = assessment.total_score,
            "assessment recorded"
        );
        self.assessments.push(assessment);
        Ok(())
    }

    fn delete_assessment(&mut self, id: Uuid) -> Result<BradenAssessment, StorageError> {
        let index = self
            .assessments
            .iter()
            .position(|a| a.id == id)
            .ok_or(StorageError::NotFound {
                kind: "assessment",
                id,
            })?;
        Ok(self.assessments.remove(index))
    }

    fn history(&self, patient_id: Uuid) -> Vec<BradenAssessment> {
        self.assessments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect()
    }
}

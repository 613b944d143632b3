use carescore_core::models::assessment::BradenAssessment;
use carescore_core::models::patient::Patient;
use uuid::Uuid;

use crate::error::StorageError;

/// Patient and Braden-assessment collection owned by the application.
///
/// The scoring and advice crates never touch this; callers read a snapshot
/// (e.g. [`AssessmentRepository::history`]) and pass it in.
pub trait AssessmentRepository {
    fn patients(&self) -> Vec<Patient>;

    fn patient(&self, id: Uuid) -> Option<Patient>;

    /// Add a new patient. Fails if the id is already present.
    fn insert_patient(&mut self, patient: Patient) -> Result<(), StorageError>;

    /// Replace an existing patient record.
    fn update_patient(&mut self, patient: Patient) -> Result<(), StorageError>;

    /// Remove a patient together with all of their assessments.
    fn delete_patient(&mut self, id: Uuid) -> Result<Patient, StorageError>;

    fn assessments(&self) -> Vec<BradenAssessment>;

    fn assessment(&self, id: Uuid) -> Option<BradenAssessment>;

    /// Store a completed assessment. Assessments are never edited in place;
    /// a correction is a new assessment.
    fn record_assessment(&mut self, assessment: BradenAssessment) -> Result<(), StorageError>;

    fn delete_assessment(&mut self, id: Uuid) -> Result<BradenAssessment, StorageError>;

    /// All assessments for one patient, in the order they were recorded.
    fn history(&self, patient_id: Uuid) -> Vec<BradenAssessment> {
        self.assessments()
            .into_iter()
            .filter(|a| a.patient_id == patient_id)
            .collect()
    }
}

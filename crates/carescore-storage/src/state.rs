use std::path::Path;

use carescore_core::models::assessment::BradenAssessment;
use carescore_core::models::patient::Patient;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StorageError;
use crate::repository::AssessmentRepository;

/// Format version written into every backup.
pub const BACKUP_VERSION: &str = "1.0.0";

/// Portable snapshot of a repository plus the facility name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub version: String,
    pub facility_name: String,
    pub patients: Vec<Patient>,
    pub assessments: Vec<BradenAssessment>,
    pub exported_at: jiff::Timestamp,
}

/// What an import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub patients_imported: usize,
    pub patients_skipped: usize,
    pub assessments_imported: usize,
    pub assessments_skipped: usize,
    /// Facility name carried by the backup, if it had a non-empty one.
    pub facility_name: Option<String>,
}

pub fn export_backup<R: AssessmentRepository + ?Sized>(
    repo: &R,
    facility_name: &str,
    exported_at: jiff::Timestamp,
) -> Backup {
    Backup {
        version: BACKUP_VERSION.to_string(),
        facility_name: facility_name.to_string(),
        patients: repo.patients(),
        assessments: repo.assessments(),
        exported_at,
    }
}

/// Merge a backup into `repo`. Records whose id already exists are kept as
/// they are and counted as skipped.
pub fn import_backup<R: AssessmentRepository + ?Sized>(repo: &mut R, backup: Backup) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for patient in backup.patients {
        if repo.patient(patient.id).is_some() {
            summary.patients_skipped += 1;
        } else if repo.insert_patient(patient).is_ok() {
            summary.patients_imported += 1;
        }
    }

    for assessment in backup.assessments {
        if repo.assessment(assessment.id).is_some() {
            summary.assessments_skipped += 1;
        } else if repo.record_assessment(assessment).is_ok() {
            summary.assessments_imported += 1;
        }
    }

    let facility = backup.facility_name.trim();
    if !facility.is_empty() {
        summary.facility_name = Some(facility.to_string());
    }

    info!(
        patients = summary.patients_imported,
        assessments = summary.assessments_imported,
        skipped = summary.patients_skipped + summary.assessments_skipped,
        "backup imported"
    );
    summary
}

pub fn to_json(backup: &Backup) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec_pretty(backup)?)
}

/// Parse and validate a backup document.
pub fn from_json(bytes: &[u8]) -> Result<Backup, StorageError> {
    let backup: Backup = serde_json::from_slice(bytes)?;
    if backup.version.trim().is_empty() {
        return Err(StorageError::InvalidBackup("missing version".to_string()));
    }
    Ok(backup)
}

pub fn load_backup(path: &Path) -> Result<Backup, StorageError> {
    let bytes = std::fs::read(path)?;
    from_json(&bytes)
}

/// Write a backup file, via a temp file and rename so a partial write never
/// replaces an existing backup.
pub fn save_backup(path: &Path, backup: &Backup) -> Result<(), StorageError> {
    let body = to_json(backup)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, body)?;
    std::fs::rename(&tmp_path, path)?;
    info!(path = %path.display(), patients = backup.patients.len(), "backup saved");
    Ok(())
}

/// Default backup file name for a given day, e.g. `carescore-backup-2026-10-14.json`.
pub fn backup_file_name(date: jiff::civil::Date) -> String {
    format!("carescore-backup-{date}.json")
}

use std::io::Write;
use std::path::{Path, PathBuf};

use carescore_advisor::braden::BradenContext;
use carescore_advisor::caprini::CapriniContext;
use carescore_advisor::wells::WellsContext;
use carescore_core::models::analysis::{BradenAnalysis, CapriniAnalysis, WellsAnalysis};
use carescore_core::models::assessment::{BradenAssessment, CapriniAssessment, WellsAssessment};
use carescore_core::models::patient::{Patient, PatientAttributes};
use carescore_core::models::trend::TrendAnalysis;
use carescore_export::docx::generate_docx;
use carescore_export::render::render_report;
use carescore_export::report::{ReportData, ReportHeader};
use carescore_export::styles::DocumentStyles;
use carescore_instruments::{all_instruments, braden, caprini, wells};
use carescore_storage::memory::MemoryRepository;
use carescore_storage::repository::AssessmentRepository;
use carescore_storage::state;
use serde::Serialize;
use tracing::info;

use crate::config::{self, CarescoreConfig};
use crate::input::{read_json, BradenInput, CapriniInput, WellsInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Docx,
}

/// Resolved settings shared by every command.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: CarescoreConfig,
    pub config_path: PathBuf,
    pub facility_name: String,
    pub store_path: PathBuf,
}

impl Session {
    fn header(&self, generated_at: jiff::Timestamp) -> ReportHeader {
        ReportHeader {
            facility_name: self.facility_name.clone(),
            generated_at,
            supervisor_name: None,
        }
    }
}

#[derive(Serialize)]
struct BradenOutput<'a> {
    patient: &'a Patient,
    assessment: &'a BradenAssessment,
    analysis: &'a BradenAnalysis,
    trend: Option<&'a TrendAnalysis>,
}

#[derive(Serialize)]
struct CapriniOutput<'a> {
    patient: &'a Patient,
    assessment: &'a CapriniAssessment,
    analysis: &'a CapriniAnalysis,
}

#[derive(Serialize)]
struct WellsOutput<'a> {
    patient: &'a Patient,
    assessment: &'a WellsAssessment,
    analysis: &'a WellsAnalysis,
}

pub fn braden(
    session: &Session,
    input: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    record: bool,
) -> eyre::Result<()> {
    let doc: BradenInput = read_json(input)?;
    let now = jiff::Timestamp::now();
    let patient = doc.patient.into_patient(session.config.default_care_setting, now);

    let mut assessment = braden::assess(patient.id, doc.scores, doc.date.unwrap_or(now))?;
    assessment.notes = doc.notes;
    assessment.assessed_by = doc.assessed_by.or_else(|| session.config.default_assessor.clone());

    let trend = if record {
        let mut repo = load_store(&session.store_path)?;
        if repo.patient(patient.id).is_none() {
            repo.insert_patient(patient.clone())?;
        }
        repo.record_assessment(assessment.clone())?;
        save_store(&session.store_path, &repo, &session.facility_name)?;
        carescore_advisor::trend::analyze(&repo.history(patient.id))
    } else {
        None
    };

    let ctx = BradenContext::from_assessment(&assessment, PatientAttributes::from(&patient));
    let analysis = carescore_advisor::braden::generate(&ctx);

    match format {
        OutputFormat::Json => emit_json(
            &BradenOutput {
                patient: &patient,
                assessment: &assessment,
                analysis: &analysis,
                trend: trend.as_ref(),
            },
            output,
        ),
        OutputFormat::Markdown | OutputFormat::Docx => {
            let report = ReportData::braden(&session.header(now), &patient, &assessment, &analysis, trend.as_ref());
            emit_report(&report, format, output)
        }
    }
}

pub fn caprini(session: &Session, input: &Path, format: OutputFormat, output: Option<&Path>) -> eyre::Result<()> {
    let doc: CapriniInput = read_json(input)?;
    let now = jiff::Timestamp::now();
    let patient = doc.patient.into_patient(session.config.default_care_setting, now);

    let unknown = caprini::unknown_factors(&doc.selected_factors);
    if !unknown.is_empty() {
        tracing::warn!(unknown = ?unknown, "ignoring unknown caprini factors");
    }

    let mut assessment = caprini::assess(patient.id, doc.selected_factors, doc.date.unwrap_or(now));
    assessment.notes = doc.notes;
    assessment.assessed_by = doc.assessed_by.or_else(|| session.config.default_assessor.clone());

    let ctx = CapriniContext::from_assessment(&assessment, PatientAttributes::from(&patient));
    let analysis = carescore_advisor::caprini::generate(&ctx);

    match format {
        OutputFormat::Json => emit_json(
            &CapriniOutput {
                patient: &patient,
                assessment: &assessment,
                analysis: &analysis,
            },
            output,
        ),
        OutputFormat::Markdown | OutputFormat::Docx => {
            let report = ReportData::caprini(&session.header(now), &patient, &assessment, &analysis);
            emit_report(&report, format, output)
        }
    }
}

pub fn wells(session: &Session, input: &Path, format: OutputFormat, output: Option<&Path>) -> eyre::Result<()> {
    let doc: WellsInput = read_json(input)?;
    let now = jiff::Timestamp::now();
    let patient = doc.patient.into_patient(session.config.default_care_setting, now);

    let mut assessment = wells::assess(patient.id, doc.selected_criteria, doc.date.unwrap_or(now));
    assessment.notes = doc.notes;
    assessment.assessed_by = doc.assessed_by.or_else(|| session.config.default_assessor.clone());

    let ctx = WellsContext::from_assessment(&assessment, PatientAttributes::from(&patient));
    let analysis = carescore_advisor::wells::generate(&ctx);

    match format {
        OutputFormat::Json => emit_json(
            &WellsOutput {
                patient: &patient,
                assessment: &assessment,
                analysis: &analysis,
            },
            output,
        ),
        OutputFormat::Markdown | OutputFormat::Docx => {
            let report = ReportData::wells(&session.header(now), &patient, &assessment, &analysis);
            emit_report(&report, format, output)
        }
    }
}

pub fn trend(history: &Path) -> eyre::Result<()> {
    let assessments: Vec<BradenAssessment> = read_json(history)?;
    let analysis = carescore_advisor::trend::analyze(&assessments).ok_or_else(|| {
        eyre::eyre!(
            "trend needs at least two assessments, {} has {}",
            history.display(),
            assessments.len()
        )
    })?;
    emit_json(&analysis, None)
}

pub fn instruments() -> eyre::Result<()> {
    let mut out = std::io::stdout().lock();
    for instrument in all_instruments() {
        writeln!(out, "{} ({})", instrument.name(), instrument.id())?;
        for band in instrument.tiers() {
            writeln!(out, "  {:<22} {}", band.label, band.score_range())?;
        }
    }
    Ok(())
}

pub fn backup_export(session: &Session, output: Option<&Path>) -> eyre::Result<()> {
    let repo = load_store(&session.store_path)?;
    let backup = state::export_backup(&repo, &session.facility_name, jiff::Timestamp::now());

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(state::backup_file_name(jiff::Zoned::now().date())),
    };
    state::save_backup(&path, &backup)?;
    println!("{}", path.display());
    Ok(())
}

pub fn backup_import(session: &Session, input: &Path) -> eyre::Result<()> {
    let backup = state::load_backup(input)?;
    let mut repo = load_store(&session.store_path)?;
    let summary = state::import_backup(&mut repo, backup);

    let mut facility_name = session.facility_name.clone();
    if let Some(name) = &summary.facility_name {
        let mut config = session.config.clone();
        config.facility_name = name.clone();
        config::save_config(&session.config_path, &config)?;
        facility_name = name.clone();
    }

    save_store(&session.store_path, &repo, &facility_name)?;
    emit_json(&summary, None)
}

pub fn config_show(session: &Session) -> eyre::Result<()> {
    #[derive(Serialize)]
    struct Shown<'a> {
        path: String,
        effective_facility_name: &'a str,
        #[serde(flatten)]
        config: &'a CarescoreConfig,
    }

    emit_json(
        &Shown {
            path: session.config_path.display().to_string(),
            effective_facility_name: &session.facility_name,
            config: &session.config,
        },
        None,
    )
}

pub fn config_set_facility(session: &Session, name: &str) -> eyre::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        eyre::bail!("facility name must not be empty");
    }
    let mut config = session.config.clone();
    config.facility_name = name.to_string();
    config::save_config(&session.config_path, &config)?;
    info!(facility = name, "facility name updated");
    Ok(())
}

/// Open the store file as a repository. A missing file is an empty store.
fn load_store(path: &Path) -> eyre::Result<MemoryRepository> {
    let mut repo = MemoryRepository::new();
    if path.exists() {
        state::import_backup(&mut repo, state::load_backup(path)?);
    }
    Ok(repo)
}

fn save_store(path: &Path, repo: &MemoryRepository, facility_name: &str) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let snapshot = state::export_backup(repo, facility_name, jiff::Timestamp::now());
    state::save_backup(path, &snapshot)?;
    Ok(())
}

fn emit_report(report: &ReportData, format: OutputFormat, output: Option<&Path>) -> eyre::Result<()> {
    let markdown = render_report(report)?;
    if format == OutputFormat::Docx {
        let path = output.ok_or_else(|| eyre::eyre!("--output is required for docx"))?;
        let bytes = generate_docx(&markdown, &DocumentStyles::default())?;
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), "docx written");
        return Ok(());
    }
    emit(markdown.as_bytes(), output)
}

fn emit_json<T: Serialize>(value: &T, output: Option<&Path>) -> eyre::Result<()> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    emit(body.as_bytes(), output)
}

fn emit(bytes: &[u8], output: Option<&Path>) -> eyre::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)?;
            info!(path = %path.display(), bytes = bytes.len(), "output written");
        }
        None => std::io::stdout().lock().write_all(bytes)?,
    }
    Ok(())
}

//! Per-evaluation archive: every export format in one tar.zst blob.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use carepath_core::models::evaluation::Evaluation;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::render;
use crate::styles::DocumentStyles;

pub mod entry {
    pub const PATIENT_SUMMARY: &str = "patient_summary.txt";
    pub const CLINICIAN_SUMMARY: &str = "clinician_summary.txt";
    pub const CLINICIAN_DOCX: &str = "clinician_summary.docx";
    pub const EVALUATION_JSON: &str = "evaluation.json";
    pub const NARRATIVE: &str = "narrative.txt";
}

/// `triage_<id>_<YYYYMMDDTHHMMSSZ>.tar.zst`
pub fn bundle_file_name(evaluation: &Evaluation) -> String {
    format!(
        "triage_{}_{}.tar.zst",
        evaluation.id,
        evaluation.evaluated_at.strftime("%Y%m%dT%H%M%SZ")
    )
}

/// Render every export of `evaluation` and pack them into a tar.zst archive.
///
/// The clinician summary is always included; the narrative is included only
/// when one was generated.
pub fn build_bundle(
    evaluation: &Evaluation,
    narrative: Option<&str>,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let clinician = render::clinician_summary(evaluation)?;
    let styles = styles.for_tier(evaluation.result.route.tier());

    let mut entries: Vec<(&str, Vec<u8>)> = vec![
        (
            entry::PATIENT_SUMMARY,
            render::patient_summary(evaluation, narrative)?.into_bytes(),
        ),
        (entry::CLINICIAN_DOCX, generate_docx(&clinician, &styles)?),
        (entry::CLINICIAN_SUMMARY, clinician.into_bytes()),
        (
            entry::EVALUATION_JSON,
            render::raw_dump(evaluation)?.into_bytes(),
        ),
    ];
    if let Some(text) = narrative {
        entries.push((entry::NARRATIVE, text.as_bytes().to_vec()));
    }

    let mtime = evaluation.evaluated_at.as_second().max(0) as u64;

    let mut buf = Vec::new();
    {
        let encoder = zstd::Encoder::new(&mut buf, 3)?;
        let mut tar_builder = tar::Builder::new(encoder);
        for (name, bytes) in &entries {
            append_entry(&mut tar_builder, name, bytes, mtime)?;
        }
        let encoder = tar_builder.into_inner()?;
        encoder.finish()?;
    }

    info!(
        evaluation_id = %evaluation.id,
        entries = entries.len(),
        size = buf.len(),
        "export bundle built"
    );
    Ok(buf)
}

/// Build the bundle and write it into `dir` under [`bundle_file_name`].
pub fn write_bundle(
    dir: &Path,
    evaluation: &Evaluation,
    narrative: Option<&str>,
    styles: &DocumentStyles,
) -> Result<PathBuf, ExportError> {
    let blob = build_bundle(evaluation, narrative, styles)?;

    let path = dir.join(bundle_file_name(evaluation));
    std::fs::create_dir_all(dir)
        .and_then(|()| std::fs::write(&path, blob))
        .map_err(|source| ExportError::WriteBundle {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), "export bundle written");
    Ok(path)
}

fn append_entry<W: Write>(
    builder: &mut tar::Builder<W>,
    name: &str,
    bytes: &[u8],
    mtime: u64,
) -> std::io::Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_size(bytes.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(mtime);
    builder.append_data(&mut header, name, bytes)
}

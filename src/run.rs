//! Sequential driver that turns every subject into a doodle file.

use crate::error::{DoodleError, Result};
use crate::image::{AspectRatio, GenerationRequest, ImageProvider, ImageSize};
use crate::subjects::Subject;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of subjects whose image was saved.
    pub succeeded: usize,
    /// Number of subjects attempted.
    pub total: usize,
    /// Files written, in subject order.
    pub saved: Vec<PathBuf>,
}

impl RunSummary {
    /// Number of subjects that produced no image.
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    /// The final tally line, e.g. `Generated 3/4 doodles.`
    pub fn tally(&self) -> String {
        format!("Generated {}/{} doodles.", self.succeeded, self.total)
    }
}

/// Builds the request sent for one subject.
pub fn request_for(subject: &Subject) -> GenerationRequest {
    GenerationRequest::new(subject.prompt())
        .with_aspect_ratio(AspectRatio::Square)
        .with_image_size(ImageSize::OneK)
}

/// Generates one doodle per subject, in order, writing progress to `out`.
///
/// A subject whose response carries no image is reported and skipped. Any
/// other error aborts the run.
pub async fn generate_doodles<P, W>(
    provider: &P,
    subjects: &[Subject],
    output_dir: &Path,
    out: &mut W,
) -> Result<RunSummary>
where
    P: ImageProvider + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Generating city doodle references...")?;
    writeln!(out, "Output directory: {}", output_dir.display())?;
    std::fs::create_dir_all(output_dir)?;

    let mut summary = RunSummary {
        total: subjects.len(),
        ..RunSummary::default()
    };

    for subject in subjects {
        if let Some(path) = generate_one(provider, subject, output_dir, out).await? {
            summary.succeeded += 1;
            summary.saved.push(path);
        }
    }

    writeln!(out, "\nDone! {}", summary.tally())?;
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed(),
        "doodle run finished"
    );
    Ok(summary)
}

async fn generate_one<P, W>(
    provider: &P,
    subject: &Subject,
    output_dir: &Path,
    out: &mut W,
) -> Result<Option<PathBuf>>
where
    P: ImageProvider + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "\nGenerating: {}...", subject.name)?;
    tracing::debug!(subject = subject.id, provider = provider.name(), "generating doodle");

    match provider.generate(&request_for(subject)).await {
        Ok(image) => {
            let path = subject.output_path(output_dir);
            image.save(&path)?;
            tracing::debug!(subject = subject.id, bytes = image.size(), "saved doodle");
            writeln!(out, "  Saved: {}", path.display())?;
            Ok(Some(path))
        }
        Err(DoodleError::NoImage { text }) => {
            writeln!(out, "  Failed - no image generated")?;
            if let Some(text) = text.filter(|t| !t.is_empty()) {
                writeln!(out, "  Response: {text}")?;
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

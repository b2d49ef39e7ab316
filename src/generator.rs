use crate::config::ReportConfig;
use crate::error::ReportError;
use schouw_render_core::ArtifactRenderer;
use schouw_render_lopdf::InspectionPdfRenderer;
use schouw_source::SubmissionSource;
use schouw_storage::{ArtifactStore, ArtifactWriter, FilesystemArtifactStore, GeneratedArtifacts};
use schouw_table::CsvTableRenderer;
use schouw_types::{FieldFormatter, SubmissionId, SubmissionRecord};
use std::sync::Arc;

/// Produces the PDF report and CSV export for one submission.
///
/// The generator owns no mutable state; concurrent calls only share the
/// output store, where every run gets its own UUID-based name.
#[derive(Clone)]
pub struct ReportGenerator {
    source: Arc<dyn SubmissionSource>,
    document: Arc<dyn ArtifactRenderer>,
    table: Arc<dyn ArtifactRenderer>,
    writer: ArtifactWriter,
}

impl ReportGenerator {
    /// Wires the standard renderers and a filesystem store from `config`.
    pub fn new(source: Arc<dyn SubmissionSource>, config: &ReportConfig) -> Self {
        let store = Arc::new(FilesystemArtifactStore::new(&config.storage.output_dir));
        Self::with_store(source, store, config)
    }

    pub fn with_store(
        source: Arc<dyn SubmissionSource>,
        store: Arc<dyn ArtifactStore>,
        config: &ReportConfig,
    ) -> Self {
        let formatter = FieldFormatter::new(config.report.date_format.clone());
        let document = InspectionPdfRenderer::new(config.page.clone(), formatter.clone())
            .with_title(config.report.title.clone());
        let table = CsvTableRenderer::new(formatter);
        let writer = ArtifactWriter::new(store).with_prefix(config.report.file_prefix.clone());

        Self::from_parts(source, Arc::new(document), Arc::new(table), writer)
    }

    pub fn from_parts(
        source: Arc<dyn SubmissionSource>,
        document: Arc<dyn ArtifactRenderer>,
        table: Arc<dyn ArtifactRenderer>,
        writer: ArtifactWriter,
    ) -> Self {
        Self {
            source,
            document,
            table,
            writer,
        }
    }

    /// Loads the submission, renders both artifacts and persists them under
    /// one shared base name.
    ///
    /// Nothing is written when the submission does not exist or a render
    /// fails. A document written before a failed table write is left behind.
    pub async fn generate_report(
        &self,
        id: &SubmissionId,
    ) -> Result<GeneratedArtifacts, ReportError> {
        log::info!("Generating report for submission {} ({})", id, self.source.name());

        let record = self
            .source
            .fetch(id)
            .await?
            .ok_or_else(|| ReportError::NotFound(id.clone()))?;

        let out_of_range = record.out_of_range_scores();
        if !out_of_range.is_empty() {
            log::warn!(
                "Submission {} has severity scores outside 1..=6: {:?}; rendering them as-is",
                id,
                out_of_range
            );
        }

        let record = Arc::new(record);
        let document_task = spawn_render(self.document.clone(), record.clone());
        let table_task = spawn_render(self.table.clone(), record);
        let (document, table) = tokio::try_join!(document_task, table_task)?;
        let (document, table) = (document?, table?);

        let artifacts = self
            .writer
            .write_pair(&document, &table)
            .await
            .inspect_err(|e| log::error!("Persisting report for submission {} failed: {}", id, e))?;

        log::info!(
            "Report for submission {} written: {}, {}",
            id,
            artifacts.document_file_name,
            artifacts.table_file_name
        );
        Ok(artifacts)
    }
}

fn spawn_render(
    renderer: Arc<dyn ArtifactRenderer>,
    record: Arc<SubmissionRecord>,
) -> tokio::task::JoinHandle<Result<Vec<u8>, schouw_render_core::RenderError>> {
    tokio::task::spawn_blocking(move || {
        let bytes = renderer.render(&record)?;
        log::debug!("Rendered {} for submission {} ({} bytes)", renderer.kind(), record.id, bytes.len());
        Ok(bytes)
    })
}

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use schouw::source::InMemorySubmissionSource;
use schouw::{GeneratedArtifacts, ReportConfig, ReportGenerator, SubmissionRecord};
use std::path::Path;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// All shown text lines, in drawing order across pages
    pub fn lines(&self) -> Vec<String> {
        pdf_assertions::page_text_lines(&self.doc).concat()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Both artifacts of one run, read back from the output directory
pub struct GeneratedReport {
    pub names: GeneratedArtifacts,
    pub pdf: GeneratedPdf,
    pub csv: String,
}

impl GeneratedReport {
    pub fn read(dir: &Path, names: GeneratedArtifacts) -> Result<Self, Box<dyn std::error::Error>> {
        let pdf = GeneratedPdf::from_bytes(std::fs::read(dir.join(&names.document_file_name))?)?;
        let csv = std::fs::read_to_string(dir.join(&names.table_file_name))?;
        Ok(Self { names, pdf, csv })
    }

    /// Parsed CSV as (header, single data row)
    pub fn table(&self) -> Result<(Vec<String>, Vec<String>), Box<dyn std::error::Error>> {
        let mut lines = self.csv.lines();
        let header = lines.next().ok_or("empty table")?;
        let row = lines.next().ok_or("table has no data row")?;
        if lines.next().is_some() {
            return Err("table has more than one data row".into());
        }
        Ok((split_simple(header), split_simple(row)))
    }
}

/// Splits a CSV line that contains no quoted fields.
fn split_simple(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// A generator over `records` that writes into `output_dir`
pub fn generator_for(records: Vec<SubmissionRecord>, output_dir: &Path) -> ReportGenerator {
    let mut config = ReportConfig::default();
    config.storage.output_dir = output_dir.to_path_buf();
    let source = Arc::new(InMemorySubmissionSource::from_records(records));
    ReportGenerator::new(source, &config)
}

use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Text of every `Tj` operator, grouped per page
pub fn page_text_lines(doc: &LopdfDocument) -> Vec<Vec<String>> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let Ok(bytes) = doc.get_page_content(page_id) else {
                return Vec::new();
            };
            let Ok(content) = Content::decode(&bytes) else {
                return Vec::new();
            };
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| op.operands.first())
                .filter_map(|operand| operand.as_str().ok())
                .map(|raw| raw.iter().map(|&b| b as char).collect())
                .collect()
        })
        .collect()
}

/// Number of image XObjects anywhere in the document
pub fn image_xobject_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|subtype| subtype.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false)
        })
        .count()
}

/// Assert that the PDF shows a line with exactly this text
#[macro_export]
macro_rules! assert_pdf_contains_line {
    ($pdf:expr, $text:expr) => {
        let lines = $pdf.lines();
        assert!(
            lines.iter().any(|line| line == $text),
            "PDF should contain the line '{}', but its lines were:\n{:#?}",
            $text,
            lines
        );
    };
}

/// Assert that no line of the PDF contains this text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let lines = $pdf.lines();
        assert!(
            !lines.iter().any(|line| line.contains($text)),
            "PDF should NOT contain '{}', but its lines were:\n{:#?}",
            $text,
            lines
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

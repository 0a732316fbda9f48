use crate::constants::{REPORT_TITLE, RESULT_HTML_FILE_NAME, RESULT_TEXT_FILE_NAME};
use crate::models::RankedEntry;
use crate::Error;
use csv::WriterBuilder;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of the artifacts written by `ReportWriter::write`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub html_path: PathBuf,
    pub text_path: PathBuf,
}

/// Outcome of a full fetch, rank and write run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReport {
    pub ranked_entries: Vec<RankedEntry>,
    pub report_paths: ReportPaths,
}

/// Renders ranked words as an HTML page and a plain-text (CSV) dump.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        ReportWriter {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders a standalone HTML document with one list per rank group.
    pub fn render_html(&self, ranked_entries: &[RankedEntry]) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", REPORT_TITLE));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("    <h1>{}</h1>\n", REPORT_TITLE));

        for group in ranked_entries.chunk_by(|a, b| a.rank == b.rank) {
            let list_items: String = group
                .iter()
                .map(|entry| format!("<li>{}: {}</li>", escape_html(&entry.word), entry.frequency))
                .collect();

            html.push_str(&format!("    <ul>{}</ul>\n", list_items));
        }

        html.push_str("</body>\n</html>\n");

        html
    }

    /// Renders `rank,word,count` records, one per entry, preceded by a header.
    pub fn render_text(&self, ranked_entries: &[RankedEntry]) -> Result<String, Error> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer.write_record(["rank", "word", "count"])?;
        for entry in ranked_entries {
            writer.write_record([
                entry.rank.to_string(),
                entry.word.clone(),
                entry.frequency.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::ReportError(format!("Failed to flush CSV writer: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::ReportError(format!("CSV output is not UTF-8: {}", e)))
    }

    /// Writes both artifacts into the output directory, replacing earlier runs.
    pub fn write(&self, ranked_entries: &[RankedEntry]) -> Result<ReportPaths, Error> {
        fs::create_dir_all(&self.output_dir)?;

        let html_path = self.output_dir.join(RESULT_HTML_FILE_NAME);
        let text_path = self.output_dir.join(RESULT_TEXT_FILE_NAME);

        fs::write(&html_path, self.render_html(ranked_entries))?;
        fs::write(&text_path, self.render_text(ranked_entries)?)?;

        info!(
            "Wrote {} ranked words to {:?} and {:?}",
            ranked_entries.len(),
            html_path,
            text_path
        );

        Ok(ReportPaths {
            html_path,
            text_path,
        })
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

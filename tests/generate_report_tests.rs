use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;
use top_words::{
    generate_report_from_url, Error, PageFetcher, RawMarkup, ReportWriter, TopWordsConfig,
    DEFAULT_TOP_WORDS_CONFIG, RESULT_HTML_FILE_NAME,
};

/// Records every fetch and every opened target into one shared event log.
struct RecordingFetcher {
    page: Option<RawMarkup>,
    events: Rc<RefCell<Vec<String>>>,
}

impl PageFetcher for RecordingFetcher {
    fn fetch(&self, url: &str) -> Result<Option<RawMarkup>, Error> {
        self.events.borrow_mut().push(format!("fetch {}", url));
        Ok(self.page.clone())
    }
}

fn recording_fetcher(page: Option<&str>) -> (RecordingFetcher, Rc<RefCell<Vec<String>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let fetcher = RecordingFetcher {
        page: page.map(|page| page.to_string()),
        events: Rc::clone(&events),
    };
    (fetcher, events)
}

#[cfg(test)]
mod generate_report_tests {
    use super::*;

    #[test]
    fn test_opens_page_then_fetches_then_opens_report() {
        let dir = tempdir().expect("Failed to create temp dir");
        let writer = ReportWriter::new(dir.path());
        let (fetcher, events) = recording_fetcher(Some("<p>rust rust go</p>"));

        let mut opener = |target: &str| -> Result<(), Error> {
            events.borrow_mut().push(format!("open {}", target));
            Ok(())
        };

        let report = generate_report_from_url(
            DEFAULT_TOP_WORDS_CONFIG,
            &fetcher,
            "http://example.com",
            &writer,
            Some(&mut opener),
        )
        .expect("Report generation failed");

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], "open http://example.com");
        assert_eq!(events[1], "fetch http://example.com");
        assert!(events[2].starts_with("open file://"));
        assert!(events[2].ends_with(RESULT_HTML_FILE_NAME));

        assert!(report.report_paths.html_path.is_file());
        assert!(report.report_paths.text_path.is_file());
        assert_eq!(
            report
                .ranked_entries
                .iter()
                .map(|e| e.as_pair())
                .collect::<Vec<_>>(),
            vec![("rust", 2), ("go", 1)]
        );
    }

    #[test]
    fn test_fetch_failure_stops_before_writing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let writer = ReportWriter::new(dir.path().join("out"));
        let (fetcher, events) = recording_fetcher(None);

        let mut opener = |target: &str| -> Result<(), Error> {
            events.borrow_mut().push(format!("open {}", target));
            Ok(())
        };

        let result = generate_report_from_url(
            DEFAULT_TOP_WORDS_CONFIG,
            &fetcher,
            "http://example.com",
            &writer,
            Some(&mut opener),
        );

        assert!(matches!(result, Err(Error::FetchError(_))));
        assert_eq!(
            *events.borrow(),
            vec!["open http://example.com", "fetch http://example.com"]
        );
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_without_opener_nothing_is_opened() {
        let dir = tempdir().expect("Failed to create temp dir");
        let writer = ReportWriter::new(dir.path());
        let (fetcher, events) = recording_fetcher(Some("<p>one two two</p>"));

        let report = generate_report_from_url(
            &TopWordsConfig { max_rank: 1 },
            &fetcher,
            "http://example.com",
            &writer,
            None,
        )
        .expect("Report generation failed");

        assert_eq!(*events.borrow(), vec!["fetch http://example.com"]);
        assert_eq!(report.ranked_entries.len(), 1);
        assert_eq!(report.ranked_entries[0].word, "two");
    }

    #[test]
    fn test_opener_failure_does_not_abort() {
        let dir = tempdir().expect("Failed to create temp dir");
        let writer = ReportWriter::new(dir.path());
        let (fetcher, _events) = recording_fetcher(Some("<p>word</p>"));

        let mut attempts = 0;
        let mut opener = |_target: &str| -> Result<(), Error> {
            attempts += 1;
            Err(Error::ViewerError("no browser".to_string()))
        };

        let report = generate_report_from_url(
            DEFAULT_TOP_WORDS_CONFIG,
            &fetcher,
            "http://example.com",
            &writer,
            Some(&mut opener),
        )
        .expect("Report generation failed");

        assert_eq!(attempts, 2);
        assert!(report.report_paths.html_path.is_file());
    }
}

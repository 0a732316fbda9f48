use crate::models::{PageFetcher, ReportWriter, TopWordsConfig, UrlReport};
use crate::utils::file_url;
use crate::{get_most_frequent_words_from_url_with_custom_config, Error};
use log::warn;

/// Callback that shows a URL to the user, e.g. `open_in_browser`.
pub type Opener<'a> = &'a mut dyn FnMut(&str) -> Result<(), Error>;

/// Runs the whole report flow for `url`.
///
/// In order: the page itself is opened, fetched and ranked, both report files
/// are written, then the HTML report is opened through its `file://` URL. With
/// `opener` set to `None` nothing is opened. Opener failures are logged and do
/// not abort the run; fetch and write failures are returned before any later
/// step happens.
pub fn generate_report_from_url<F: PageFetcher + ?Sized>(
    config: &TopWordsConfig,
    fetcher: &F,
    url: &str,
    report_writer: &ReportWriter,
    mut opener: Option<Opener<'_>>,
) -> Result<UrlReport, Error> {
    if let Some(open) = opener.as_deref_mut() {
        if let Err(e) = open(url) {
            warn!("{}", e);
        }
    }

    let ranked_entries = get_most_frequent_words_from_url_with_custom_config(config, fetcher, url)?;

    let report_paths = report_writer.write(&ranked_entries)?;

    if let Some(open) = opener.as_deref_mut() {
        match file_url(&report_paths.html_path) {
            Ok(report_url) => {
                if let Err(e) = open(&report_url) {
                    warn!("{}", e);
                }
            }
            Err(e) => warn!("Could not resolve report path: {}", e),
        }
    }

    Ok(UrlReport {
        ranked_entries,
        report_paths,
    })
}

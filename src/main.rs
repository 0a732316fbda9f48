use clap::Parser;
use log::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use top_words::{
    generate_report_from_url, open_in_browser, HttpPageFetcher, Opener, ReportWriter,
    TopWordsConfig, DEFAULT_MAX_RANK,
};

/// Rank the most frequent words of a web page and write an HTML/text report.
#[derive(Parser, Debug)]
#[command(name = "top-words-cli", version, about)]
struct Cli {
    /// Page to analyze. Prompted for when omitted.
    url: Option<String>,

    /// Directory receiving result.html and result.txt.
    #[arg(long, env = "TOP_WORDS_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Highest competition rank to keep.
    #[arg(long, default_value_t = DEFAULT_MAX_RANK)]
    max_rank: usize,

    /// Request timeout in seconds. No timeout when omitted.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Do not open the page or the report in a browser.
    #[arg(long)]
    no_open: bool,
}

fn prompt_for_url() -> io::Result<String> {
    print!("Please enter a URL: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let url = match cli.url {
        Some(url) => url,
        None => match prompt_for_url() {
            Ok(url) => url,
            Err(e) => {
                error!("Failed to read URL from stdin: {}", e);
                std::process::exit(1);
            }
        },
    };

    let fetcher = match cli.timeout_secs {
        Some(secs) => HttpPageFetcher::with_timeout(Duration::from_secs(secs)),
        None => HttpPageFetcher::new(),
    };
    let fetcher = match fetcher {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let config = TopWordsConfig {
        max_rank: cli.max_rank,
    };
    let report_writer = ReportWriter::new(&cli.output_dir);

    let mut opener = open_in_browser;
    let opener: Option<Opener<'_>> = if cli.no_open {
        None
    } else {
        Some(&mut opener)
    };

    match generate_report_from_url(&config, &fetcher, &url, &report_writer, opener) {
        Ok(report) => {
            for entry in &report.ranked_entries {
                println!("{}. {}: {}", entry.rank, entry.word, entry.frequency);
            }
        }
        Err(e) => {
            error!("Error generating report: {}", e);
            std::process::exit(1);
        }
    }
}

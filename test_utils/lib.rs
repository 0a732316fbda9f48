pub mod constants;

use constants::{EXPECTED_PREFIX, TEST_FILES_DIRECTORY};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the HTML fixtures in the test files directory, sorted by name.
pub fn list_test_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to collect directory entries")
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "html"))
        .collect();

    files.sort();
    files
}

pub fn read_test_file(file_path: &Path) -> String {
    fs::read_to_string(file_path).expect("Failed to read test file")
}

// Helper function to get the expected ranking from a fixture.
//
// Each `EXPECTED: word:count` line contributes one entry, in file order. The lines
// sit inside an HTML comment so the normalizer strips them from the page text.
pub fn get_expected_ranking(file_path: &Path) -> Vec<(String, usize)> {
    let content = read_test_file(file_path);

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let expected = line.strip_prefix(EXPECTED_PREFIX)?.trim();
            let (word, count) = expected.rsplit_once(':')?;
            let count = count
                .trim()
                .parse::<usize>()
                .expect("EXPECTED count must be an integer");

            Some((word.trim().to_string(), count))
        })
        .collect()
}

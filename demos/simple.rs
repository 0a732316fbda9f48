use top_words::top_words;

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let html = "<html><body><h1>Rust</h1> <p>Rust is fast. Rust is safe.</p></body></html>";

    let results = top_words(html);

    println!("Top words for the given page \"{}\"", html);
    for entry in results {
        println!("{}. {}: {}", entry.rank, entry.word, entry.frequency);
    }
}

//! Resolves `patterntype:` directives in a query and prints the result as JSON.
//!
//! Usage: `cargo run --bin resolve_pattern_type -- [--regexp|--literal] <query...>`

use pattern_type::{PatternType, PatternTypeSettingsStore, ResolvedQuery};

const USAGE: &str = "usage: resolve_pattern_type [--regexp|--literal] <query...>";

fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let mut default = None;
    let mut words = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--regexp" | "--regex" if words.is_empty() => default = Some(PatternType::Regexp),
            "--literal" if words.is_empty() => default = Some(PatternType::Literal),
            _ => words.push(arg),
        }
    }
    if words.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let default = default.unwrap_or_else(|| {
        let store = PatternTypeSettingsStore::default_location();
        match store.load() {
            Ok(settings) => settings.effective_default(),
            Err(e) => {
                log::warn!("failed to load {}: {e}", store.path().display());
                PatternType::default()
            }
        }
    });

    let resolved = ResolvedQuery::resolve(&words.join(" "), default);
    match serde_json::to_string(&resolved) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}

use ipa_core::AnalysisEngine;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

// Line protocol for embedding: "LOAD <file>", "ANALYZE <text>" (one JSON
// object per line in response), "EXIT".

fn get_cache_path() -> PathBuf {
    let mut path = dirs::config_dir().expect("Could not find config directory");
    path.push("english-ipa-transcriber");
    path.push("dictionary.bin");
    path
}

fn get_log_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("ipa_engine.log");
    path
}

fn log(message: &str) {
    if let Ok(mut file) = File::options().create(true).append(true).open(get_log_path()) {
        let _ = writeln!(file, "{}", message);
    }
}

fn main() -> io::Result<()> {
    // Clear old log file
    let _ = std::fs::remove_file(get_log_path());
    log("--- IPA Transcriber Engine Starting ---");

    let cache_path = get_cache_path();
    if let Some(parent) = cache_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log(&format!("Error creating config dir: {}", e));
        }
    }

    let mut engine = AnalysisEngine::from_file_or_new(cache_path.to_str().unwrap_or(""));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        log(&format!("Engine <- '{:?}'", input));
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (input.as_str(), ""),
        };

        match command {
            "ANALYZE" => {
                let analysis = engine.analyze(rest);
                let json = serde_json::to_string(&analysis).unwrap_or_else(|_| "{}".to_string());
                log(&format!("Engine -> {} entries", analysis.len()));
                writeln!(stdout, "{}", json)?;
                stdout.flush()?;
            }
            "LOAD" => {
                match engine.load_dictionary_file(Path::new(rest.trim())) {
                    Ok(added) => {
                        log(&format!("Engine: loaded {} entries", added));
                        writeln!(stdout, "LOADED {}", added)?;
                    }
                    Err(e) => {
                        log(&format!("Engine: load failed: {}", e));
                        writeln!(stdout, "ERROR {}", e)?;
                    }
                }
                stdout.flush()?;
            }
            "EXIT" => {
                log("Engine: Received EXIT, saving dictionary cache.");
                if let Err(e) = engine.save_dictionary() {
                    log(&format!("Error saving cache: {}", e));
                }
                break;
            }
            _ => {
                log("Engine: Received unknown command.");
            }
        }
    }
    log("Engine: Shutting down.");
    Ok(())
}

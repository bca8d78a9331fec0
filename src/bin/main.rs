use crossterm::style::Stylize;
use ipa_core::core::types::WordEntry;
use ipa_core::AnalysisEngine;
use std::io::{stdin, stdout, Write};
use std::path::Path;

const CACHE_PATH: &str = "dictionary_cache.bin";

fn main() {
    let mut engine = AnalysisEngine::from_file_or_new(CACHE_PATH);

    println!("English IPA Transcriber. Type 'exit' to save and quit.");
    println!("---------------------------------------------------------------");
    println!("Enter text to analyze, or ':load <file>' to merge a dictionary.");
    if engine.dictionary.is_empty() {
        println!("{}", "Dictionary is empty; every word will report 'No entry found'.".yellow());
    } else {
        println!("Dictionary entries: {}", engine.dictionary.len());
    }

    loop {
        print!("\n> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break; // EOF
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            s if s.starts_with(":load") => {
                let path = s[":load".len()..].trim();
                if path.is_empty() {
                    println!("Usage: :load <file>");
                    continue;
                }
                match engine.load_dictionary_file(Path::new(path)) {
                    Ok(added) => println!("Loaded {} entries from '{}'", added, path),
                    Err(e) => eprintln!("{} Could not read '{}': {}", "[ERROR]".red(), path, e),
                }
            }
            s => print_analysis(&engine, s),
        }
    }

    println!("\nSaving dictionary cache...");
    if let Err(e) = engine.save_dictionary() {
        eprintln!("{} Could not save dictionary: {}", "[ERROR]".red(), e);
    } else {
        println!("Dictionary saved to '{}'", CACHE_PATH);
    }
}

fn print_analysis(engine: &AnalysisEngine, text: &str) {
    let analysis = engine.analyze(text);
    for (word, entry) in analysis.iter() {
        match entry {
            WordEntry::Found(t) => {
                println!(
                    "  {}  {}  /{}/",
                    word.bold(),
                    t.arpabet.as_str().dark_grey(),
                    t.ipa.as_str().green()
                );
                println!("      no-space: {}  /{}/", t.arpabet_no_space, t.ipa_no_space);
            }
            WordEntry::NotFound => {
                println!("  {}  {}", word.bold(), "No entry found".red());
            }
        }
    }
}

// kelime-analyze: morphological analysis of words from arguments or stdin.
//
// Reads words from the command line or stdin (one per line) and prints all
// readings of each word. Unknown words print UNK; words with characters
// outside the alphabet print ERR.
//
// Usage:
//   kelime-analyze [-d DICT] [--json] [WORD...]
//
// Options:
//   -d, --dict PATH   Dictionary file (or directory containing kelime.dict)
//   --json            Print one JSON object per word instead of text
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use serde::Serialize;

use kelime_tr::{TurkishMorphology, WordAnalysis};

#[derive(Serialize)]
struct ReadingDto {
    lemma: String,
    pos: String,
    stem: String,
    ending: String,
    analysis: String,
}

#[derive(Serialize)]
struct WordDto<'a> {
    input: &'a str,
    normalized: &'a str,
    known: bool,
    readings: Vec<ReadingDto>,
}

fn word_dto(result: &WordAnalysis) -> WordDto<'_> {
    WordDto {
        input: result.input(),
        normalized: result.normalized(),
        known: result.is_known(),
        readings: result
            .iter()
            .map(|a| ReadingDto {
                lemma: a.dictionary_item().lemma.clone(),
                pos: a.pos().to_string(),
                stem: a.stem().to_string(),
                ending: a.ending(),
                analysis: a.to_string(),
            })
            .collect(),
    }
}

fn print_word(
    morphology: &TurkishMorphology,
    word: &str,
    json: bool,
    out: &mut impl Write,
) {
    match morphology.analyze(word) {
        Ok(result) if json => {
            if let Ok(line) = serde_json::to_string(&word_dto(&result)) {
                let _ = writeln!(out, "{line}");
            }
        }
        Ok(result) => {
            if result.is_known() {
                let _ = writeln!(out, "{word}:");
                for analysis in &result {
                    let _ = writeln!(out, "  {analysis}");
                }
            } else {
                let _ = writeln!(out, "{word}: UNK");
            }
        }
        Err(e) => {
            let _ = writeln!(out, "{word}: ERR {e}");
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = kelime_cli::parse_dict_path(&args);

    if kelime_cli::wants_help(&args) {
        println!("kelime-analyze: Morphological analysis of Turkish words.");
        println!();
        println!("Usage: kelime-analyze [-d DICT] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH   Dictionary file or directory containing kelime.dict");
        println!("  --json            Print one JSON object per word");
        println!("  -h, --help        Print this help");
        return;
    }

    let json = args.iter().any(|a| a == "--json");
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let morphology =
        kelime_cli::load_morphology(dict_path.as_deref()).unwrap_or_else(|e| kelime_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            print_word(&morphology, word, json, &mut out);
        }
    } else {
        for word in &words {
            print_word(&morphology, word, json, &mut out);
        }
    }
}

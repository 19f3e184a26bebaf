// kelime-trace: step-by-step search report for one word.
//
// Prints every decision the analyzer makes while searching a word: stem
// candidates, spawned paths, rejected transitions, dead ends and accepted
// readings. Useful when a dictionary entry does not analyze the way it
// should.
//
// Usage:
//   kelime-trace [-d DICT] WORD...
//
// Options:
//   -d, --dict PATH   Dictionary file (or directory containing kelime.dict)
//   -h, --help        Print help

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = kelime_cli::parse_dict_path(&args);

    if kelime_cli::wants_help(&args) || args.is_empty() {
        println!("kelime-trace: Search report for Turkish word analysis.");
        println!();
        println!("Usage: kelime-trace [-d DICT] WORD...");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH   Dictionary file or directory containing kelime.dict");
        println!("  -h, --help        Print this help");
        return;
    }

    let morphology =
        kelime_cli::load_morphology(dict_path.as_deref()).unwrap_or_else(|e| kelime_cli::fatal(&e));

    for word in args.iter().filter(|a| !a.starts_with('-')) {
        match morphology.analyze_with_trace(word) {
            Ok((result, report)) => {
                print!("{report}");
                if result.is_known() {
                    for analysis in &result {
                        println!("{analysis}");
                    }
                } else {
                    println!("{word}: UNK");
                }
            }
            Err(e) => println!("{word}: ERR {e}"),
        }
        println!();
    }
}

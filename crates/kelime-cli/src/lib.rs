// kelime-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use kelime_tr::TurkishMorphology;

/// Dictionary file name looked for in the search directories.
const DICT_FILE: &str = "kelime.dict";

/// Search for a dictionary file and build a morphology.
///
/// Search order:
/// 1. `dict_path` argument (if provided; may be a file or a directory)
/// 2. `KELIME_DICTIONARY` environment variable
/// 3. `~/.kelime/kelime.dict`
/// 4. `kelime.dict` in the current working directory
pub fn load_morphology(dict_path: Option<&str>) -> Result<TurkishMorphology, String> {
    let candidates = build_search_paths(dict_path);

    for path in &candidates {
        if path.is_file() {
            return TurkishMorphology::from_path(path)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of dictionary file candidates.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        let path = PathBuf::from(p);
        if path.is_dir() {
            paths.push(path.join(DICT_FILE));
        } else {
            paths.push(path);
        }
    }

    // 2. KELIME_DICTIONARY environment variable
    if let Ok(env_path) = std::env::var("KELIME_DICTIONARY") {
        let path = PathBuf::from(&env_path);
        if path.is_dir() {
            paths.push(path.join(DICT_FILE));
        } else {
            paths.push(path);
        }
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".kelime").join(DICT_FILE));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

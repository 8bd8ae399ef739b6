//! Produce results files for the histogram viewer by playing a worst-case
//! minimising Wordle strategy against every known secret.
//!
//! Each played secret becomes one `<secret> <guesses>` line, the format
//! `guess-histogram` loads.

use std::collections::HashMap;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

const WORD_LENGTH: usize = 5;

// ---------------------------------------------------------------------------
// Words and feedback patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Word([u8; WORD_LENGTH]);

impl Word {
    fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_lowercase) {
            bail!("{s:?} is not a {WORD_LENGTH}-letter lowercase word");
        }
        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(bytes);
        Ok(Word(letters))
    }

    fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |(_, &l)| l == letter)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Letters are validated ASCII.
        f.write_str(std::str::from_utf8(&self.0).unwrap_or("?????"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tile {
    Gray,
    Yellow,
    Green,
}

type Pattern = [Tile; WORD_LENGTH];

const SOLVED: Pattern = [Tile::Green; WORD_LENGTH];

/// Feedback for guessing `query` when the answer is `secret`.
///
/// Repeated letters are marked yellow at most as many times as the secret
/// has them unmatched, earliest positions first.
fn score(query: &Word, secret: &Word) -> Pattern {
    let mut tiles = [Tile::Gray; WORD_LENGTH];

    for (i, &letter) in query.0.iter().enumerate() {
        if query.0[..i].contains(&letter) {
            continue;
        }

        let in_query: Vec<usize> = query.positions_of(letter).collect();
        let in_secret: Vec<usize> = secret.positions_of(letter).collect();
        if in_secret.is_empty() {
            continue;
        }

        let mut greens = 0;
        for &p in &in_query {
            if in_secret.contains(&p) {
                tiles[p] = Tile::Green;
                greens += 1;
            }
        }

        let yellows = in_query.len().min(in_secret.len()) - greens;
        in_query
            .iter()
            .filter(|p| !in_secret.contains(p))
            .take(yellows)
            .for_each(|&p| tiles[p] = Tile::Yellow);
    }

    tiles
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Group `candidates` by the feedback `query` would receive.
fn partition(query: &Word, candidates: &[Word]) -> HashMap<Pattern, Vec<Word>> {
    let mut groups: HashMap<Pattern, Vec<Word>> = HashMap::new();
    for secret in candidates {
        groups.entry(score(query, secret)).or_default().push(*secret);
    }
    groups
}

/// Size of the largest group `query` could leave behind.
fn worst_case_cost(query: &Word, candidates: &[Word]) -> usize {
    partition(query, candidates)
        .values()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}

/// Query with the smallest worst-case group; ties go to the earliest word.
fn best_query(queries: &[Word], candidates: &[Word]) -> Option<Word> {
    let mut best: Option<(usize, Word)> = None;
    for query in queries {
        let cost = worst_case_cost(query, candidates);
        if best.map_or(true, |(c, _)| cost < c) {
            best = Some((cost, *query));
        }
    }
    best.map(|(_, w)| w)
}

/// Play one game against a known `secret` and return the guesses made,
/// including the final correct one.
fn play(first: Word, queries: &[Word], solutions: &[Word], secret: &Word) -> Result<Vec<Word>> {
    let mut candidates = solutions.to_vec();
    let mut guess = first;
    let mut history = vec![guess];

    loop {
        let pattern = score(&guess, secret);
        if pattern == SOLVED {
            return Ok(history);
        }

        let remaining = partition(&guess, &candidates)
            .remove(&pattern)
            .with_context(|| format!("{secret} is not in the solution bank"))?;
        if remaining.len() == candidates.len() && history.len() > 1 {
            bail!("no query separates the {} candidates left for {secret}", remaining.len());
        }
        candidates = remaining;

        guess = match candidates.as_slice() {
            [only] => *only,
            _ => best_query(queries, &candidates)
                .with_context(|| format!("query bank is empty while solving {secret}"))?,
        };
        log::trace!("{secret}: next guess {guess} ({} candidates)", candidates.len());
        history.push(guess);
    }
}

// ---------------------------------------------------------------------------
// Word banks and results files
// ---------------------------------------------------------------------------

/// One word per line; blank lines skipped.
fn read_word_bank(path: &Path) -> Result<Vec<Word>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut words = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let word = Word::parse(line).with_context(|| format!("{}:{}", path.display(), i + 1))?;
        words.push(word);
    }
    if words.is_empty() {
        bail!("{}: word bank is empty", path.display());
    }
    Ok(words)
}

fn write_results<W: Write>(out: &mut W, results: &[(Word, usize)]) -> Result<()> {
    for (secret, guesses) in results {
        writeln!(out, "{secret} {guesses}").context("writing result row")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Simulate the solver against known secrets and write a results file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word bank the solver may guess from
    #[arg(long, default_value = "queries.txt", value_name = "FILE")]
    queries: PathBuf,

    /// Word bank of possible secrets
    #[arg(long, default_value = "solutions.txt", value_name = "FILE")]
    solutions: PathBuf,

    /// First guess; computed from the word banks when omitted
    #[arg(short, long, value_name = "WORD")]
    guess: Option<String>,

    /// Play a single secret and print every guess instead of writing a file
    #[arg(short, long, value_name = "WORD")]
    secret: Option<String>,

    /// Results file to write
    #[arg(short, long, default_value = "results.txt", value_name = "FILE")]
    output: PathBuf,

    /// Append to the results file instead of replacing it
    #[arg(long)]
    append: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let queries = read_word_bank(&args.queries)?;
    let mut solutions = read_word_bank(&args.solutions)?;
    solutions.sort();

    let first = match &args.guess {
        Some(g) => Word::parse(g).context("--guess")?,
        None => {
            log::info!("Computing best starting word from {}", args.queries.display());
            best_query(&queries, &solutions).context("query bank is empty")?
        }
    };
    log::info!("First guess: {first}");

    if let Some(secret) = &args.secret {
        let secret = Word::parse(secret).context("--secret")?;
        let history = play(first, &queries, &solutions, &secret)?;
        for guess in &history {
            println!("Best guess: {guess}");
        }
        let n = history.len();
        println!("FOUND: {secret} in {n} guess{}", if n == 1 { "" } else { "es" });
        return Ok(());
    }

    let mut results = Vec::with_capacity(solutions.len());
    for secret in &solutions {
        let history = play(first, &queries, &solutions, secret)?;
        log::debug!("{secret}: {} guesses", history.len());
        results.push((*secret, history.len()));
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(args.append)
        .truncate(!args.append)
        .open(&args.output)
        .with_context(|| format!("opening {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    write_results(&mut out, &results)?;
    out.flush().context("flushing results file")?;

    log::info!("Wrote {} results to {}", results.len(), args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Tile::*;

    fn w(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn score_marks_repeated_letters_earliest_first() {
        assert_eq!(score(&w("oooll"), &w("llool")), [Yellow, Gray, Green, Yellow, Green]);
        assert_eq!(score(&w("alaap"), &w("pause")), [Yellow, Gray, Gray, Gray, Yellow]);
        assert_eq!(score(&w("bench"), &w("bench")), SOLVED);
    }

    #[test]
    fn word_validation() {
        assert!(Word::parse("aloes").is_ok());
        assert!(Word::parse("alo").is_err());
        assert!(Word::parse("ALOES").is_err());
        assert_eq!(w("ghost").to_string(), "ghost");
    }

    #[test]
    fn best_query_minimises_worst_case() {
        let candidates = [w("aloes"), w("frame"), w("ghost")];
        // "zzzzz" leaves every candidate together; "aloes" separates all three.
        let queries = [w("zzzzz"), w("aloes")];
        assert_eq!(worst_case_cost(&w("zzzzz"), &candidates), 3);
        assert_eq!(worst_case_cost(&w("aloes"), &candidates), 1);
        assert_eq!(best_query(&queries, &candidates), Some(w("aloes")));
        assert_eq!(best_query(&[], &candidates), None);
    }

    #[test]
    fn play_counts_every_guess() {
        let bank = [w("aloes"), w("frame"), w("ghost")];
        let solved = play(w("aloes"), &bank, &bank, &w("aloes")).unwrap();
        assert_eq!(solved, vec![w("aloes")]);

        let history = play(w("aloes"), &bank, &bank, &w("frame")).unwrap();
        assert_eq!(history, vec![w("aloes"), w("frame")]);
    }

    #[test]
    fn unknown_secret_is_an_error() {
        let bank = [w("aloes"), w("frame")];
        assert!(play(w("aloes"), &bank, &bank, &w("zzzzz")).is_err());
    }

    #[test]
    fn inseparable_candidates_are_an_error() {
        let solutions = [w("aloes"), w("aloft")];
        // The only query shares no letters with either candidate.
        let queries = [w("zzzzz")];
        let err = play(w("zzzzz"), &queries, &solutions, &w("aloft")).unwrap_err();
        assert!(err.to_string().contains("no query separates"));
    }

    #[test]
    fn results_use_viewer_format() {
        let mut out = Vec::new();
        write_results(&mut out, &[(w("aloes"), 1), (w("frame"), 2)]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "aloes 1\nframe 2\n");
    }

    #[test]
    fn word_bank_rejects_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.txt");
        std::fs::write(&path, "aloes\n\nframe\n").unwrap();
        assert_eq!(read_word_bank(&path).unwrap(), vec![w("aloes"), w("frame")]);

        std::fs::write(&path, "aloes\nfr\n").unwrap();
        let err = read_word_bank(&path).unwrap_err();
        assert!(format!("{err:#}").contains(":2"));
    }
}

//! Interactive candidate selection on the terminal.

use std::io::{self, BufRead, Write};

use itchmeta_lib::{CandidateChooser, Choice, SearchCandidate};

/// Asks on stderr and reads answers from stdin.
pub struct StdinChooser;

impl CandidateChooser for StdinChooser {
    fn choose(&self, candidates: &[SearchCandidate], query: &str) -> Choice {
        tokio::task::block_in_place(|| {
            eprintln!();
            if candidates.is_empty() {
                eprintln!("No itch.io results for {:?}.", query);
            } else {
                eprintln!("itch.io results for {:?}:", query);
                for (i, c) in candidates.iter().enumerate() {
                    match &c.description {
                        Some(d) => eprintln!("  {:>2}. {} ({})", i + 1, c.title, d),
                        None => eprintln!("  {:>2}. {}", i + 1, c.title),
                    }
                }
            }
            loop {
                let Some(line) = ask(&format!(
                    "Pick 1-{}, /text to search again, Enter to cancel: ",
                    candidates.len()
                )) else {
                    return Choice::Cancel;
                };
                match parse_choice(&line, candidates.len()) {
                    Some(choice) => return choice,
                    None => eprintln!("Not a valid choice: {:?}", line.trim()),
                }
            }
        })
    }

    fn choose_image(&self, images: &[String]) -> Option<usize> {
        tokio::task::block_in_place(|| {
            eprintln!();
            eprintln!("Background image candidates:");
            for (i, url) in images.iter().enumerate() {
                eprintln!("  {:>2}. {}", i + 1, url);
            }
            loop {
                let line = ask(&format!("Pick 1-{}, Enter to skip: ", images.len()))?;
                match parse_choice(&line, images.len()) {
                    Some(Choice::Pick(i)) => return Some(i),
                    Some(Choice::Cancel) => return None,
                    _ => eprintln!("Not a valid choice: {:?}", line.trim()),
                }
            }
        })
    }
}

/// Prints a prompt and reads one line. `None` on end of input or a read error.
fn ask(prompt: &str) -> Option<String> {
    eprint!("{}", prompt);
    io::stderr().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Interprets one answer against a list of `count` entries.
///
/// A 1-based number picks, `/text` searches for `text`, blank or `q`
/// cancels. Anything else (including out-of-range numbers) is `None`.
pub fn parse_choice(input: &str, count: usize) -> Option<Choice> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("q") {
        return Some(Choice::Cancel);
    }
    if let Some(text) = input.strip_prefix('/') {
        let text = text.trim();
        return (!text.is_empty()).then(|| Choice::Search(text.to_string()));
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(Choice::Pick(n - 1)),
        _ => None,
    }
}

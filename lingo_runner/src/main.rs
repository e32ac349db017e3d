//! Play Lingo in the terminal.

use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use lingo_rs::{
    store::JsonStore, trainer::print_overview, GameId, GameStore, LingoError, MemoryStore,
    Progress, Rejection, Trainer, WordList,
};
use log::{error, info};

const BUILTIN_WORDS: &str = include_str!("../words.txt");

#[derive(Parser)]
#[command(name = "lingo_runner", about = "Play Lingo in the terminal", version)]
struct Cli {
    /// Word list with one word per line (a built-in list is used otherwise)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Keep games in this JSON file instead of in memory
    #[arg(short, long)]
    save: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let words = match &cli.words {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open word list {}", path.display()))?;
            WordList::from_reader(BufReader::new(file))?
        }
        None => WordList::from_reader(BUILTIN_WORDS.as_bytes())?,
    };
    info!("loaded {} words", words.len());

    match &cli.save {
        Some(path) => play(Trainer::new(words, JsonStore::open(path)?)),
        None => play(Trainer::new(words, MemoryStore::new())),
    }
}

fn play<S: GameStore>(mut trainer: Trainer<WordList, S>) -> Result<()> {
    println!("Type `help` for a list of commands.");

    let mut current: Option<GameId> = None;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parts = line.split_whitespace();
        let result = match (parts.next(), parts.next()) {
            (None, _) => continue,
            (Some("quit" | "exit"), _) => return Ok(()),
            (Some("help"), _) => {
                print_help();
                continue;
            }
            (Some("new"), _) => trainer.new_game().map(Some),
            (Some("list"), _) => trainer.find_all().map(|all| {
                print_overview(&all);
                None
            }),
            (Some("play"), Some(id)) => match id.parse() {
                Ok(id) => trainer.progress(id).map(Some),
                Err(_) => {
                    println!("`{}` is not a game id", id);
                    continue;
                }
            },
            (Some(command), _) => match current {
                None => {
                    println!("Start a game with `new` first.");
                    continue;
                }
                Some(id) => match command {
                    "round" => trainer.start_new_round(id).map(Some),
                    "show" => trainer.progress(id).map(Some),
                    attempt => trainer.guess(id, attempt).map(Some),
                },
            },
        };

        match result {
            Ok(Some(progress)) => {
                current = Some(progress.id);
                show(&progress);
            }
            Ok(None) => {}
            Err(e) => match e.rejection() {
                Rejection::NotFound => println!("Not found: {}", describe(&e)),
                Rejection::Rejected => println!("Not allowed: {}", describe(&e)),
                Rejection::Internal => return Err(e.into()),
            },
        }
    }
}

fn show(progress: &Progress) {
    println!(
        "Game {} is {} with {} points after {} round(s).",
        progress.id, progress.state, progress.score, progress.rounds
    );
    for feedback in &progress.feedback_history {
        println!("  {}  {}", feedback.paint(), feedback);
    }
    if let Some(hint) = &progress.last_hint {
        println!("  {}", hint);
    }
}

fn describe(e: &LingoError) -> String {
    match e.source() {
        Some(source) => source.to_string(),
        None => e.to_string(),
    }
}

fn print_help() {
    println!("new        start a new game");
    println!("round      start the next round of the current game");
    println!("show       show the current game");
    println!("play <id>  switch to another game");
    println!("list       list all games");
    println!("quit       leave");
    println!("Anything else is guessed as a word.");
}

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use drills::{Error, TwoStackQueue, WordCloud};

/// Command line options, parsed with clap's derive macros.
#[derive(Parser, Debug)]
#[clap(about = "Word clouds and a queue made of two stacks")]
struct CmdOptions {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the words of a text, folding case variants together
    Cloud {
        #[clap(short, long, help = "File to read (defaults to stdin)")]
        file: Option<PathBuf>,
        #[clap(
            short,
            long,
            help = "Only print the N most frequent words (0 = all)",
            default_value = "0"
        )]
        top: usize,
    },
    /// Run operations against a two-stack queue: `+VALUE` enqueues, `-` dequeues
    Queue {
        #[clap(allow_hyphen_values = true)]
        ops: Vec<String>,
    },
}

enum QueueOp {
    Enqueue(String),
    Dequeue,
}

impl QueueOp {
    fn parse(token: &str) -> Option<QueueOp> {
        match token {
            "-" => Some(QueueOp::Dequeue),
            _ => token
                .strip_prefix('+')
                .map(|value| QueueOp::Enqueue(value.to_string())),
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("could not read stdin")?;
            Ok(text)
        }
    }
}

fn run_cloud(file: Option<PathBuf>, top: usize) -> Result<()> {
    let text = read_input(file.as_ref())?;
    let cloud = WordCloud::new(&text);
    log::info!("{} distinct words", cloud.counts().len());

    let ranked = cloud.counts().ranked();
    let shown = if top == 0 { ranked.len() } else { top };
    for (word, count) in ranked.into_iter().take(shown) {
        println!("{}\t{}", word, count);
    }
    Ok(())
}

fn run_queue(tokens: &[String]) -> Result<()> {
    let mut queue = TwoStackQueue::new();
    for token in tokens {
        match QueueOp::parse(token) {
            Some(QueueOp::Enqueue(value)) => {
                log::debug!("enqueue {}", value);
                queue.enqueue(value);
            }
            Some(QueueOp::Dequeue) => match queue.dequeue() {
                Ok(value) => println!("{}", value),
                Err(Error::EmptyQueue) => log::warn!("{}", Error::EmptyQueue),
            },
            None => bail!("unknown queue operation {:?} (expected +VALUE or -)", token),
        }
    }

    let ops = queue.stack_ops();
    log::info!(
        "{} left in queue; {} pushes, {} pops",
        queue.len(),
        ops.pushes,
        ops.pops
    );
    Ok(())
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    match options.command {
        Command::Cloud { file, top } => run_cloud(file, top),
        Command::Queue { ops } => run_queue(&ops),
    }
}

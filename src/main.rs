use std::{fs::File, io::IsTerminal, path::PathBuf, sync::Mutex};

use autocomplete::{FileDictionary, ReaderDictionary, SampleDictionary, Trie, WordSource};
use clap::Parser;
use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info, Level};

/// Prefix autocomplete over a dictionary of words.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Suggest every dictionary word starting with a prefix."
)]
struct Cli {
    /// The prefix to complete. May be empty to list the whole dictionary.
    #[arg(name = "PREFIX", default_value = "Tro")]
    prefix: String,
    /// Word list file, one word per line. May be given more than once.
    #[arg(short, long = "dict")]
    dict: Vec<PathBuf>,
    /// Print the suggestions as JSON.
    #[arg(long)]
    json: bool,
    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize, Debug)]
struct Suggestions<'a> {
    prefix: &'a str,
    suggestions: Vec<&'a str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let sources = word_sources(&cli);
    let mut trie = Trie::default();
    let start = Instant::now();
    for source in &sources {
        trie.extend(source.load().await?);
    }
    debug!("Built trie in {} ms", start.elapsed().as_millis());

    info!("Prefix: {:?}", cli.prefix);
    let suggestions = trie.autocomplete(&cli.prefix);

    if cli.json {
        let out = Suggestions {
            prefix: &cli.prefix,
            suggestions: suggestions.iter().map(String::as_str).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let words: Vec<&str> = suggestions.iter().map(String::as_str).collect();
        println!("[{}]", words.join(", "));
    }

    Ok(())
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt().with_max_level(level);
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Picks where the dictionary comes from: `--dict` files, then piped stdin, then the sample.
fn word_sources(cli: &Cli) -> Vec<Box<dyn WordSource>> {
    if !cli.dict.is_empty() {
        return cli
            .dict
            .iter()
            .map(|path| Box::new(FileDictionary::new(path)) as Box<dyn WordSource>)
            .collect();
    }

    if !std::io::stdin().is_terminal() {
        debug!("Reading dictionary from stdin");
        return vec![Box::new(ReaderDictionary::new(tokio::io::stdin()))];
    }

    debug!("Using the sample dictionary");
    vec![Box::new(SampleDictionary)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["autocomplete"]);
        assert_eq!(cli.prefix, "Tro");
        assert!(cli.dict.is_empty());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_args() {
        let cli = Cli::parse_from([
            "autocomplete",
            "-d",
            "a.txt",
            "--dict",
            "b.txt",
            "--json",
            "Ap",
        ]);
        assert_eq!(cli.prefix, "Ap");
        assert_eq!(
            cli.dict,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert!(cli.json);
    }

    #[test]
    fn test_cli_empty_prefix() {
        let cli = Cli::parse_from(["autocomplete", ""]);
        assert_eq!(cli.prefix, "");
    }

    #[test]
    fn test_dict_args_take_precedence() {
        let cli = Cli::parse_from(["autocomplete", "-d", "a.txt", "-d", "b.txt"]);
        assert_eq!(word_sources(&cli).len(), 2);
    }

    #[test]
    fn test_json_output() {
        let out = Suggestions {
            prefix: "Tr",
            suggestions: vec!["Trap", "Trot"],
        };
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"prefix":"Tr","suggestions":["Trap","Trot"]}"#
        );
    }
}

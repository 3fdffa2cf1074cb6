use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{Context, Result};
use cedict_pinyin::{ConvertResult, Dict, LanguageMode, ToneStyle};
use clap::{Args, Parser, Subcommand};
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "pinyin", about = "Convert Chinese text to pinyin")]
struct Cli {
    /// dictionary file (traditional`simplified`pinyin per line); defaults to
    /// $PINYIN_DICT_PATH, then the embedded sample
    #[arg(long, global = true)]
    dict: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LanguageMode::All, global = true)]
    mode: LanguageMode,

    #[arg(long, value_enum, default_value_t = ToneStyle::Ascii, global = true)]
    tone: ToneStyle,

    /// separator between syllables (convert, name, abbr)
    #[arg(long, default_value = " ", global = true)]
    sep: String,

    /// print every rendering as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// syllables joined by the separator, punctuation dropped
    Convert(MixedInput),
    /// prose with punctuation kept
    Sentence(MixedInput),
    /// personal name, surname aware
    Name(Input),
    /// first letter of every syllable
    Abbr(Input),
}

#[derive(Args, Debug)]
struct Input {
    /// text to convert; read line by line from stdin when omitted
    text: Vec<String>,
}

#[derive(Args, Debug)]
struct MixedInput {
    /// keep words outside Han text as written
    #[arg(long)]
    only_chinese: bool,

    #[command(flatten)]
    input: Input,
}

impl Command {
    fn input(&self) -> &Input {
        match self {
            Command::Convert(m) | Command::Sentence(m) => &m.input,
            Command::Name(i) | Command::Abbr(i) => i,
        }
    }
}

fn run_one(dict: &Dict, cli: &Cli, text: &str) -> Result<String> {
    let result = match &cli.command {
        Command::Convert(m) if m.only_chinese => dict.convert_only_chinese(text, &cli.sep),
        Command::Convert(_) => dict.convert(text, &cli.sep),
        Command::Sentence(m) if m.only_chinese => dict.sentence_only_chinese(text),
        Command::Sentence(_) => dict.sentence(text),
        Command::Name(_) => dict.name(text, &cli.sep),
        Command::Abbr(_) => ConvertResult::new(dict.abbr(text, &cli.sep)),
    };
    debug!("{:?} -> {:?}", text, result);

    if cli.json {
        Ok(serde_json::to_string(&result.rendered())?)
    } else {
        Ok(result.render(cli.tone))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dict = match &cli.dict {
        Some(path) => Dict::from_path(path)
            .with_context(|| format!("loading dictionary {}", path.display()))?,
        None => Dict::new().context("loading default dictionary")?,
    }
    .with_mode(cli.mode);

    let text = &cli.command.input().text;
    if !text.is_empty() {
        println!("{}", run_one(&dict, &cli, &text.join(" "))?);
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", run_one(&dict, &cli, &line)?);
    }
    Ok(())
}

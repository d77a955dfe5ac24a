mod debug_report;

use std::fs;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use dichrona::sources::{Lexicon, LexiconLookup, MetricalLookup, ScansionTable, StemLookup, StemTable};
use dichrona::{Context, Corpus, Options, Stage, annotate_with};

const EXIT_CODES: &str = "Exit codes:
  0  Success.
  1  I/O or configuration error.
  2  Invalid arguments.";

/// Infer vowel lengths of Ancient Greek dichrona in an annotated TSV corpus.
///
/// Reads `token, tag, lemma, macrons, source` rows, runs the annotation
/// pipeline and writes the same rows back with new length markers.
#[derive(Debug, Parser)]
#[command(name = "dichrona", version, after_help = EXIT_CODES)]
struct Cli {
    /// Input TSV (default: stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// TOML file with `stages` and `parallel`
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma-separated stage order, overriding the configuration
    #[arg(long, value_delimiter = ',', value_name = "STAGES")]
    stages: Option<Vec<Stage>>,

    /// Run every stage on one thread
    #[arg(long)]
    no_parallel: bool,

    /// Lexicon TSV (`token<TAB>macrons`)
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Source label for lexicon annotations
    #[arg(long, value_name = "LABEL", default_value = "lexicon")]
    lexicon_label: String,

    /// Scansions TSV (`token<TAB>syl^,syl_,...`)
    #[arg(long, value_name = "FILE")]
    scansions: Option<PathBuf>,

    /// Stems TSV (`token<TAB>tag<TAB>stem`)
    #[arg(long, value_name = "FILE")]
    stems: Option<PathBuf>,

    /// Print syllables and letter ordinals of each input word instead of annotating
    #[arg(long)]
    syllabify: bool,

    /// Do not print the stage report
    #[arg(long)]
    no_report: bool,

    /// Force ANSI color in the report
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color in the report
    #[arg(long, overrides_with = "color")]
    no_color: bool,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli.input.as_deref())?;
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if cli.syllabify {
        write_syllables(&input, &mut out)?;
        return Ok(out.flush()?);
    }

    let mut options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(stages) = &cli.stages {
        options.stages = stages.clone();
    }
    if cli.no_parallel {
        options.parallel = false;
    }

    let lexicon = cli
        .lexicon
        .as_deref()
        .map(|path| Lexicon::load(&cli.lexicon_label, path).with_context(|| format!("cannot read {}", path.display())))
        .transpose()?;
    let scansions = cli
        .scansions
        .as_deref()
        .map(|path| ScansionTable::load(path).with_context(|| format!("cannot read {}", path.display())))
        .transpose()?;
    let stems = cli
        .stems
        .as_deref()
        .map(|path| StemTable::load(path).with_context(|| format!("cannot read {}", path.display())))
        .transpose()?;
    let context = Context {
        lexicon: lexicon.as_ref().map(|l| l as &dyn LexiconLookup),
        metrical: scansions.as_ref().map(|s| s as &dyn MetricalLookup),
        stems: stems.as_ref().map(|s| s as &dyn StemLookup),
    };
    log::debug!("{:?} with {:?}", options, context);

    let (mut corpus, report) = Corpus::parse(&input);
    let metrics = annotate_with(&mut corpus.records, &context, &options);
    corpus.write(&mut out).context("cannot write output")?;
    out.flush().context("cannot write output")?;

    if !cli.no_report {
        let color = if cli.color {
            true
        } else if cli.no_color {
            false
        } else {
            io::stderr().is_terminal()
        };
        debug_report::print_run(&report, &metrics, color);
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// One line per word: the word, its syllables and `ordinal:letter` pairs.
fn write_syllables(input: &str, out: &mut dyn Write) -> io::Result<()> {
    for word in input.split_whitespace() {
        let syllables = dichrona::syllabify(word);
        if syllables.is_empty() {
            continue;
        }
        let letters: Vec<String> =
            dichrona::index(word).letters().iter().map(|l| format!("{}:{}", l.ordinal, l.letter)).collect();
        writeln!(out, "{}\t{}\t{}", word, syllables.join("-"), letters.join(" "))?;
    }
    Ok(())
}

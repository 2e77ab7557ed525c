use clap::{Parser, ValueEnum};

use entail_rs::check::{CheckConfig, ModelChecker};
use entail_rs::formula::Notation;
use entail_rs::sentence::Sentence;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Glyphs {
    Unicode,
    Ascii,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Connective glyphs used when printing formulas.
    #[arg(long, value_enum, default_value = "unicode")]
    glyphs: Glyphs,

    /// Visit every assignment, even after a counterexample is found.
    #[arg(long)]
    exhaustive: bool,

    /// Increase log verbosity (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let notation = match args.glyphs {
        Glyphs::Unicode => Notation::Unicode,
        Glyphs::Ascii => Notation::Ascii,
    };

    let rain = Sentence::atom("rain")?;
    let bbc = Sentence::atom("bbc")?;
    let unimayor = Sentence::atom("unimayor")?;

    // If it is not raining, the students visit the BBC.
    let p1 = Sentence::implication(Sentence::negation(rain.clone()), bbc.clone());
    // The students visited the BBC or Unimayor, but not both.
    let p2 = Sentence::conjunction([
        Sentence::disjunction([bbc.clone(), unimayor.clone()])?,
        Sentence::negation(Sentence::conjunction([bbc.clone(), unimayor.clone()])?),
    ])?;
    // The students visited Unimayor.
    let p3 = unimayor;

    let kb = Sentence::conjunction([p1, p2, p3])?;
    println!("knowledge = {}", kb.formula_with(notation));

    let questions = [
        ("Can we infer that the students visited the BBC today?", bbc),
        ("Can we infer that it is raining today?", rain),
    ];

    for (question, query) in &questions {
        let config = CheckConfig {
            exhaustive: args.exhaustive,
            ..Default::default()
        };
        let mut checker = ModelChecker::with_config(&kb, query, config);
        let holds = checker.check()?;

        println!("{}", question);
        println!("  query = {}", query.formula_with(notation));
        println!("  answer = {}", if holds { "yes" } else { "no" });
        if let Some(m) = checker.counterexample() {
            println!("  counterexample = {}", m);
        }
        println!("  stats = {:?}", checker.stats());
    }

    Ok(())
}

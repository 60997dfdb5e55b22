use clap::{Parser, ValueEnum};
use drill_core::{render_table, DeckKind, ParseOptions, QuizSession};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mojidrill_trainer::config::TrainerConfig;
use mojidrill_trainer::error::LoadError;
use mojidrill_trainer::loader::{load_deck, LoadedDeck};
use mojidrill_trainer::ui;

#[derive(Parser)]
#[command(name = "mojidrill", version, about = "Terminal kana and kanji flashcard trainer")]
struct Cli {
    /// Deck file path or http(s) URL
    deck: String,

    /// Reference table preset
    #[arg(long, value_enum, default_value = "syllabary")]
    kind: KindArg,

    /// Override the reference table column count
    #[arg(long)]
    columns: Option<usize>,

    /// Prompt field label in the legacy line format
    #[arg(long, default_value = "kana")]
    prompt_label: String,

    /// Answer field label in the legacy line format
    #[arg(long, default_value = "romaji")]
    answer_label: String,

    /// Print the reference table to stdout and exit
    #[arg(long)]
    table: bool,

    /// Print the parsed deck as JSON to stdout and exit
    #[arg(long)]
    dump: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Syllabary,
    Logographic,
}

impl From<KindArg> for DeckKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Syllabary => DeckKind::Syllabary,
            KindArg::Logographic => DeckKind::Logographic,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (config, deck) = match load(&cli).await {
        Ok(loaded) => loaded,
        Err(err) => {
            // Full detail goes to diagnostics only; the user channel gets
            // one fixed line.
            let err = anyhow::Error::new(err);
            tracing::error!("deck load failed: {err:#}");
            eprintln!("Error loading deck.");
            std::process::exit(1);
        }
    };

    let columns = config.table_columns();

    if cli.table {
        print!("{}", render_table(&deck.sections, columns));
        return Ok(());
    }

    if cli.dump {
        let dump = serde_json::json!({
            "entries": deck.entries,
            "sections": deck.sections,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let table = render_table(&deck.sections, columns);
    let session = QuizSession::new(deck.entries)?;
    let (correct, total) = ui::run_quiz(session, table)?;

    println!("Score: {correct}/{total}");
    Ok(())
}

async fn load(cli: &Cli) -> Result<(TrainerConfig, LoadedDeck), LoadError> {
    let options = ParseOptions {
        prompt_label: cli.prompt_label.clone(),
        answer_label: cli.answer_label.clone(),
    };
    let config = TrainerConfig::new(&cli.deck, cli.kind.into(), cli.columns, options)?;
    let deck = load_deck(&config).await?;
    Ok((config, deck))
}

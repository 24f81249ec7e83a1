//! Shuffle a fresh deck and print where every card ends up.
//!
//! ```text
//! faro fo fo fo fo fo fo fo fo       # eight out faros restore 52 cards
//! faro -n 32 fi fi so fo di --order
//! faro -n 8 fo --symbols             # A♥, A♦, 2♥, 2♦, A♣, A♠, 2♣, 2♠
//! ```
use clap::Parser;
use faro::Deck;
use faro::Sequence;
use faro::Shuffle;
use faro::Spread;

#[derive(Parser)]
#[command(author, version, about = "Apply faro shuffles to a fresh deck", long_about = None)]
struct Args {
    /// Number of cards in the deck
    #[arg(short = 'n', long, default_value_t = faro::DECK)]
    size: usize,
    /// Shuffles to apply, left to right (fi fo si so di do rfo)
    shuffles: Vec<Shuffle>,
    /// Print the final positions instead of card names
    #[arg(long, conflicts_with = "json")]
    raw: bool,
    /// Name cards with suit symbols (A♥) instead of letters (A.H)
    #[arg(long, conflicts_with = "raw")]
    symbols: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Also print how many repetitions of the sequence restore the deck
    #[arg(long)]
    order: bool,
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    faro::log(match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    })?;
    let sequence = Sequence::from(args.shuffles);
    let deck = sequence.apply(&Deck::identity(args.size))?;
    log::info!("shuffled {} cards through [{}]", deck.len(), sequence);
    let order = match args.order {
        true => Some(deck.order()?),
        false => None,
    };
    if args.json {
        let names = match Spread::try_from(&deck) {
            Ok(spread) => Some(
                spread
                    .iter()
                    .map(|c| match args.symbols {
                        true => format!("{:#}", c),
                        false => c.to_string(),
                    })
                    .collect::<Vec<_>>(),
            ),
            Err(e) => {
                log::warn!("omitting card names: {}", e);
                None
            }
        };
        let report = serde_json::json!({
            "size": deck.len(),
            "sequence": sequence.to_string(),
            "deck": deck,
            "names": names,
            "order": order,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    match (args.raw, args.symbols) {
        (true, _) => println!("{}", deck),
        (false, true) => println!("{:#}", Spread::try_from(&deck)?),
        (false, false) => println!("{}", Spread::try_from(&deck)?),
    }
    if let Some(order) = order {
        println!("order: {}", order);
    }
    Ok(())
}

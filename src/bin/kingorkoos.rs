//! Console King or Koos.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use kingorkoos::selection::parse_selection;
use kingorkoos::{
    Card, Game, GameOptions, PlayError, Player, PlayerId, Ranking, Suit, TableView, TurnInput, TurnPrompt,
};

const DEMO_PLAYERS: [&str; 5] = ["Audrey", "Jesse", "Kirsten", "Jason", "Asher"];

/// Play King or Koos at the console.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player names, in seating order.
    players: Vec<String>,
    /// Seat the five demo players instead of naming players.
    #[arg(long, conflicts_with = "players")]
    demo: bool,
    /// Seed for the shuffle. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match play(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> Result<(), Box<dyn core::error::Error>> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let game = Game::new(GameOptions::default(), seed);

    if args.demo {
        for name in DEMO_PLAYERS {
            game.join(name)?;
        }
    } else {
        for name in &args.players {
            game.join(name)?;
        }
    }

    game.run(&mut Console, &mut Console)?;
    Ok(())
}

struct Console;

impl TurnInput for Console {
    fn select(&mut self, prompt: &TurnPrompt) -> Option<Vec<Card>> {
        loop {
            let line = prompt_line(&format!(
                "Select up to {} card(s): a value (4-10, J, Q, K, A, 2, 3) then suits (S, C, H, D) \
                 separated by commas, e.g. 2H,S. Press ENTER to skip, q to quit: ",
                prompt.playable_count()
            ))?;
            if line.eq_ignore_ascii_case("q") {
                return None;
            }
            match parse_selection(&line) {
                Ok(cards) => return Some(cards),
                Err(err) => println!("Could not read that: {err}. Please try again.\n"),
            }
        }
    }

    fn rejected(&mut self, _prompt: &TurnPrompt, error: &PlayError) {
        match error {
            PlayError::RankTooLow => println!(
                "You can't place down that hand: {error}. \
                 If you don't have any cards you can play, skip your turn!\n"
            ),
            _ => println!("Your play was not valid: {error}. Please try again.\n"),
        }
    }
}

impl TableView for Console {
    fn show_turn(&mut self, prompt: &TurnPrompt) {
        match &prompt.pile_top {
            Some(entry) => {
                println!("{}", suit_banner());
                println!("{}", format_cards(&entry.cards));
                println!("{}\n", suit_banner());
            }
            None => println!("Pile for this round was empty.\n"),
        }
        println!(
            "{}: {}\n",
            prompt.player.name(),
            format_cards(prompt.player.hand().cards())
        );
    }

    fn round_over(&mut self, finished: Option<&Player>, leader: &Player) {
        println!("ROUND OVER!");
        if let Some(player) = finished {
            println!("{} is out of cards.", player.name());
        }
        println!("{} leads the next round.\n", leader.name());
    }

    fn game_over(&mut self, ranking: &Ranking, players: &[Player]) {
        println!(
            "GAME OVER. KING ~ {} :: KOOS ~ {}",
            player_name(players, ranking.king),
            player_name(players, ranking.koos)
        );
    }
}

fn player_name(players: &[Player], id: PlayerId) -> &str {
    players
        .iter()
        .find(|p| p.id() == id)
        .map_or("?", Player::name)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn suit_banner() -> String {
    Suit::ALL
        .iter()
        .cycle()
        .take(20)
        .map(|suit| colorize(&suit.symbol().to_string(), suit_color(*suit)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = suit_color(card.suit);
    format!(
        "({} of {})",
        colorize(card.rank.label(), code),
        colorize(&card.suit.symbol().to_string(), code)
    )
}

const fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

//! CLI round example.
//!
//! The terminal stands in for the pointer: a bet is a release, a hit is a
//! short tap, and a stay is a press held past the stay threshold.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use core::time::Duration;

use bjround::{
    BetDesk, Card, ChipId, Hand, Pointer, PointerEvent, PointerTarget, Position, RoundError,
    RoundEvent, RoundMachine, RoundOptions, RoundPhase, Settlement, Shoe, Suit, Winner,
};
use tracing_subscriber::{EnvFilter, fmt};

const FRAME: Duration = Duration::from_millis(100);
const TABLE_BET: usize = 10;
const RESHUFFLE_BELOW: usize = 15;

struct Bankroll {
    money: usize,
    staked: usize,
}

impl BetDesk for Bankroll {
    fn select_chips_above(&mut self, _chip: ChipId) {}

    fn deselect_chips(&mut self) {}

    fn move_selected_chips(&mut self, _to: Position) {}

    fn attempt_place_selected_bet(&mut self) -> bool {
        if self.money < TABLE_BET {
            return false;
        }
        self.money -= TABLE_BET;
        self.staked = TABLE_BET;
        true
    }
}

impl Settlement for Bankroll {
    fn dealer_collects_bet(&mut self) {
        self.staked = 0;
    }

    fn dealer_pays(&mut self, blackjack: bool) {
        self.staked += if blackjack {
            self.staked * 2
        } else {
            self.staked
        };
    }

    fn player_collects(&mut self) {
        self.money += self.staked;
        self.staked = 0;
    }
}

struct Keyboard;

impl Pointer for Keyboard {
    fn target(&self) -> Option<PointerTarget> {
        Some(PointerTarget::Chip(ChipId(0)))
    }

    fn position(&self) -> Position {
        Position::default()
    }

    fn set_detect_new_targets(&mut self, _detect: bool) {}
}

type Table = RoundMachine<Shoe, Bankroll, Keyboard>;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_target(false)
        .with_env_filter(env_filter)
        .compact()
        .try_init();

    println!("Blackjack round CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default();
    let hold = options.stay_hold_time;
    let bankroll = Bankroll {
        money: 100,
        staked: 0,
    };

    let mut table = match RoundMachine::new(options, Shoe::new(6, seed), bankroll, Keyboard) {
        Ok(table) => table,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };

    loop {
        if let Err(err) = advance(&mut table) {
            println!("Round error: {err}");
            break;
        }

        match table.phase() {
            RoundPhase::Betting => {
                let money = table.chips().money;
                if money < TABLE_BET {
                    println!("You are out of money. Game over.");
                    break;
                }
                if table.supply().cards_remaining() < RESHUFFLE_BELOW {
                    table.supply_mut().refill();
                    println!("Shoe reshuffled.");
                }
                match prompt_line(&format!("Money {money}. [b]et {TABLE_BET} or [q]uit: ")).as_str()
                {
                    "b" | "bet" => press(&mut table, Duration::ZERO),
                    "q" | "quit" => break,
                    _ => println!("Unknown action."),
                }
            }
            RoundPhase::PlayerTurn => {
                print_table(&table);
                match prompt_line("Action: [h]it [s]tand: ").as_str() {
                    "h" | "hit" => press(&mut table, FRAME),
                    "s" | "stand" => press(&mut table, hold + FRAME),
                    "q" | "quit" => break,
                    _ => println!("Unknown action."),
                }
            }
            _ => {}
        }
    }
}

/// Ticks until the round needs input again.
fn advance(table: &mut Table) -> Result<(), RoundError> {
    loop {
        for event in table.tick(&[], FRAME)? {
            report(table, &event);
        }
        if matches!(table.phase(), RoundPhase::Betting | RoundPhase::PlayerTurn) {
            return Ok(());
        }
    }
}

fn press(table: &mut Table, held_for: Duration) {
    let start = table.now();
    let events = [PointerEvent::down(start), PointerEvent::up(start + held_for)];
    match table.tick(&events, held_for) {
        Ok(events) => {
            for event in events {
                report(table, &event);
            }
        }
        Err(err) => println!("Round error: {err}"),
    }
}

fn report(table: &Table, event: &RoundEvent) {
    match event {
        RoundEvent::CardDealt { seat, card, .. } if card.is_face_up() => {
            println!("{seat:?} receives {}", format_card(card));
        }
        RoundEvent::CardDealt { seat, .. } => println!("{seat:?} receives ??"),
        RoundEvent::HoleRevealed { card, .. } => {
            println!("Dealer reveals {}", format_card(card));
        }
        RoundEvent::Settled(outcome) => {
            print_table(table);
            let verdict = match outcome.winner {
                Winner::Player if outcome.player_blackjack => "Blackjack! You win.",
                Winner::Player => "You win.",
                Winner::Dealer => "Dealer wins.",
                Winner::Push => "Push.",
            };
            println!(
                "{verdict} ({} vs {}) Money: {}",
                outcome.player_sum,
                outcome.dealer_sum,
                table.chips().money
            );
        }
        _ => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(table: &Table) {
    let remaining = table.supply().cards_remaining();
    println!("\nShoe: {remaining} cards remaining");
    println!("Dealer: {}", format_hand(table.dealer_hand()));
    println!("You:    {}\n", format_hand(table.player_hand()));
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|card| {
            if card.is_face_up() {
                format_card(card)
            } else {
                "??".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("\u{1b}[{color_code}m{rank}{suit}\u{1b}[0m")
}

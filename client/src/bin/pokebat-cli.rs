//! Terminal player for a pokebat server.
//!
//! Prompts for a name, three catalog picks, and an action whenever it is your turn.

use std::io::{self, Write};

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use pokebat_client::{Action, Client, DEFAULT_SERVER_ADDR, Handler, Sender};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pokebat-cli", about = "Play a pokebat match from the terminal")]
struct Args {
    /// Server address
    #[arg(long, default_value = DEFAULT_SERVER_ADDR)]
    addr: String,

    /// Player name; asked for interactively when omitted
    #[arg(long)]
    name: Option<String>,
}

struct CliPlayer {
    sender: Sender,
    input: Lines<BufReader<Stdin>>,
    name: Option<String>,
    accepted: usize,
}

impl CliPlayer {
    async fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{}", text);
        io::stdout().flush().ok();
        match self.input.next_line().await {
            Ok(Some(line)) => Some(line.trim().to_string()),
            _ => None,
        }
    }

    async fn ask_pick(&mut self) {
        loop {
            let Some(line) = self.prompt(&format!("Pick #{} (catalog index): ", self.accepted + 1)).await else {
                return;
            };
            match line.parse::<i64>() {
                Ok(index) => {
                    if let Err(e) = self.sender.choose(index).await {
                        println!("Error: {}", e);
                    }
                    return;
                }
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    async fn ask_action(&mut self) {
        loop {
            let Some(line) = self.prompt("[a]ttack, [s]witch or [q]uit (surrender): ").await else {
                return;
            };
            let action = match line.as_str() {
                "a" => Action::Attack,
                "s" => Action::Switch,
                "q" => Action::Surrender,
                other => match other.parse::<Action>() {
                    Ok(action) => action,
                    Err(_) => {
                        println!("Unknown action: {}", other);
                        continue;
                    }
                },
            };
            if let Err(e) = self.sender.act(action).await {
                println!("Error: {}", e);
            }
            return;
        }
    }
}

#[async_trait]
impl Handler for CliPlayer {
    async fn on_player_number(&mut self, number: u8) {
        println!("You are player {}.", number);
        let mut name = self.name.take().unwrap_or_default();
        while name.trim().is_empty() {
            let Some(line) = self.prompt("Name: ").await else {
                return;
            };
            if line.is_empty() {
                println!("Player name cannot be empty.");
            }
            name = line;
        }
        if let Err(e) = self.sender.send_name(name.trim()).await {
            println!("Error: {}", e);
        }
    }

    async fn on_welcome(&mut self, text: &str) {
        println!("{}", text);
        self.ask_pick().await;
    }

    async fn on_selection_rejected(&mut self) {
        println!("That pick was refused, try another.");
        self.ask_pick().await;
    }

    async fn on_draft_complete(&mut self) {
        println!("Roster complete. Waiting for your opponent...");
    }

    async fn on_battle_start(&mut self) {
        println!("The battle begins!");
    }

    async fn on_turn(&mut self) {
        println!("It's your turn!");
        self.ask_action().await;
    }

    async fn on_waiting(&mut self) {
        println!("Waiting for opponent's move...");
    }

    async fn on_outcome(&mut self, text: &str, _damage: u32, _remaining_hp: u32) {
        println!("{}", text);
    }

    async fn on_game_over(&mut self, text: &str) {
        println!("{}", text);
    }

    async fn on_aborted(&mut self, text: &str) {
        println!("{}", text);
    }

    async fn on_info(&mut self, text: &str) {
        println!("{}", text);
        if text.starts_with("You chose ") {
            self.accepted += 1;
            if self.accepted < 3 {
                self.ask_pick().await;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    println!("Connecting to {}...", args.addr);
    let client = Client::connect(&args.addr).await?;
    println!("Connected. Waiting for an opponent...");

    let (sender, mut receiver) = client.split();
    let mut player = CliPlayer {
        sender,
        input: BufReader::new(tokio::io::stdin()).lines(),
        name: args.name,
        accepted: 0,
    };

    receiver.run(&mut player).await
}

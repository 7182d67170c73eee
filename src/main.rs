use std::time::Duration;

use anyhow::Context;
use backend::{Relay, DEFAULT_RELAY_ADDR};
use chess_engine::{Color, Difficulty};
use clap::{Parser, Subcommand, ValueEnum};
use peerchess::core::{load_settings, save_settings, HostColor, Settings};
use peerchess::game::ai::AiConfig;
use peerchess::game::{GameController, GameMode};
use peerchess::networking::{LinkState, Session, TcpChannel};
use peerchess::ui;
use shared::RoomCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How often the online session is polled for opponent messages
const NETWORK_TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "peerchess")]
#[command(about = "Chess against a friend, the AI, or a remote opponent")]
struct Cli {
    /// Relay address (host:port) for online games
    #[arg(long, global = true)]
    relay: Option<String>,

    /// AI strength: easy, medium, hard, expert, or a search depth
    #[arg(long, global = true)]
    difficulty: Option<Difficulty>,

    /// Delay before the AI starts thinking, in milliseconds
    #[arg(long, global = true)]
    think_delay_ms: Option<u64>,

    /// Store the effective settings as the new defaults
    #[arg(long, global = true)]
    save: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Two players at one keyboard
    Local,
    /// Play against the AI
    Ai {
        /// Side the AI plays
        #[arg(long)]
        ai_color: Option<Side>,
    },
    /// Host an online game and print its room code
    Host {
        #[arg(long)]
        color: Option<HostColor>,
        /// Reuse a specific room code instead of generating one
        #[arg(long)]
        code: Option<String>,
    },
    /// Join an online game by room code
    Join { code: String },
    /// Run the matchmaking relay
    Relay {
        /// Listen address; defaults to $RELAY_ADDR or 0.0.0.0:7878
        #[arg(long)]
        addr: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings();
    apply_overrides(&mut settings, &cli);

    let mode = match cli.command {
        Command::Relay { addr } => {
            let addr = addr
                .or_else(|| std::env::var("RELAY_ADDR").ok())
                .unwrap_or_else(|| DEFAULT_RELAY_ADDR.to_string());
            let relay = Relay::bind(&addr)
                .await
                .with_context(|| format!("failed to bind relay on {addr}"))?;
            info!("[RELAY] Listening on {}", relay.local_addr()?);
            relay.run().await?;
            return Ok(());
        }
        Command::Local => GameMode::Local,
        Command::Ai { ai_color } => {
            if let Some(side) = ai_color {
                settings.ai_color = side.into();
            }
            GameMode::VsAi(AiConfig::from(&settings))
        }
        Command::Host { color, code } => {
            if let Some(color) = color {
                settings.host_color = color;
            }
            let code = match code {
                Some(text) => RoomCode::parse(&text)?,
                None => RoomCode::generate(),
            };
            println!("Room code: {code}");
            let channel = TcpChannel::host(settings.relay_addr.clone(), &code);
            GameMode::Online(Session::host(
                Box::new(channel),
                code,
                settings.host_color.resolve(),
            ))
        }
        Command::Join { code } => {
            let code = RoomCode::parse(&code)?;
            let channel = TcpChannel::join(settings.relay_addr.clone(), &code);
            GameMode::Online(Session::join(Box::new(channel), code))
        }
    };

    if cli.save {
        save_settings(&settings)?;
    }

    run(GameController::new(mode)).await
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(relay) = &cli.relay {
        settings.relay_addr = relay.clone();
    }
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(delay) = cli.think_delay_ms {
        settings.think_delay_ms = delay;
    }
}

async fn run(mut controller: GameController) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick = tokio::time::interval(NETWORK_TICK);

    match controller.session() {
        Some(session) => println!("{}", ui::link_label(session.link())),
        None => println!("{}", ui::render(controller.game(), controller.player_color())),
    }
    println!("Type 'help' for commands.");
    controller.start();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Flow::Quit = handle_command(&mut controller, line.trim()) {
                    break;
                }
            }
            reply = controller.next_ai_reply(), if controller.is_ai_thinking() => {
                if let Some(applied) = controller.apply_ai_reply(reply) {
                    println!("AI plays {}", applied.mv);
                    println!("{}", ui::render(controller.game(), controller.player_color()));
                }
            }
            _ = tick.tick(), if controller.is_online() => {
                let events = controller.poll_network();
                for event in &events {
                    println!("{}", ui::describe_event(event));
                }
                if !events.is_empty() {
                    println!("{}", ui::render(controller.game(), controller.player_color()));
                }
            }
        }
    }

    controller.close();
    Ok(())
}

fn handle_command(controller: &mut GameController, input: &str) -> Flow {
    match input {
        "" => {}
        "quit" | "exit" => return Flow::Quit,
        "help" => println!("{}", ui::HELP),
        "board" => println!("{}", ui::render(controller.game(), controller.player_color())),
        "moves" => println!("{}", ui::legal_moves_line(controller.game())),
        "fen" => println!("{}", controller.game().fen()),
        "resign" => match controller.resign() {
            Ok(()) => println!("{}", ui::status_line(controller.game(), controller.player_color())),
            Err(e) => println!("{e}"),
        },
        "new" | "rematch" => match controller.new_game() {
            Ok(()) => println!("{}", ui::render(controller.game(), controller.player_color())),
            Err(e) => println!("{e}"),
        },
        text => match controller.play_text(text) {
            Ok(_) => println!("{}", ui::render(controller.game(), controller.player_color())),
            Err(e) => {
                warn!("[ENGINE] Rejected {:?}: {}", text, e);
                println!("{e}");
            }
        },
    }
    if controller
        .session()
        .is_some_and(|s| s.link() == LinkState::Disconnected)
    {
        println!("{}", ui::link_label(LinkState::Disconnected));
    }
    Flow::Continue
}

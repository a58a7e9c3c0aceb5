use anyhow::Result;
use clap::Parser;
use log::info;

use std::time::Duration;

use connect383_ai::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a game of Connect 383 between two agents", long_about = None)]
struct Args {
    /// Agent for player 1: random, human, mini, prune, look<N> or alt<N>
    player_one: String,
    /// Agent for player 2: random, human, mini, prune, look<N> or alt<N>
    player_two: String,
    /// Board width in tiles
    #[arg(long, default_value_t = WIDTH)]
    width: usize,
    /// Board height in tiles
    #[arg(long, default_value_t = HEIGHT)]
    height: usize,
    /// One-indexed columns to play before the agents take over, e.g. "4435"
    #[arg(long, default_value = "")]
    moves: String,
    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,
    /// Pause between moves, to follow games between two computer agents
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

/// Validated settings for a single game
struct GameConfig {
    board: Board,
    agents: [Box<dyn Agent<Board>>; 2],
    delay: Duration,
}

impl GameConfig {
    fn from_args(args: &Args) -> Result<Self> {
        let board = Board::from_moves(&args.moves, args.width, args.height)?;
        // give each random agent its own stream
        let agents = [
            get_agent_with_seed(&args.player_one, args.seed)?,
            get_agent_with_seed(&args.player_two, args.seed.map(|s| s.wrapping_add(1)))?,
        ];
        Ok(Self {
            board,
            agents,
            delay: Duration::from_millis(args.delay_ms),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let GameConfig {
        mut board,
        mut agents,
        delay,
    } = GameConfig::from_args(&args)?;
    info!(
        "starting {}x{} game: {} vs {}",
        board.width(),
        board.height(),
        args.player_one,
        args.player_two
    );

    println!("Welcome to Connect 383\n");

    // game loop
    loop {
        board.display()?;
        if board.is_full() {
            break;
        }

        let player = board.next_player();
        let agent = &mut agents[player.number() - 1];
        println!("Player {} ({}) is thinking...", player.number(), agent.name());
        std::thread::sleep(delay);

        let (column, next) = agent.get_move(&board)?;
        info!("player {} played column {}", player.number(), column);
        println!("Player {} plays column {}", player.number(), column);
        board = next;
    }

    let (score_one, score_two) = board.scores();
    println!("Final score: player 1 {}, player 2 {}", score_one, score_two);
    match board.winner() {
        Some(player) => println!("Player {} wins!", player.number()),
        None => println!("Draw!"),
    }
    info!("game over after {} moves\n{}", board.num_moves(), board);
    Ok(())
}

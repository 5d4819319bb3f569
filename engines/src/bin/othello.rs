use anyhow::Context;
use clap::Parser;
use othello::{Board, GameObserver, Outcome, Player, Square};
use othello_engines::{run_games, StrategyKind};

#[derive(Parser, Debug)]
#[command(
    name = "othello",
    about = "Play Othello on the console: human, random, maximizer or alpha-beta players"
)]
struct Args {
    /// Strategy for black: human, random, maximizer, alphabeta[:depth] (or ia0/ia1/ia2)
    #[arg(long, default_value = "human")]
    black: StrategyKind,

    /// Strategy for white
    #[arg(long, default_value = "alphabeta")]
    white: StrategyKind,

    /// Number of consecutive games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,

    /// Only print results, not the board after every move
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

struct Console {
    quiet: bool,
    announce_black: bool,
    announce_white: bool,
}

impl GameObserver for Console {
    fn on_game_start(&mut self, _black: &str, _white: &str) {
        println!("Starting a new game");
    }

    fn on_turn(&mut self, player: Player, board: &Board, legal_moves: &[Square]) {
        if self.quiet {
            return;
        }
        print!("{}", board);
        let moves: Vec<String> = legal_moves.iter().map(|sq| sq.to_string()).collect();
        println!("{} to move, legal: {}", player, moves.join(" "));
    }

    fn on_move(&mut self, player: Player, square: Square, _board: &Board) {
        let announce = match player {
            Player::Black => self.announce_black,
            Player::White => self.announce_white,
        };
        if announce && !self.quiet {
            println!("{} plays {}", player, square);
        }
    }

    fn on_game_over(&mut self, outcome: &Outcome) {
        print!("{}", outcome.board);
        println!("Final score: {}", outcome.score);
        match outcome.winner() {
            Some(player) => println!("{} wins!", player),
            None => println!("Draw!"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    println!("black player: {}", args.black);
    println!("white player: {}", args.white);

    let mut black = args.black.build(args.seed);
    // keep the two random players on different sequences
    let mut white = args.white.build(args.seed.map(|s| s.wrapping_add(1)));
    let mut console = Console {
        quiet: args.quiet,
        announce_black: !args.black.is_human(),
        announce_white: !args.white.is_human(),
    };

    let tally = run_games(black.as_mut(), white.as_mut(), args.games, &mut console)
        .context("stopped before the last game")?;

    if args.games > 1 {
        println!(
            "{} games: black {} / white {} / draws {}",
            tally.games(),
            tally.black_wins,
            tally.white_wins,
            tally.draws
        );
    }
    Ok(())
}

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use perfect_play::game::fifteen::Fifteen;
use perfect_play::game::pennies::{Pennies, Pile};
use perfect_play::game::tictactoe::TicTacToe;
use perfect_play::game_tree::GameTree;
use perfect_play::session::{Session, Side, Status};
use perfect_play::strategy::{battle, Outcome, Perfect, Random};
use perfect_play::{best_move_and_score, score_moves, Error, Game, GameKind, Score};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "perfect-play")]
#[command(version, about = "Play small games against a perfect opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the console
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// Let the computer make the first move
        #[arg(long)]
        computer_first: bool,
    },
    /// Print the value of the starting position and of each move
    Solve {
        #[command(flatten)]
        game: GameArgs,
        /// Also expand the whole game tree and report its size
        #[arg(long)]
        tree: bool,
    },
    /// Pit perfect play against random play
    Selfplay {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args)]
struct GameArgs {
    #[arg(long, value_enum, default_value_t = GameKind::TicTacToe)]
    game: GameKind,
    /// Starting pile for pennies
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=24))]
    pennies: Option<u32>,
}

impl GameArgs {
    fn validate(&self) -> Result<()> {
        if self.pennies.is_some() && self.game != GameKind::Pennies {
            anyhow::bail!("--pennies only applies to --game pennies");
        }
        Ok(())
    }
}

macro_rules! with_game {
    ($args:expr, $f:ident ( $($rest:expr),* )) => {{
        $args.validate()?;
        match $args.game {
            GameKind::TicTacToe => $f::<TicTacToe>(TicTacToe::start() $(, $rest)*),
            GameKind::Pennies => {
                $f::<Pennies>($args.pennies.map(Pile).unwrap_or_else(Pennies::start) $(, $rest)*)
            }
            GameKind::Fifteen => $f::<Fifteen>(Fifteen::start() $(, $rest)*),
        }
    }};
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match Cli::parse().command {
        Commands::Play {
            game,
            computer_first,
        } => with_game!(game, play(computer_first)),
        Commands::Solve { game, tree } => with_game!(game, solve(tree)),
        Commands::Selfplay { game, games, seed } => with_game!(game, selfplay(games, seed)),
    }
}

fn dump<G: Game>(s: &G::State, human_first: bool) {
    println!("{}", G::render(s, human_first).trim_end());
}

/// Announces the end of the game, if it has ended.
fn game_over<G: Game>(session: &Session<G>) -> bool {
    match session.status {
        Status::InProgress => return false,
        Status::Won(Side::Human) => {
            println!("*** GAME OVER ***");
            println!("You win!")
        }
        Status::Won(Side::Computer) => {
            println!("*** GAME OVER ***");
            println!("I win!")
        }
        Status::Tie => {
            println!("*** GAME OVER ***");
            println!("It's a tie. Oh well.")
        }
    }
    true
}

fn computer<G: Game>(session: &Session<G>, human_first: bool) -> Result<Session<G>> {
    let (m, next) = session.computer_turn()?;
    println!("{}", G::describe_move(&session.state, &m));
    println!("OK, I took my turn.");
    dump::<G>(&next.state, human_first);
    Ok(next)
}

fn play<G: Game>(start: G::State, computer_first: bool) -> Result<()>
where
    G::Move: FromStr,
{
    println!("Welcome to {}!", G::NAME);
    let human_first = !computer_first;
    let mut session = Session::<G>::with_state(start)?;
    dump::<G>(&session.state, human_first);
    if computer_first {
        session = computer(&session, human_first)?;
        if game_over(&session) {
            return Ok(());
        }
    }
    let stdin = io::stdin();
    let mut buf = String::new();
    loop {
        let legal = G::moves(&session.state);
        println!(
            "It's your turn! Type a move (one of {}), 'hint' or 'quit':",
            legal.iter().join(", ")
        );
        buf.clear();
        if stdin.read_line(&mut buf)? == 0 {
            return Ok(());
        }
        let input = buf.trim();
        match input {
            "quit" => return Ok(()),
            "hint" => {
                for (m, score) in score_moves::<G>(&session.state)? {
                    println!("  {:<4}{}", m, score);
                }
                continue;
            }
            _ => {}
        }
        let next = input
            .parse::<G::Move>()
            .map_err(|_| Error::IllegalMove {
                play: input.to_string(),
            })
            .and_then(|m| session.human_turn(&m));
        session = match next {
            Ok(next) => next,
            Err(Error::IllegalMove { .. }) => {
                println!("That isn't a legal move!");
                println!("Your possible moves are: {}", legal.iter().join(", "));
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        dump::<G>(&session.state, human_first);
        if game_over(&session) {
            return Ok(());
        }
        session = computer(&session, human_first)?;
        if game_over(&session) {
            return Ok(());
        }
    }
}

fn solve<G: Game>(start: G::State, tree: bool) -> Result<()> {
    write_solution::<G>(&mut io::stdout().lock(), &start, tree)
}

fn write_solution<G: Game>(out: &mut impl Write, start: &G::State, tree: bool) -> Result<()> {
    writeln!(out, "{}", start.to_string().trim_end())?;
    if G::is_over(start) {
        // nothing to search; report how it ended
        let score = G::score_finished_game(start)?;
        writeln!(out, "The game is already over (score {} for the last mover).", score)?;
        return Ok(());
    }
    let best = best_move_and_score::<G>(start)?;
    writeln!(out, "Best move: {} (score {})", best.play, best.score)?;
    for (m, score) in score_moves::<G>(start)? {
        writeln!(out, "  {:<4}{}", m, score)?;
    }
    if tree {
        let t = GameTree::<G, Score>::solve(start)?;
        writeln!(out, "Positions: {}", t.size())?;
        writeln!(out, "Longest game: {} plies", t.depth())?;
    }
    Ok(())
}

fn selfplay<G: Game>(start: G::State, games: usize, seed: u64) -> Result<()> {
    let mut perfect = Perfect;
    let mut random = Random::new(StdRng::seed_from_u64(seed));
    let mut outcomes = Vec::with_capacity(games);
    for i in 0..games {
        // alternate who opens; tally from the perfect player's side
        let outcome = if i % 2 == 0 {
            battle::<G, _, _>(start.clone(), &mut perfect, &mut random)?
        } else {
            battle::<G, _, _>(start.clone(), &mut random, &mut perfect)?.swapped()
        };
        log::info!("game {:<4}{:?}", i, outcome);
        outcomes.push(outcome);
    }
    let counts = outcomes.into_iter().counts();
    let count = |o: Outcome| counts.get(&o).copied().unwrap_or(0);
    println!(
        "{}: perfect play won {}, lost {}, drew {} of {} games",
        G::NAME,
        count(Outcome::FirstWon),
        count(Outcome::SecondWon),
        count(Outcome::Draw),
        games
    );
    Ok(())
}

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lib_2048::{
    ai::{self, RandomAi},
    Direction, Error, Game, Status, Turn,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod input;
mod render;

use input::Command;

#[derive(Parser, Debug)]
#[command(name = "play-2048", about = "Play the 4x4 sliding-tile merge puzzle")]
struct Args {
    /// Seed for the tile spawner. Drawn from the OS when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Tracing filter, e.g. "info" or "lib_2048=debug". Logs go to stderr.
    #[arg(long, default_value = "warn", global = true)]
    log: String,
    /// Print boards and messages, or one JSON object per event.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Read one command per line from stdin.
    Interactive,
    /// Let a random player finish a whole game.
    Random {
        /// Seed for the player's own choices.
        #[arg(long)]
        ai_seed: Option<u64>,
    },
    /// Apply a fixed list of moves, e.g. "left,up,up,right".
    Script { moves: String },
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

struct Output<W> {
    out: W,
    format: Format,
    colour: bool,
}

impl<W: Write> Output<W> {
    fn board(&mut self, game: &Game<ChaCha8Rng>) -> Result<()> {
        match self.format {
            Format::Text => {
                render::draw_board(&mut self.out, game.board(), game.score(), self.colour)?
            }
            Format::Json => writeln!(
                self.out,
                "{}",
                json!({ "board": game.board(), "score": game.score(), "status": game.status() })
            )?,
        }

        Ok(())
    }

    fn message(&mut self, message: &str) -> Result<()> {
        match self.format {
            Format::Text => writeln!(self.out, "{message}")?,
            Format::Json => writeln!(self.out, "{}", json!({ "message": message }))?,
        }

        Ok(())
    }

    fn turn(&mut self, game: &Game<ChaCha8Rng>, turn: &Turn) -> Result<()> {
        match self.format {
            Format::Text => {
                if turn.outcome.moved {
                    render::draw_board(&mut self.out, game.board(), game.score(), self.colour)?;
                }

                writeln!(self.out, "{}", render::describe_turn(turn))?;

                if turn.status == Status::Over {
                    writeln!(self.out, "{}", render::GAME_OVER)?;
                }
            }
            Format::Json => writeln!(self.out, "{}", serde_json::to_string(turn)?)?,
        }

        Ok(())
    }

    fn cell(&mut self, index: usize, value: u32) -> Result<()> {
        match self.format {
            Format::Text => writeln!(self.out, "{}", render::describe_cell(value))?,
            Format::Json => writeln!(self.out, "{}", json!({ "index": index, "value": value }))?,
        }

        Ok(())
    }
}

fn play_interactive(
    output: &mut Output<impl Write>,
    input: impl BufRead,
    game: &mut Game<ChaCha8Rng>,
) -> Result<()> {
    output.board(game)?;
    output.message(render::GAME_STARTED)?;

    for line in input.lines() {
        let line = line.context("failed to read command from stdin")?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "ignoring command");
                output.message(&err.to_string())?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::NewGame => {
                game.restart();
                output.board(game)?;
                output.message(render::GAME_STARTED)?;
            }
            // Inspection stays available after game over, only moves are refused.
            Command::Inspect(index) => {
                let value = game.inspect(index)?;
                output.cell(index, value)?;
            }
            Command::Move(direction) => match game.play(direction) {
                Ok(turn) => output.turn(game, &turn)?,
                Err(Error::GameOver) => output.message(render::GAME_OVER)?,
                Err(err) => return Err(err.into()),
            },
        }
    }

    Ok(())
}

fn play_script(
    output: &mut Output<impl Write>,
    moves: &str,
    game: &mut Game<ChaCha8Rng>,
) -> Result<()> {
    let directions = moves
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Direction>, _>>()
        .context("invalid move script")?;

    output.board(game)?;

    for direction in directions {
        if game.is_over() {
            info!("script stopped early, game is over");
            break;
        }

        let turn = game.play(direction)?;
        output.turn(game, &turn)?;
    }

    Ok(())
}

fn play_random(
    output: &mut Output<impl Write>,
    ai_seed: Option<u64>,
    game: &mut Game<ChaCha8Rng>,
) -> Result<()> {
    let mut ai = RandomAi::new(seeded_rng(ai_seed));

    let summary = ai::play_out(game, &mut ai)?;

    match output.format {
        Format::Text => {
            output.board(game)?;
            output.message(&render::describe_play_out(&summary))?;
        }
        Format::Json => writeln!(output.out, "{}", serde_json::to_string(&summary)?)?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(seed = ?args.seed, format = ?args.format, "starting");

    let stdout = io::stdout();
    let mut output = Output {
        colour: stdout.is_terminal(),
        out: stdout.lock(),
        format: args.format,
    };

    let mut game = Game::new(seeded_rng(args.seed));

    match args.mode.unwrap_or(Mode::Interactive) {
        Mode::Interactive => play_interactive(&mut output, io::stdin().lock(), &mut game)?,
        Mode::Random { ai_seed } => play_random(&mut output, ai_seed, &mut game)?,
        Mode::Script { moves } => play_script(&mut output, &moves, &mut game)?,
    }

    output.out.flush().context("failed to flush stdout")
}

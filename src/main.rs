mod app;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serde::Serialize;

use cryptoidle::config::Config;
use cryptoidle::games::blackjack::{DEALER_STANDS_AT, hand_total};
use cryptoidle::games::{Blackjack, CoinFlip, DiceRoll, SpinWheel};
use cryptoidle::games::coin_flip::CoinSide;
use cryptoidle::games::dice::DiceGuess;
use cryptoidle::games::spin_wheel::SPIN_FEE;
use cryptoidle::{Economy, EconomySnapshot, GameError};

use crate::ui::draw;

#[derive(Parser)]
#[command(name = "cryptoidle")]
#[command(about = "Terminal crypto idle game with an arcade and a mock NFT market")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "cryptoidle.toml", global = true)]
    config: PathBuf,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed the session RNG for a reproducible run
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal game (default)
    Play,
    /// Write a default configuration file
    Init,
    /// Play rounds of one game headlessly and print a JSON report
    Simulate {
        game: SimGame,
        #[arg(short, long, default_value_t = 100)]
        rounds: u32,
        #[arg(short, long, default_value_t = 10)]
        bet: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum SimGame {
    CoinFlip,
    Dice,
    Wheel,
    Blackjack,
}

enum Event<I> {
    Input(I),
    Tick,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        if cli.config.exists() {
            anyhow::bail!("{} already exists", cli.config.display());
        }
        Config::create_default(&cli.config)?;
        println!("Wrote default configuration to {}", cli.config.display());
        return Ok(());
    }

    let mut config = Config::load_or_default(&cli.config)?;
    if cli.seed.is_some() {
        config.session.seed = cli.seed;
    }

    match cli.command {
        Some(Commands::Simulate { game, rounds, bet }) => {
            init_logging(&config, cli.verbose, LogSink::Stderr)?;
            let report = simulate(&config, game, rounds, bet)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        _ => {
            init_logging(&config, cli.verbose, LogSink::FileOnly)?;
            info!("Starting cryptoidle v{}", env!("CARGO_PKG_VERSION"));
            let mut app = App::new(&config);
            let mut terminal = setup_terminal()?;
            let res = run_app(&mut terminal, &mut app, config.ui.tick_rate());
            restore_terminal(&mut terminal)?;
            res
        }
    }
}

enum LogSink {
    /// The terminal belongs to the UI: log to the configured file or not at all.
    FileOnly,
    Stderr,
}

fn init_logging(config: &Config, verbosity: u8, sink: LogSink) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });

    match (&config.logging.file, sink) {
        (Some(file), _) => {
            let handle = open_log_file(Path::new(file))?;
            builder.target(env_logger::Target::Pipe(Box::new(handle)));
        }
        (None, LogSink::Stderr) => {
            builder.target(env_logger::Target::Stderr);
        }
        (None, LogSink::FileOnly) => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let input_tx = tx.clone();
    thread::spawn(move || {
        loop {
            if !event::poll(Duration::from_millis(250)).unwrap_or(false) {
                continue;
            }
            match event::read() {
                Ok(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    if input_tx.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => {}
            }
        }
    });

    thread::spawn(move || {
        loop {
            if tx.send(Event::Tick).is_err() {
                break;
            }
            thread::sleep(tick_rate);
        }
    });

    loop {
        terminal.draw(|f| draw(f, app))?;

        match rx.recv()? {
            Event::Input(key) => {
                app.on_key(key, Instant::now());
            }
            Event::Tick => {
                app.on_tick(Instant::now());
            }
        }

        if app.should_quit {
            info!("Quitting");
            break;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    game: SimGame,
    seed: Option<u64>,
    rounds_requested: u32,
    rounds_played: u32,
    wins: u32,
    win_rate: f64,
    starting_igc: u64,
    final_igc: u64,
    net_igc: i64,
    economy: EconomySnapshot,
}

/// Plays `rounds` of `game` back to back, stopping early once the stake is unaffordable.
fn simulate(config: &Config, game: SimGame, rounds: u32, bet: u64) -> Result<SimulationReport> {
    let mut rng = match config.session.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut economy = Economy::new(config.session.economy_settings(), &mut rng);
    let starting_igc = economy.igc();

    let mut coin = CoinFlip::default();
    let mut dice = DiceRoll::default();
    let mut wheel = SpinWheel::default();
    let mut blackjack = Blackjack::default();

    let mut played = 0;
    let mut wins = 0;
    for n in 0..rounds {
        let result = match game {
            SimGame::CoinFlip => {
                let call = if n % 2 == 0 { CoinSide::Heads } else { CoinSide::Tails };
                coin.place_bet(&mut economy, bet, call)
                    .and_then(|_| coin.resolve(&mut economy, &mut rng))
                    .map(|o| o.payout > bet)
            }
            SimGame::Dice => {
                let guess = if n % 2 == 0 { DiceGuess::High } else { DiceGuess::Low };
                dice.place_bet(&mut economy, bet, guess)
                    .and_then(|_| dice.resolve(&mut economy, &mut rng))
                    .map(|o| o.payout > bet)
            }
            SimGame::Wheel => wheel
                .spin(&mut economy)
                .and_then(|_| wheel.resolve(&mut economy, &mut rng))
                .map(|o| o.prize > SPIN_FEE),
            SimGame::Blackjack => play_blackjack_hand(&mut blackjack, &mut economy, bet, &mut rng),
        };
        match result {
            Ok(won) => {
                played += 1;
                if won {
                    wins += 1;
                }
            }
            Err(GameError::Economy(e)) => {
                info!("simulation stopped after {} rounds: {}", played, e);
                break;
            }
            Err(e) => return Err(e).context("simulation round failed"),
        }
    }

    let final_igc = economy.igc();
    Ok(SimulationReport {
        game,
        seed: config.session.seed,
        rounds_requested: rounds,
        rounds_played: played,
        wins,
        win_rate: if played == 0 { 0.0 } else { wins as f64 / played as f64 },
        starting_igc,
        final_igc,
        net_igc: final_igc as i64 - starting_igc as i64,
        economy: economy.snapshot(),
    })
}

/// Dealer-style play: hit below 17, then stand.
fn play_blackjack_hand(
    table: &mut Blackjack,
    economy: &mut Economy,
    bet: u64,
    rng: &mut StdRng,
) -> Result<bool, GameError> {
    if let Some(outcome) = table.deal(economy, bet, rng)? {
        return Ok(outcome.payout > bet);
    }
    while hand_total(table.player_hand()) < DEALER_STANDS_AT {
        if let Some(outcome) = table.hit(economy)? {
            return Ok(outcome.payout > bet);
        }
    }
    let outcome = table.stand(economy)?;
    Ok(outcome.payout > bet)
}

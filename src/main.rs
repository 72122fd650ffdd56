//! Gobang GUI
//!
//! A graphical interface for playing Gobang against the AI, against another
//! player, or for watching the AI play itself.

use anyhow::anyhow;
use clap::{Parser, ValueEnum};

use gobang::engine::{DEFAULT_DEPTH, MAX_DEPTH};
use gobang::ui::GobangApp;
use gobang::{GameMode, GameSettings, GameState, Player};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    HumanHuman,
    HumanAi,
    AiAi,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

impl From<ColorArg> for Player {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Black => Player::Black,
            ColorArg::White => Player::White,
        }
    }
}

/// Command-line arguments. Each flag falls back to an environment variable.
#[derive(Debug, Parser)]
#[command(name = "gobang", version, about = "Gobang with a negamax AI")]
struct Args {
    /// Who controls each side
    #[arg(long, value_enum, env = "GOBANG_MODE", default_value_t = ModeArg::HumanAi)]
    mode: ModeArg,

    /// AI search depth in plies
    #[arg(
        long,
        env = "GOBANG_DEPTH",
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_DEPTH))
    )]
    depth: u8,

    /// Side the human plays in human-ai mode
    #[arg(long, value_enum, env = "GOBANG_HUMAN", default_value_t = ColorArg::Black)]
    human: ColorArg,
}

impl Args {
    fn settings(&self) -> GameSettings {
        let mode = match self.mode {
            ModeArg::HumanHuman => GameMode::HumanHuman,
            ModeArg::HumanAi => GameMode::HumanAi {
                human: self.human.into(),
            },
            ModeArg::AiAi => GameMode::AiAi,
        };
        GameSettings {
            mode,
            depth: self.depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gobang=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let state = GameState::new(args.settings())?;
    tracing::info!(?args, "starting Gobang");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([700.0, 560.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GobangApp::new(cc, state)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}

//! Interactive viewer: watch a random auction unfold one call at a time.
//!
//! Space advances the auction by one random legal call, `r` deals a new
//! board, `q` quits.

use anyhow::Result;
use bridge_cli::hand_suit_lines;
use bridge_core::Seat;
use bridge_env::{AuctionEnv, DdsSolver, Phase};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

#[derive(Parser)]
#[command(name = "auction-tui", about = "Step through random auctions in a TUI")]
struct Args {
    /// Random seed for reproducible runs (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

struct App {
    env: AuctionEnv<DdsSolver>,
    rng: StdRng,
    history: Vec<String>,
    status: String,
}

impl App {
    fn new(seed: u64) -> Result<Self> {
        let mut app = Self {
            env: AuctionEnv::new(DdsSolver),
            rng: StdRng::seed_from_u64(seed),
            history: Vec::new(),
            status: String::new(),
        };
        app.redeal()?;
        Ok(app)
    }

    fn redeal(&mut self) -> Result<()> {
        let obs = self.env.reset(&mut self.rng)?;
        self.history.clear();
        self.status = format!(
            "New deal, dealer {}. Par: N/S {}  E/W {}",
            obs.next_turn, obs.par_scores[0], obs.par_scores[1]
        );
        Ok(())
    }

    fn step_random(&mut self) -> Result<()> {
        if self.env.phase().is_terminal() {
            return Ok(());
        }
        let legal = self.env.legal_actions();
        let action = legal[self.rng.gen_range(0..legal.len())];
        let step = self.env.step(action)?;

        if let Some(seat) = step.observation.turn {
            self.history
                .push(format!("{seat}: {}", bridge_cli::action_name(Some(action))));
        }

        self.status = if step.done {
            let outcome = match self.env.phase() {
                Phase::PassedOut => "Passed out".to_string(),
                _ => self
                    .env
                    .auction()
                    .and_then(|a| a.contract().copied())
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            };
            format!(
                "{outcome}.  Scores N/S {} E/W {}  rewards {:?}",
                step.observation.scores[0], step.observation.scores[1], step.reward
            )
        } else {
            format!(
                "Contract: {}  scores {:?}",
                bridge_cli::action_name(step.observation.last_contract),
                step.observation.scores
            )
        };
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut app = App::new(seed)?;

    let mut terminal = ratatui::init();
    let result = loop {
        if let Err(e) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(e.into());
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                KeyCode::Char('r') => {
                    if let Err(e) = app.redeal() {
                        break Err(e);
                    }
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Err(e) = app.step_random() {
                        break Err(e);
                    }
                }
                _ => {}
            },
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };
    ratatui::restore();
    result
}

fn draw(frame: &mut Frame, app: &App) {
    let [title_area, north_area, middle_area, south_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Min(8),
        Constraint::Length(6),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let [west_area, bidding_area, east_area] = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .areas(middle_area);

    frame.render_widget(
        Paragraph::new("bridge auction — space: next call, r: redeal, q: quit"),
        title_area,
    );

    let hand_text = |seat| {
        app.env
            .board()
            .and_then(|b| b.get_hand(seat))
            .map(|h| hand_suit_lines(h).join("\n"))
            .unwrap_or_default()
    };
    frame.render_widget(
        Paragraph::new(hand_text(Seat::North)).block(Block::bordered().title("North")),
        north_area,
    );
    frame.render_widget(
        Paragraph::new(hand_text(Seat::West)).block(Block::bordered().title("West")),
        west_area,
    );
    frame.render_widget(
        Paragraph::new(hand_text(Seat::East)).block(Block::bordered().title("East")),
        east_area,
    );
    frame.render_widget(
        Paragraph::new(hand_text(Seat::South)).block(Block::bordered().title("South")),
        south_area,
    );

    let recent: Vec<&str> = app
        .history
        .iter()
        .rev()
        .take(middle_area.height.saturating_sub(2) as usize)
        .map(String::as_str)
        .collect();
    let bidding: String = recent.into_iter().rev().collect::<Vec<_>>().join("\n");
    frame.render_widget(
        Paragraph::new(bidding).block(Block::bordered().title("Bidding")),
        bidding_area,
    );

    frame.render_widget(
        Paragraph::new(app.status.as_str()).block(Block::bordered()),
        footer_area,
    );
}

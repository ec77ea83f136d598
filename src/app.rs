use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tracing::{info, warn};

use crate::clock::TickClock;
use crate::game::{GameConfig, GameLoop, InputSource, TickOutcome};
use crate::input::TerminalInput;
use crate::metrics::SessionMetrics;
use crate::render::{CellCanvas, Hud};

/// Interactive game session: owns the game, the canvas it draws into and
/// the terminal it is shown on
pub struct App {
    config: GameConfig,
    game: GameLoop,
    canvas: CellCanvas,
    hud: Hud,
    metrics: SessionMetrics,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = GameLoop::new(&config).context("Invalid game configuration")?;
        let canvas = CellCanvas::new(game.grid(), config.palette.background);

        Ok(Self {
            config,
            game,
            canvas,
            hud: Hud::new(),
            metrics: SessionMetrics::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            grid_width = self.game.grid().width,
            grid_height = self.game.grid().height,
            speed = self.config.speed,
            "game started"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            ticks = self.metrics.ticks,
            rounds = self.metrics.rounds,
            "game stopped"
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut input = TerminalInput::new();
        let mut clock = TickClock::new(self.config.tick_interval());

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        let mut listening = true;

        loop {
            tokio::select! {
                _ = clock.wait() => {}

                result = &mut ctrl_c, if listening => match result {
                    Ok(()) => {
                        info!("interrupt received");
                        break;
                    }
                    Err(err) => {
                        warn!(?err, "cannot listen for interrupts");
                        listening = false;
                        continue;
                    }
                }
            }

            if !self.tick(&mut input) {
                break;
            }

            self.metrics.update();
            terminal
                .draw(|frame| {
                    self.hud
                        .render(frame, &self.canvas, self.game.snake().len(), &self.metrics);
                })
                .context("Failed to draw frame")?;
        }

        Ok(())
    }

    /// Run one game tick into the canvas. Returns false once a quit arrives.
    pub fn tick<I: InputSource + ?Sized>(&mut self, input: &mut I) -> bool {
        match self.game.tick(input, &mut self.canvas) {
            TickOutcome::Quit => false,
            TickOutcome::Continue(event) => {
                self.metrics.record(event);
                true
            }
        }
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    pub fn canvas(&self) -> &CellCanvas {
        &self.canvas
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

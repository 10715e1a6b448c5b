//! Application event loop and key handling.
//!
//! The loop is poll-based: each tick applies any completed generation, draws a
//! frame, and then waits up to 100 ms for a key event. The in-flight generation
//! task is tracked as a `JoinHandle`; Clear (and a re-submit) abort it, which is
//! what closes the stale-token race the widget would otherwise have.

use std::io::{Stdout, stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::core::form::FormState;
use crate::core::theme::{self, Theme};
use crate::core::token::{GeneratedToken, schedule_generation};
use crate::errors::Result;
use crate::tui::ui;

/// Whether the event loop should keep running after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The running application: form state, applied theme, and the channel the
/// delayed generation task reports back on.
pub struct App {
    database: DatabaseConnection,
    form: FormState,
    theme: Theme,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    completion_tx: UnboundedSender<GeneratedToken>,
    completion_rx: UnboundedReceiver<GeneratedToken>,
}

impl App {
    /// Creates the application with the persisted theme already loaded.
    #[must_use]
    pub fn new(database: DatabaseConnection, theme: Theme, delay: Duration) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            database,
            form: FormState::new(),
            theme,
            delay,
            pending: None,
            completion_tx,
            completion_rx,
        }
    }

    /// Runs the widget until the user quits. Owns the terminal for the duration:
    /// raw mode and the alternate screen are restored on the way out even when
    /// the loop errors.
    pub async fn run(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        let mut out = stdout();
        crossterm::execute!(out, crossterm::terminal::EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.run_loop(&mut terminal).await;

        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen,
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            self.apply_completions();

            let form = &self.form;
            let theme = self.theme;
            terminal.draw(|f| ui::render(f, form, theme))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && self.handle_key(key).await? == Flow::Quit
                    {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Applies every completion currently sitting in the channel. The form
    /// itself drops completions that raced a Clear.
    fn apply_completions(&mut self) {
        while let Ok(token) = self.completion_rx.try_recv() {
            self.form.complete(&token);
            self.pending = None;
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<Flow> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(Flow::Quit),
                KeyCode::Char('t') => self.toggle_theme().await?,
                KeyCode::Char('l') => self.clear(),
                _ => {}
            }
            return Ok(Flow::Continue);
        }

        match key.code {
            KeyCode::Esc => return Ok(Flow::Quit),
            KeyCode::Tab | KeyCode::BackTab => self.form.focus_next(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// Submit intent: on valid input, schedules the delayed generation. A
    /// still-pending task from an earlier submit is aborted first so at most
    /// one completion can ever be outstanding.
    fn submit(&mut self) {
        if let Some(meter_no) = self.form.submit() {
            if let Some(handle) = self.pending.take() {
                handle.abort();
            }
            self.pending = Some(schedule_generation(
                meter_no,
                self.delay,
                self.completion_tx.clone(),
            ));
        }
    }

    /// Clear action: cancels an in-flight generation before resetting the form,
    /// so a cleared display is never overwritten by a stale token.
    fn clear(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.form.clear();
    }

    /// Reads the applied theme, flips it, and persists the new preference.
    async fn toggle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.opposite();
        theme::store_theme(&self.database, self.theme).await?;
        tracing::info!("Theme toggled to {}", self.theme.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::form::{STATUS_CLEARED, STATUS_GENERATING, TOKEN_PLACEHOLDER};
    use crate::errors::Result;
    use crate::test_utils::setup_test_db;

    const TEST_DELAY: Duration = Duration::from_millis(10);

    async fn test_app() -> Result<App> {
        let db = setup_test_db().await?;
        Ok(App::new(db, Theme::Light, TEST_DELAY))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_submission(app: &mut App, meter: &str, amount: &str) -> Result<()> {
        for c in meter.chars() {
            app.handle_key(press(KeyCode::Char(c))).await?;
        }
        app.handle_key(press(KeyCode::Tab)).await?;
        for c in amount.chars() {
            app.handle_key(press(KeyCode::Char(c))).await?;
        }
        app.handle_key(press(KeyCode::Enter)).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_schedules_and_completes() -> Result<()> {
        let mut app = test_app().await?;
        type_submission(&mut app, "MTR-1", "25.5").await?;

        assert_eq!(app.form.status, STATUS_GENERATING);
        assert!(app.pending.is_some());

        tokio::time::sleep(TEST_DELAY * 5).await;
        app.apply_completions();

        assert!(app.form.token_display.starts_with("MTR-1-"));
        assert_eq!(app.form.message, "Token for MTR-1 successfully created.");
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_cancels_pending_generation() -> Result<()> {
        let mut app = test_app().await?;
        type_submission(&mut app, "MTR-1", "25.5").await?;
        app.handle_key(ctrl('l')).await?;

        assert!(app.pending.is_none());
        assert_eq!(app.form.status, STATUS_CLEARED);

        // Well past the delay, the cancelled task must not have delivered
        tokio::time::sleep(TEST_DELAY * 5).await;
        app.apply_completions();
        assert_eq!(app.form.token_display, TOKEN_PLACEHOLDER);
        assert!(app.form.message.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_resubmit_replaces_pending_generation() -> Result<()> {
        let mut app = test_app().await?;
        type_submission(&mut app, "MTR-1", "25.5").await?;
        app.handle_key(press(KeyCode::Enter)).await?;

        tokio::time::sleep(TEST_DELAY * 5).await;
        app.apply_completions();

        // Only the second submission's completion arrives
        assert!(app.form.token_display.starts_with("MTR-1-"));
        assert!(app.completion_rx.try_recv().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_submit_schedules_nothing() -> Result<()> {
        let mut app = test_app().await?;
        // Amount only, meter number left empty
        app.handle_key(press(KeyCode::Tab)).await?;
        for c in "25.5".chars() {
            app.handle_key(press(KeyCode::Char(c))).await?;
        }
        app.handle_key(press(KeyCode::Enter)).await?;

        assert!(app.pending.is_none());
        assert_eq!(app.form.token_display, TOKEN_PLACEHOLDER);
        Ok(())
    }

    #[tokio::test]
    async fn test_ctrl_t_toggles_and_persists_theme() -> Result<()> {
        let mut app = test_app().await?;
        app.handle_key(ctrl('t')).await?;

        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(theme::load_theme(&app.database).await?, Theme::Dark);

        app.handle_key(ctrl('t')).await?;
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(theme::load_theme(&app.database).await?, Theme::Light);
        Ok(())
    }

    #[tokio::test]
    async fn test_esc_and_ctrl_c_quit() -> Result<()> {
        let mut app = test_app().await?;
        assert_eq!(app.handle_key(press(KeyCode::Esc)).await?, Flow::Quit);
        assert_eq!(app.handle_key(ctrl('c')).await?, Flow::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Tab)).await?, Flow::Continue);
        Ok(())
    }
}

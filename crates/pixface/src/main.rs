mod clock;
mod engine;
mod logging;

use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use pixface_config::Config;
use pixface_core::FaceTime;
use pixface_render::{FaceOptions, FaceState};
use ratatui::{
    DefaultTerminal, Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

use crate::clock::SystemClock;
use crate::engine::Engine;
use crate::logging::LoggingConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = pixface_config::config_path()?;
    let config = Config::load_from(&config_path)?;
    logging::init_logging(LoggingConfig {
        env_filter: Some(config.log_level.clone()),
        target: Some(logging::open_log_file(&logging::default_log_path()?)?),
    });
    log::info!("starting with config {}", config_path.display());

    let terminal = ratatui::init();
    crossterm::execute!(stdout(), EnableFocusChange)?;
    let result = App::new(config, Some(config_path)).run(terminal);
    if let Err(err) = crossterm::execute!(stdout(), DisableFocusChange) {
        log::warn!("failed to disable focus reporting: {err}");
    }
    ratatui::restore();
    result
}

/// The watch face application: engine state, settings and the frame cache.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Where settings changes are written. `None` keeps them in memory.
    config_path: Option<PathBuf>,
    engine: Engine,
    clock: SystemClock,
    face: FaceState,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            running: false,
            engine: Engine::new(config.ambient_timeout(), Instant::now()),
            clock: SystemClock::new(config.utc_offset()),
            face: FaceState::new(),
            config,
            config_path,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let timeout = self.tick(&mut terminal)?;
            self.handle_crossterm_events(timeout)?;
        }
        log::info!("exiting");
        Ok(())
    }

    /// One timer step: apply the idle timeout, draw if visible, and return
    /// how long to wait before the next step.
    fn tick<B>(&mut self, terminal: &mut Terminal<B>) -> color_eyre::Result<Duration>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
    {
        self.engine.on_idle_check(Instant::now());
        let reading = self.clock.now();
        if self.engine.is_visible() {
            terminal.draw(|frame| self.render(frame, reading.time))?;
        }
        Ok(self.engine.next_wake(self.clock.now().epoch_millis, Instant::now()))
    }

    fn options(&self) -> FaceOptions {
        FaceOptions {
            theme: self.config.theme,
            time_format: self.config.time_format,
            show_seconds: self.config.show_seconds,
            low_bit_ambient: self.config.low_bit_ambient,
        }
    }

    /// Renders the face, with the key help below it while interactive.
    fn render(&mut self, frame: &mut Frame, time: FaceTime) {
        let mode = self.engine.mode();
        let options = self.options();
        let [face_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        self.face.render(frame, face_area, time, mode, &options);

        if !mode.is_ambient() {
            let color = self.config.theme.color();
            let help = Line::from(vec![
                "q".bold().fg(color),
                " quit  ".dark_gray(),
                "a".bold().fg(color),
                " ambient  ".dark_gray(),
                "t".bold().fg(color),
                " 12/24h  ".dark_gray(),
                "s".bold().fg(color),
                " seconds  ".dark_gray(),
                "c".bold().fg(color),
                " color".dark_gray(),
            ])
            .centered();
            frame.render_widget(help, help_area);
        }
    }

    /// Waits up to `timeout` for a terminal event and applies it.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            self.on_event(event::read()?);
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::FocusGained => self.engine.on_visibility_changed(true),
            Event::FocusLost => self.engine.on_visibility_changed(false),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if matches!(
            (key.modifiers, key.code),
            (_, KeyCode::Esc | KeyCode::Char('q'))
                | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
        ) {
            self.quit();
            return;
        }

        // A key press while ambient only wakes the face.
        let was_ambient = self.engine.mode().is_ambient();
        self.engine.on_user_input(Instant::now());
        if was_ambient {
            return;
        }

        match key.code {
            KeyCode::Char('a') => {
                self.engine.on_ambient_mode_changed(true);
            }
            KeyCode::Char('t') => {
                self.config.time_format = self.config.time_format.toggle();
                self.persist();
            }
            KeyCode::Char('c') => {
                self.config.theme = self.config.theme.next();
                self.persist();
            }
            KeyCode::Char('s') => {
                self.config.show_seconds = !self.config.show_seconds;
                self.persist();
            }
            _ => {}
        }
    }

    /// Save settings changes. Failure is logged, not fatal.
    fn persist(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        match self.config.save_to(path) {
            Ok(()) => log::debug!("saved settings to {}", path.display()),
            Err(err) => log::warn!("failed to save settings: {err:#}"),
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixface_core::{ColorTheme, DisplayMode, TimeFormat};
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        let mut app = App::new(Config::default(), None);
        app.running = true;
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(!a.running);

        let mut a = app();
        a.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!a.running);
    }

    #[test]
    fn test_setting_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('t'));
        press(&mut a, KeyCode::Char('c'));
        press(&mut a, KeyCode::Char('s'));
        assert_eq!(a.config.time_format, TimeFormat::TwelveHour);
        assert_eq!(a.config.theme, ColorTheme::Green);
        assert!(a.options().show_seconds);
    }

    #[test]
    fn test_key_in_ambient_only_wakes() {
        let mut a = app();
        press(&mut a, KeyCode::Char('a'));
        assert_eq!(a.engine.mode(), DisplayMode::Ambient);

        press(&mut a, KeyCode::Char('t'));
        assert_eq!(a.engine.mode(), DisplayMode::Interactive);
        assert_eq!(a.config.time_format, TimeFormat::TwentyFourHour);

        // Quit still works from ambient.
        press(&mut a, KeyCode::Char('a'));
        press(&mut a, KeyCode::Esc);
        assert!(!a.running);
    }

    fn blank(terminal: &Terminal<TestBackend>) -> bool {
        terminal.backend().buffer().content().iter().all(|cell| cell.symbol() == " ")
    }

    #[test]
    fn test_focus_gates_drawing() {
        let mut a = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        a.tick(&mut terminal).unwrap();
        assert!(!blank(&terminal));

        a.on_event(Event::FocusLost);
        terminal.clear().unwrap();
        a.tick(&mut terminal).unwrap();
        assert!(blank(&terminal));

        a.on_event(Event::FocusGained);
        a.tick(&mut terminal).unwrap();
        assert!(!blank(&terminal));
        assert_eq!(terminal.backend().buffer()[(20, 0)].symbol(), "▀");
    }

    #[test]
    fn test_persist_writes_config() {
        let dir = std::env::temp_dir().join(format!("pixface-app-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut a = App::new(Config::default(), Some(path.clone()));
        press(&mut a, KeyCode::Char('c'));
        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.theme, ColorTheme::Green);
        let _ = std::fs::remove_dir_all(dir);
    }
}

use crate::args::MinesweeperArgs;
use crate::marker::Marker;
use crate::mine_placer::MinePlacer;
use crate::session::{DETONATION_MESSAGE, GameSession, Turn, WIN_MESSAGE};
use crate::util::Cursor;
use color_eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::style::Color::*;
use ratatui::{
    DefaultTerminal, Frame,
    style::Stylize,
    text::Line,
    widgets::{Block, Paragraph},
};

pub fn main(args: &MinesweeperArgs) -> Result<()> {
    let (width, height, mines) = args.dimensions_or_default();
    let layout = MinePlacer::new(args.rng()).place(width, height, mines)?;
    let session = GameSession::new(width, height, layout)?;

    let terminal = ratatui::init();
    let result = App::new(session).run(terminal);
    ratatui::restore();
    result
}

/// Full screen front end: the board, a cursor and a status line.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    session: GameSession,
    cursor: Cursor,
    last_turn: Option<Turn>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            running: false,
            session,
            cursor: (0, 0),
            last_turn: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        std::io::stdout().execute(event::EnableMouseCapture)?;

        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        std::io::stdout().execute(event::DisableMouseCapture)?;
        log::info!("tui closed after {} moves", self.session.moves());
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let width = self.session.width();
        let height = self.session.height();
        let (x, y) = self.cursor;

        let title = Line::from("Minesweeper!").bold().light_blue().centered();
        let bottom = match self.last_turn {
            Some(Turn::Lost) => Line::from(DETONATION_MESSAGE).bold().light_red().centered(),
            Some(Turn::Won) => Line::from(WIN_MESSAGE).bold().light_green().centered(),
            _ => Line::from(format!(
                "#{} ({x},{y}) {width}x{height},{}",
                self.session.moves() + 1,
                self.session.mine_count()
            ))
            .centered(),
        };

        let area = frame
            .area()
            .clamp(Rect::new(0, 0, width.saturating_add(2), height.saturating_add(2)));
        frame.render_widget(
            Paragraph::new("")
                .block(Block::bordered().title(title).title_bottom(bottom))
                .centered(),
            area,
        );
        if area.width < 3 || area.height < 3 {
            return;
        }

        let canvas = self.session.draw();
        for j in 0..(area.height - 2).min(height) {
            for i in 0..(area.width - 2).min(width) {
                let (c, bg, fg) = marker_style(canvas.get((i, j)));
                let position = Position::new(area.x + 1 + i, area.y + 1 + j);
                if let Some(cell) = frame.buffer_mut().cell_mut(position) {
                    cell.set_char(c).set_fg(fg).set_bg(bg);
                }
            }
        }

        if self.session.is_running() {
            frame.set_cursor_position(Position::new(area.x + 1 + x, area.y + 1 + y));
        }
    }

    fn handle_crossterm_events(&mut self) -> Result<()> {
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(m) => {
                if let MouseEventKind::Down(MouseButton::Left) = m.kind {
                    self.on_click(m.column, m.row)
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('x' | ' ') | KeyCode::Enter) => self.reveal(),
            (_, KeyCode::Left) => self.move_cursor(-1, 0),
            (_, KeyCode::Right) => self.move_cursor(1, 0),
            (_, KeyCode::Up) => self.move_cursor(0, -1),
            (_, KeyCode::Down) => self.move_cursor(0, 1),
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        if !(1..=self.session.width()).contains(&column)
            || !(1..=self.session.height()).contains(&row)
        {
            return;
        }
        self.cursor = (column - 1, row - 1);
        self.reveal();
    }

    fn move_cursor(&mut self, dx: i16, dy: i16) {
        let (x, y) = &mut self.cursor;
        *x = x
            .saturating_add_signed(dx)
            .min(self.session.width().saturating_sub(1));
        *y = y
            .saturating_add_signed(dy)
            .min(self.session.height().saturating_sub(1));
    }

    fn reveal(&mut self) {
        if !self.session.is_running() {
            return;
        }
        match self.session.play(self.cursor) {
            Ok(turn) => self.last_turn = Some(turn),
            Err(err) => log::warn!("ignored reveal at {:?}: {err}", self.cursor),
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn marker_style(marker: Option<Marker>) -> (char, Color, Color) {
    const NUM_COLOR: Color = Black;

    match marker {
        None => (' ', Reset, Reset),
        Some(Marker::Unknown) => ('#', Reset, Reset),
        Some(Marker::Known | Marker::Empty) => (' ', Black, Reset),
        Some(Marker::Count(n)) => {
            let bg = match n {
                1 => LightBlue,
                2 => LightCyan,
                3 => LightGreen,
                4 => LightYellow,
                5 => LightMagenta,
                6 => Gray,
                7 => White,
                _ => LightRed,
            };
            (Marker::Count(n).symbol(), bg, NUM_COLOR)
        }
        Some(Marker::Mine) => ('*', Black, LightRed),
        Some(Marker::Exploded) => ('X', LightRed, Black),
        Some(Marker::Flag) => ('!', LightRed, LightYellow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::collections::BTreeSet;

    fn app(mines: &[Cursor]) -> App {
        let session = GameSession::new(3, 3, mines.iter().copied().collect::<BTreeSet<_>>());
        App::new(session.unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn board(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (1..4u16)
            .map(|y| (1..4u16).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn cursor_stays_on_the_board() {
        let mut app = app(&[(1, 1)]);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, (0, 0));
        for _ in 0..5 {
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, (2, 2));
    }

    #[test]
    fn space_reveals_under_the_cursor() {
        let mut app = app(&[(1, 1)]);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.last_turn, Some(Turn::Continue));
        assert_eq!(board(&mut app), "#1#\n###\n###");
    }

    #[test]
    fn clicking_a_mine_loses_and_reveals_the_board() {
        let mut app = app(&[(0, 0)]);
        app.on_click(1, 1);
        assert_eq!(app.last_turn, Some(Turn::Lost));
        assert!(!app.session.is_running());
        assert_eq!(board(&mut app), "X1 \n11 \n   ");

        // later input is ignored
        app.on_click(3, 3);
        assert_eq!(app.session.moves(), 1);
    }

    #[test]
    fn clicks_on_the_border_are_ignored() {
        let mut app = app(&[(0, 0)]);
        app.on_click(0, 0);
        app.on_click(4, 2);
        assert_eq!(app.session.moves(), 0);
    }

    #[test]
    fn clicks_reach_the_last_column_of_the_widest_board() {
        let session = GameSession::new(u16::MAX, 1, BTreeSet::new()).unwrap();
        let mut app = App::new(session);
        app.on_click(u16::MAX, 2);
        assert_eq!(app.session.moves(), 0);
        app.on_click(u16::MAX, 1);
        assert_eq!(app.cursor, (u16::MAX - 1, 0));
        assert_eq!(app.session.moves(), 1);
    }

    #[test]
    fn q_quits() {
        let mut app = app(&[(0, 0)]);
        app.running = true;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}

use crate::args::MinesweeperArgs;
use crate::canvas::Canvas;
use crate::marker::Marker;
use crate::mine_placer::MinePlacer;
use crate::session::{GameSession, MoveSource, Screen};
use crate::util::Point;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::style::{Color, Stylize};
use std::io::{BufRead, IsTerminal, Write};
use std::str::FromStr;

pub fn main(args: &MinesweeperArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let color = args.color && stdout.is_terminal();
    let mut console = Console::new(stdin.lock(), stdout.lock(), color);

    let (width, height, mines) = match args.dimensions() {
        Some(dimensions) => dimensions,
        None => console.read_setup()?,
    };
    let layout = MinePlacer::new(args.rng()).place(width, height, mines)?;
    let mut session = GameSession::new(width, height, layout)?;
    let ending = session.run(&mut console)?;
    log::info!("console game finished: {ending:?}");
    Ok(())
}

/// Line oriented front end: whitespace separated numbers in, board rows out.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
            line: String::new(),
        }
    }

    /// Next line of input, `None` once it is exhausted.
    fn read_line(&mut self) -> Result<Option<&str>> {
        self.output.flush()?;
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim()))
    }

    pub fn read_setup(&mut self) -> Result<(u16, u16, u32)> {
        write!(self.output, "width height mines = ")?;
        let line = self
            .read_line()?
            .ok_or_else(|| eyre!("input ended before the board setup"))?;
        let [width, height, mines] = parse_fields::<u32, 3>(line, ["width", "height", "mines"])?;
        let width = u16::try_from(width).wrap_err("width is too large")?;
        let height = u16::try_from(height).wrap_err("height is too large")?;
        Ok((width, height, mines))
    }

    fn write_marker(&mut self, marker: Option<Marker>) -> Result<()> {
        let Some(marker) = marker else {
            write!(self.output, " ")?;
            return Ok(());
        };
        if self.color {
            write!(self.output, "{}", marker.symbol().with(marker_color(marker)))?;
        } else {
            write!(self.output, "{marker}")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn next_move(&mut self, move_number: u32) -> Result<Option<Point>> {
        write!(self.output, "move #{move_number}: x y = ")?;
        let Some(line) = self.read_line()? else {
            writeln!(self.output)?;
            return Ok(None);
        };
        let [x, y] = parse_fields::<i64, 2>(line, ["x", "y"])?;
        Ok(Some((x, y)))
    }
}

impl<R: BufRead, W: Write> Screen for Console<R, W> {
    fn render(&mut self, canvas: &Canvas) -> Result<()> {
        for row in canvas.rows() {
            for &marker in row {
                self.write_marker(marker)?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::Count(1) => Color::Blue,
        Marker::Count(2) => Color::Cyan,
        Marker::Count(3) => Color::Green,
        Marker::Count(4) => Color::Yellow,
        Marker::Count(5) => Color::Magenta,
        Marker::Count(6) => Color::Grey,
        Marker::Count(7) => Color::White,
        Marker::Count(_) => Color::Red,
        Marker::Mine | Marker::Exploded | Marker::Flag => Color::Red,
        Marker::Empty | Marker::Unknown | Marker::Known => Color::DarkGrey,
    }
}

/// Parses the first `N` whitespace separated fields of `line`.
fn parse_fields<T, const N: usize>(line: &str, names: [&str; N]) -> Result<[T; N]>
where
    T: FromStr + Copy + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut fields = line.split_whitespace();
    let mut values = [T::default(); N];
    for (value, name) in values.iter_mut().zip(names) {
        let field = fields
            .next()
            .ok_or_else(|| eyre!("missing {name} in {line:?}"))?;
        *value = field
            .parse()
            .wrap_err_with(|| format!("{name} must be a whole number, got {field:?}"))?;
    }
    Ok(values)
}

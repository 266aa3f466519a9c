use std::{collections::VecDeque, fmt, fs, ops::Deref, path::Path, str::FromStr};

use tracing::debug;

use super::{
    common::{CellField, Heading, Position},
    error::VacuumError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    cells: Vec<CellField>,
}
impl Deref for Row {
    type Target = Vec<CellField>;

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

/// Rectangular field of open cells and obstacles.
///
/// Row 0 is the top row. A `Grid` always has at least one row and one
/// column, and every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    dimension: (usize, usize),
}

impl Grid {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, VacuumError> {
        let first = rows.first().ok_or(VacuumError::EmptyGrid)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(VacuumError::EmptyRow);
        }

        let mut parsed = Vec::with_capacity(rows.len());
        for (y, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(VacuumError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            let cells = line
                .chars()
                .enumerate()
                .map(|(x, c)| {
                    CellField::from_char(c).ok_or(VacuumError::UnexpectedCell { cell: c, x, y })
                })
                .collect::<Result<Vec<_>, _>>()?;
            parsed.push(Row { cells });
        }

        debug!("grid parsed: {} columns, {} rows", width, parsed.len());

        Ok(Self {
            dimension: (width, parsed.len()),
            rows: parsed,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VacuumError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| VacuumError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// `(columns, rows)`
    pub fn dimension(&self) -> (usize, usize) {
        self.dimension
    }

    pub fn cell(&self, position: &Position) -> Option<&CellField> {
        self.rows.get(position.y)?.get(position.x)
    }

    pub fn is_obstacle(&self, position: &Position) -> bool {
        matches!(self.cell(position), Some(CellField::Obstacle))
    }

    /// Whether the neighbour of `position` towards `heading` is inside
    /// the grid and not an obstacle.
    pub fn is_open(&self, position: &Position, heading: Heading) -> bool {
        let (cols, rows) = self.dimension;
        let blocked_by_edge = match heading {
            Heading::Right => position.x + 1 >= cols,
            Heading::Left => position.x == 0,
            Heading::Down => position.y + 1 >= rows,
            Heading::Up => position.y == 0,
            Heading::None => return false,
        };
        if blocked_by_edge {
            return false;
        }

        !self.is_obstacle(&position.advance(heading))
    }

    pub fn open_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| matches!(cell, CellField::Open))
            .count()
    }

    /// Number of open cells connected to the origin by 4-directional moves.
    pub fn reachable_cells(&self) -> usize {
        if self.is_obstacle(&Position::ORIGIN) {
            return 0;
        }

        let (cols, rows) = self.dimension;
        let mut seen = vec![false; cols * rows];
        let mut queue = VecDeque::from([Position::ORIGIN]);
        seen[0] = true;
        let mut count = 0;

        while let Some(position) = queue.pop_front() {
            count += 1;
            for heading in Heading::ROTATION {
                if !self.is_open(&position, heading) {
                    continue;
                }
                let next = position.advance(heading);
                let index = next.y * cols + next.x;
                if !seen[index] {
                    seen[index] = true;
                    queue.push_back(next);
                }
            }
        }

        count
    }
}

impl FromStr for Grid {
    type Err = VacuumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        Self::from_rows(lines.as_slice())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row.iter() {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

use tracing::{debug, info};

use super::{
    common::{Heading, Position},
    error::VacuumError,
    grid::Grid,
};

/// Picks the first heading, starting at `heading` and turning right,
/// whose neighbouring cell is open. Gives `Heading::None` after a full
/// rotation without success.
pub fn resolve_heading(grid: &Grid, position: &Position, heading: Heading) -> Heading {
    let mut candidate = heading;
    for _ in 0..Heading::ROTATION.len() {
        if candidate == Heading::None {
            break;
        }
        if grid.is_open(position, candidate) {
            return candidate;
        }
        candidate = candidate.turn_right();
    }
    Heading::None
}

/// Number of distinct cells the vacuum cleans starting from the top-left
/// corner heading right.
pub fn clean(grid: &Grid) -> Result<usize, VacuumError> {
    Cleaner::new(grid).run().map(|report| report.cleaned)
}

pub fn clean_rows<S: AsRef<str>>(rows: &[S]) -> Result<usize, VacuumError> {
    clean(&Grid::from_rows(rows)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The origin has no open neighbour.
    NoMove,
    /// The vacuum is back on `position` about to leave towards `heading`
    /// again.
    CycleDetected { position: Position, heading: Heading },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub cleaned: usize,
    pub iterations: usize,
    pub termination: Termination,
    /// Every cleaned cell with the heading it was last left in, in the
    /// order the cells were first reached.
    pub visits: Vec<(Position, Heading)>,
}

/// Last departure heading per cell, indexed by `y * cols + x`.
struct VisitLog {
    cols: usize,
    headings: Vec<Option<Heading>>,
    order: Vec<Position>,
}

impl VisitLog {
    fn new((cols, rows): (usize, usize)) -> Self {
        Self {
            cols,
            headings: vec![None; cols * rows],
            order: vec![],
        }
    }

    fn get(&self, position: &Position) -> Option<Heading> {
        self.headings[position.y * self.cols + position.x]
    }

    fn record(&mut self, position: Position, heading: Heading) {
        let slot = &mut self.headings[position.y * self.cols + position.x];
        if slot.is_none() {
            self.order.push(position);
        }
        *slot = Some(heading);
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn into_visits(self) -> Vec<(Position, Heading)> {
        let cols = self.cols;
        let headings = self.headings;
        self.order
            .into_iter()
            .filter_map(|p| headings[p.y * cols + p.x].map(|h| (p, h)))
            .collect()
    }
}

pub struct Cleaner<'a> {
    grid: &'a Grid,
    max_iterations: usize,
}

impl<'a> Cleaner<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        let (cols, rows) = grid.dimension();
        Self {
            grid,
            max_iterations: 4 * cols * rows + 1,
        }
    }

    /// Stops the run with `VacuumError::IterationLimit` once more than
    /// `max_iterations` decisions have been made.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn run(&self) -> Result<CleanReport, VacuumError> {
        let grid = self.grid;
        if grid.is_obstacle(&Position::ORIGIN) {
            return Err(VacuumError::BlockedOrigin(Position::ORIGIN));
        }

        info!("cleaning {:?} grid", grid.dimension());

        let mut log = VisitLog::new(grid.dimension());
        let mut position = Position::ORIGIN;
        let mut heading = Heading::Right;
        let mut iterations = 0;

        loop {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(VacuumError::IterationLimit(self.max_iterations));
            }

            let next_heading = resolve_heading(grid, &position, heading);
            debug!("{} intending {} -> {}", position, heading, next_heading);

            if next_heading == Heading::None {
                info!("no move from {}, cleaned 1 cell", position);
                return Ok(CleanReport {
                    cleaned: 1,
                    iterations,
                    termination: Termination::NoMove,
                    visits: vec![(position, Heading::None)],
                });
            }

            if log.get(&position) == Some(next_heading) {
                let cleaned = log.len();
                info!(
                    "cycle at {} heading {} after {} iterations, cleaned {} cells",
                    position, next_heading, iterations, cleaned
                );
                return Ok(CleanReport {
                    cleaned,
                    iterations,
                    termination: Termination::CycleDetected {
                        position,
                        heading: next_heading,
                    },
                    visits: log.into_visits(),
                });
            }

            log.record(position, next_heading);
            position = position.advance(next_heading);
            heading = next_heading;
        }
    }
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellField {
    Open,
    Obstacle,
}

impl CellField {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellField::Open),
            'X' => Some(CellField::Obstacle),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CellField::Open => '.',
            CellField::Obstacle => 'X',
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves one cell towards `heading`.
    ///
    /// The heading must already be known to lead to an in-bounds cell,
    /// `Heading::None` leaves the position untouched.
    pub fn advance(&self, heading: Heading) -> Position {
        let (dx, dy) = heading.offset();
        Position {
            x: (self.x as isize + dx) as usize,
            y: (self.y as isize + dy) as usize,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction the vacuum intends to leave a cell in.
///
/// `None` marks a cell with no legal departure at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Down,
    Left,
    Up,
    None,
}

impl Heading {
    /// Cardinal headings in the order the vacuum turns through them.
    pub const ROTATION: [Heading; 4] = [Heading::Right, Heading::Down, Heading::Left, Heading::Up];

    pub fn turn_right(self) -> Heading {
        match self {
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
            Heading::Up => Heading::Right,
            Heading::None => Heading::None,
        }
    }

    /// Step vector as `(dx, dy)`, with `y` growing downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::Right => (1, 0),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Up => (0, -1),
            Heading::None => (0, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::Right => "right",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Up => "up",
            Heading::None => "none",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellField, Heading, Position};

    #[test]
    fn test_turn_right_cycles_through_all_headings() {
        let mut heading = Heading::Right;
        for expected in [Heading::Down, Heading::Left, Heading::Up, Heading::Right] {
            heading = heading.turn_right();
            assert_eq!(heading, expected);
        }
        assert_eq!(Heading::None.turn_right(), Heading::None);
    }

    #[test]
    fn test_rotation_follows_turn_right() {
        for (i, heading) in Heading::ROTATION.iter().enumerate() {
            assert_eq!(heading.turn_right(), Heading::ROTATION[(i + 1) % 4]);
        }
    }

    #[test]
    fn test_advance() {
        let position = Position::new(2, 2);
        assert_eq!(position.advance(Heading::Right), Position::new(3, 2));
        assert_eq!(position.advance(Heading::Down), Position::new(2, 3));
        assert_eq!(position.advance(Heading::Left), Position::new(1, 2));
        assert_eq!(position.advance(Heading::Up), Position::new(2, 1));
        assert_eq!(position.advance(Heading::None), position);
    }

    #[test]
    fn test_cell_field_chars() {
        assert_eq!(CellField::from_char('.'), Some(CellField::Open));
        assert_eq!(CellField::from_char('X'), Some(CellField::Obstacle));
        assert_eq!(CellField::from_char('w'), None);
        assert_eq!(CellField::Obstacle.as_char(), 'X');
    }
}

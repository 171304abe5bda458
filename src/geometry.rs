use anyhow::bail;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn anticlockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }
}

/// A grid coordinate; `y` grows downwards, matching the row order of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Point::new(self.x, self.y - 1),
            Direction::East => Point::new(self.x + 1, self.y),
            Direction::South => Point::new(self.x, self.y + 1),
            Direction::West => Point::new(self.x - 1, self.y),
        }
    }

    pub fn neighbors(self) -> [Point; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }

    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// A rectangular character map stored row-major as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let rows = input.trim().lines().map(str::as_bytes).collect_vec();
        let width = rows.first().map_or(0, |row| row.len());
        if let Some((ri, row)) = rows.iter().find_position(|row| row.len() != width) {
            bail!("row {} has width {}, expected {}", ri, row.len(), width);
        }
        Ok(Grid { width, height: rows.len(), cells: rows.concat() })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn get(&self, point: Point) -> Option<u8> {
        self.index(point).map(|ix| self.cells[ix])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut u8> {
        let ix = self.index(point)?;
        self.cells.get_mut(ix)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i32, y as i32)))
    }

    pub fn positions(&self, cell: u8) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&point| self.get(point) == Some(cell))
    }

    pub fn find(&self, cell: u8) -> Option<Point> {
        self.positions(cell).next()
    }
}

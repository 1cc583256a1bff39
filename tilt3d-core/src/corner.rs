/// Corner ring and traversal order for tilt poses
use serde::{Deserialize, Serialize};

/// One of the eight positions a surface can lean toward, arranged
/// clockwise around the rectangle starting at the top edge midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopMedium,
    TopRight,
    MediumRight,
    BottomRight,
    BottomMedium,
    BottomLeft,
    MediumLeft,
    TopLeft,
}

/// Traversal direction over the corner ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Fixed clockwise ring order. Traversal goes through explicit indices
/// into this table, never through declaration order.
const CLOCKWISE_RING: [Corner; 8] = [
    Corner::TopMedium,
    Corner::TopRight,
    Corner::MediumRight,
    Corner::BottomRight,
    Corner::BottomMedium,
    Corner::BottomLeft,
    Corner::MediumLeft,
    Corner::TopLeft,
];

impl Corner {
    /// Position of this corner in the clockwise ring (0..8).
    pub fn index(self) -> usize {
        match self {
            Corner::TopMedium => 0,
            Corner::TopRight => 1,
            Corner::MediumRight => 2,
            Corner::BottomRight => 3,
            Corner::BottomMedium => 4,
            Corner::BottomLeft => 5,
            Corner::MediumLeft => 6,
            Corner::TopLeft => 7,
        }
    }

    /// Corner sitting at ring position `index % 8`.
    pub fn from_index(index: usize) -> Corner {
        CLOCKWISE_RING[index % 8]
    }

    /// Neighboring corner one ring step away in `direction`.
    pub fn next(self, direction: Direction) -> Corner {
        match direction {
            Direction::Clockwise => Corner::from_index(self.index() + 1),
            Direction::CounterClockwise => Corner::from_index(self.index() + 7),
        }
    }

    /// Full ring starting at this corner, walked in `direction`.
    ///
    /// Counter-clockwise output is the reverse traversal of the same
    /// ring, rotated to start at this corner.
    pub fn ring_from(self, direction: Direction) -> [Corner; 8] {
        let mut ring = [self; 8];
        for step in 1..8 {
            ring[step] = ring[step - 1].next(direction);
        }
        ring
    }

    /// Ring with the starting corner appended again at the end, closing
    /// the loop for a seamlessly repeating animation (9 entries).
    pub fn closed_ring_from(self, direction: Direction) -> [Corner; 9] {
        let mut closed = [self; 9];
        closed[..8].copy_from_slice(&self.ring_from(direction));
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..8 {
            assert_eq!(Corner::from_index(index).index(), index);
        }
        assert_eq!(Corner::from_index(8), Corner::TopMedium);
    }

    #[test]
    fn test_ring_covers_all_corners_once() {
        for start in 0..8 {
            let from = Corner::from_index(start);
            for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                let ring = from.ring_from(direction);
                assert_eq!(ring[0], from);
                for corner in CLOCKWISE_RING {
                    assert_eq!(ring.iter().filter(|&&c| c == corner).count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_counter_clockwise_is_reverse_traversal() {
        let cw = Corner::BottomLeft.ring_from(Direction::Clockwise);
        let ccw = Corner::BottomLeft.ring_from(Direction::CounterClockwise);
        // Same start, then mirrored order around the ring.
        assert_eq!(ccw[0], cw[0]);
        for step in 1..8 {
            assert_eq!(ccw[step], cw[8 - step]);
        }
    }

    #[test]
    fn test_closed_ring_starts_and_ends_at_from() {
        let closed = Corner::MediumRight.closed_ring_from(Direction::Clockwise);
        assert_eq!(closed.len(), 9);
        assert_eq!(closed[0], Corner::MediumRight);
        assert_eq!(closed[8], Corner::MediumRight);
    }
}

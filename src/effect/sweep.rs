//! Back-and-forth motion shared by the chase effects

/// Direction of travel along a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards the last LED
    #[default]
    Forward,
    /// Towards the first LED
    Backward,
}

/// A position that bounces between the two ends of a span
///
/// The position is clamped onto the boundary when a step would overshoot,
/// so the direction always flips exactly at `0` and `span - 1`.
#[derive(Debug, Clone)]
pub struct Bounce {
    position: usize,
    direction: Direction,
    step: usize,
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Bounce {
    /// Create a bounce starting at the first position, moving forward
    pub const fn new(step: usize) -> Self {
        Self {
            position: 0,
            direction: Direction::Forward,
            step: if step == 0 { 1 } else { step },
        }
    }

    /// Current position
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Current direction of travel
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Positions moved per frame
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Current position clamped into a span of `span` positions
    pub fn position_in(&self, span: usize) -> usize {
        self.position.min(span.saturating_sub(1))
    }

    /// Move one step within a span of `span` positions
    ///
    /// Returns `true` if the direction flipped on this step.
    pub fn advance(&mut self, span: usize) -> bool {
        if span <= 1 {
            self.position = 0;
            return false;
        }

        let last = span - 1;
        let position = self.position.min(last);
        match self.direction {
            Direction::Forward => {
                let next = position + self.step;
                if next >= last {
                    self.position = last;
                    self.direction = Direction::Backward;
                    return true;
                }
                self.position = next;
            }
            Direction::Backward => {
                if position <= self.step {
                    self.position = 0;
                    self.direction = Direction::Forward;
                    return true;
                }
                self.position = position - self.step;
            }
        }
        false
    }

    /// Return to the first position, moving forward
    pub fn reset(&mut self) {
        self.position = 0;
        self.direction = Direction::Forward;
    }
}

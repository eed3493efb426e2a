use std::rc::Rc;
use yew::functional::Reducible;

// Release offsets at or inside the threshold are ignored, the comparison is strict.
pub const DRAG_THRESHOLD_PX: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel needs at least one item");
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, direction: Direction) {
        self.index = match direction {
            Direction::Forward => (self.index + 1) % self.len,
            Direction::Backward => (self.index + self.len - 1) % self.len,
        };
    }

    // Dot indices are in range by construction; the modulo keeps the
    // invariant even if a caller slips.
    pub fn select(&mut self, index: usize) {
        debug_assert!(index < self.len, "selection out of range");
        self.index = index % self.len;
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Advance(direction) => self.advance(direction),
            CarouselAction::Select(index) => self.select(index),
        }
    }
}

// Dragging left pulls the next item in, dragging right brings the previous back.
pub fn drag_direction(offset_x: f64, threshold: f64) -> Option<Direction> {
    if offset_x < -threshold {
        Some(Direction::Forward)
    } else if offset_x > threshold {
        Some(Direction::Backward)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Advance(Direction),
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_returns_to_start_after_full_cycle() {
        let mut carousel = Carousel::new(5);
        for _ in 0..5 {
            carousel.advance(Direction::Forward);
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn index_stays_in_range_over_many_advances() {
        let mut carousel = Carousel::new(3);
        for _ in 0..100 {
            carousel.advance(Direction::Forward);
            assert!(carousel.index() < carousel.len());
        }
    }

    #[test]
    fn backward_from_zero_wraps_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn three_forward_then_one_backward() {
        let mut carousel = Carousel::new(5);
        carousel.advance(Direction::Forward);
        carousel.advance(Direction::Forward);
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.index(), 3);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn select_jumps_directly() {
        let mut carousel = Carousel::new(5);
        carousel.select(4);
        assert_eq!(carousel.index(), 4);
        carousel.select(1);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn single_item_carousel_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.index(), 0);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn release_past_threshold_steps_once() {
        assert_eq!(
            drag_direction(-50.0, DRAG_THRESHOLD_PX),
            Some(Direction::Forward)
        );
        assert_eq!(
            drag_direction(50.0, DRAG_THRESHOLD_PX),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn release_within_threshold_is_ignored() {
        assert_eq!(drag_direction(10.0, DRAG_THRESHOLD_PX), None);
        assert_eq!(drag_direction(-10.0, DRAG_THRESHOLD_PX), None);
        assert_eq!(drag_direction(0.0, DRAG_THRESHOLD_PX), None);
    }

    #[test]
    fn release_exactly_at_threshold_is_ignored() {
        assert_eq!(drag_direction(40.0, DRAG_THRESHOLD_PX), None);
        assert_eq!(drag_direction(-40.0, DRAG_THRESHOLD_PX), None);
    }

    #[test]
    fn reducer_applies_actions_to_current_state() {
        let state = Rc::new(Carousel::new(5));
        let state = state.reduce(CarouselAction::Advance(Direction::Forward));
        let state = state.reduce(CarouselAction::Advance(Direction::Forward));
        assert_eq!(state.index(), 2);
        let state = state.reduce(CarouselAction::Select(0));
        assert_eq!(state.index(), 0);
        let state = state.reduce(CarouselAction::Advance(Direction::Backward));
        assert_eq!(state.index(), 4);
    }
}

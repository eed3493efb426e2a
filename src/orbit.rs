pub const ORBIT_STEP_DEG: f64 = 0.25;
pub const ORBIT_TICK_MS: u32 = 30;

pub const ORBIT_RADIUS_RATIO: f64 = 0.28;
pub const ORBIT_RADIUS_MIN_PX: f64 = 180.0;
pub const ORBIT_RADIUS_MAX_PX: f64 = 340.0;

pub fn wrap_deg(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

// Slots sit evenly around the circle, slot 0 at the reference angle.
pub fn slot_angle(slot: usize, count: usize) -> f64 {
    debug_assert!(count > 0, "orbit needs at least one slot");
    slot as f64 * 360.0 / count as f64
}

pub fn position(radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (radius * rad.cos(), radius * rad.sin())
}

pub fn radius_for_width(width: f64) -> f64 {
    (width * ORBIT_RADIUS_RATIO).clamp(ORBIT_RADIUS_MIN_PX, ORBIT_RADIUS_MAX_PX)
}

// Freezing holds the current angle in place; thawing resumes from it.
// A spin built with `frozen` never moves until someone thaws it, which
// nothing does when the environment asks for reduced motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    angle: f64,
    step: f64,
    frozen: bool,
}

impl Spin {
    pub fn new(step: f64) -> Self {
        Self {
            angle: 0.0,
            step,
            frozen: false,
        }
    }

    pub fn frozen(step: f64) -> Self {
        Self {
            angle: 0.0,
            step,
            frozen: true,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn tick(&mut self) {
        if self.frozen {
            return;
        }
        self.angle = wrap_deg(self.angle + self.step);
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn thaw(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn slots_are_evenly_spaced() {
        assert!(close(slot_angle(0, 3), 0.0));
        assert!(close(slot_angle(1, 3), 120.0));
        assert!(close(slot_angle(2, 3), 240.0));
        assert!(close(slot_angle(3, 4), 270.0));
    }

    #[test]
    fn position_matches_polar_form_at_rest() {
        let count = 3;
        for slot in 0..count {
            let theta = slot_angle(slot, count);
            let (x, y) = position(340.0, theta);
            assert!(close(x, 340.0 * theta.to_radians().cos()));
            assert!(close(y, 340.0 * theta.to_radians().sin()));
        }
    }

    #[test]
    fn wrap_keeps_angle_in_range() {
        assert!(close(wrap_deg(360.0), 0.0));
        assert!(close(wrap_deg(720.5), 0.5));
        assert!(close(wrap_deg(-90.0), 270.0));
        assert!(close(wrap_deg(359.75), 359.75));
    }

    #[test]
    fn tick_advances_by_step_and_wraps() {
        let mut spin = Spin::new(0.25);
        spin.tick();
        assert!(close(spin.angle(), 0.25));
        // 1440 quarter-degree ticks make one full turn
        for _ in 0..1439 {
            spin.tick();
        }
        assert!(close(spin.angle(), 0.0));
    }

    #[test]
    fn frozen_spin_never_moves() {
        let mut spin = Spin::frozen(0.25);
        for _ in 0..1000 {
            spin.tick();
        }
        assert!(close(spin.angle(), 0.0));
    }

    #[test]
    fn freeze_holds_angle_and_thaw_resumes_from_it() {
        let mut spin = Spin::new(0.25);
        for _ in 0..10 {
            spin.tick();
        }
        let held = spin.angle();
        spin.freeze();
        spin.tick();
        spin.tick();
        assert!(close(spin.angle(), held));
        spin.thaw();
        spin.tick();
        assert!(close(spin.angle(), held + 0.25));
    }

    #[test]
    fn radius_follows_width_within_clamp() {
        assert!(close(radius_for_width(500.0), ORBIT_RADIUS_MIN_PX));
        assert!(close(radius_for_width(1000.0), 280.0));
        assert!(close(radius_for_width(2000.0), ORBIT_RADIUS_MAX_PX));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    Visible,
    Exiting,
}

// Out-of-order calls are no-ops, so a stray timer wakeup cannot push the
// cycle somewhere it should not be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    phase: Phase,
}

impl Transition {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn begin_enter(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Exiting) {
            self.phase = Phase::Entering;
        }
    }

    pub fn settle(&mut self) {
        if self.phase == Phase::Entering {
            self.phase = Phase::Visible;
        }
    }

    pub fn begin_exit(&mut self) {
        if self.phase == Phase::Visible {
            self.phase = Phase::Exiting;
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "card-idle",
            Phase::Entering => "card-entering",
            Phase::Visible => "card-visible",
            Phase::Exiting => "card-exiting",
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_runs_in_order() {
        let mut fx = Transition::new();
        assert_eq!(fx.phase(), Phase::Idle);
        fx.begin_enter();
        assert_eq!(fx.phase(), Phase::Entering);
        fx.settle();
        assert_eq!(fx.phase(), Phase::Visible);
        fx.begin_exit();
        assert_eq!(fx.phase(), Phase::Exiting);
        fx.begin_enter();
        assert_eq!(fx.phase(), Phase::Entering);
    }

    #[test]
    fn out_of_order_calls_leave_phase_unchanged() {
        let mut fx = Transition::new();
        fx.settle();
        assert_eq!(fx.phase(), Phase::Idle);
        fx.begin_exit();
        assert_eq!(fx.phase(), Phase::Idle);

        fx.begin_enter();
        fx.begin_enter();
        assert_eq!(fx.phase(), Phase::Entering);
        fx.begin_exit();
        assert_eq!(fx.phase(), Phase::Entering);

        fx.settle();
        fx.settle();
        assert_eq!(fx.phase(), Phase::Visible);
        fx.begin_enter();
        assert_eq!(fx.phase(), Phase::Visible);
    }

    #[test]
    fn each_phase_maps_to_its_own_class() {
        let mut fx = Transition::new();
        assert_eq!(fx.css_class(), "card-idle");
        fx.begin_enter();
        assert_eq!(fx.css_class(), "card-entering");
        fx.settle();
        assert_eq!(fx.css_class(), "card-visible");
        fx.begin_exit();
        assert_eq!(fx.css_class(), "card-exiting");
    }
}

/// Counts run ticks and fires once every `interval` of them.
///
/// Independent of the simulator's frame counter: it only decides when a
/// snapshot pass is worth paying for.
#[derive(Debug, Clone)]
pub(crate) struct RenderCadence {
    interval: u32,
    counter: u32,
}

impl RenderCadence {
    pub(crate) fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            counter: 0,
        }
    }

    /// Count one tick; `true` on every `interval`-th.
    pub(crate) fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub(crate) fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Two render targets used ping-pong so the post-effect pass can read the
/// previous frame alongside the current one.
///
/// Generic over the target handle so the bookkeeping stays host-side; in the
/// renderer `T` is a `wgpu::TextureView`.
#[derive(Debug)]
pub struct FrameHistory<T> {
    slots: [Slot<T>; 2],
    current: usize,
}

#[derive(Debug)]
struct Slot<T> {
    target: T,
    has_contents: bool,
}

impl<T> Slot<T> {
    fn empty(target: T) -> Self {
        Self {
            target,
            has_contents: false,
        }
    }
}

impl<T> FrameHistory<T> {
    pub fn new(first: T, second: T) -> Self {
        Self {
            slots: [Slot::empty(first), Slot::empty(second)],
            current: 0,
        }
    }

    /// Replaces both targets, e.g. after a surface resize. Neither holds a
    /// frame afterwards.
    pub fn reset(&mut self, first: T, second: T) {
        self.slots = [Slot::empty(first), Slot::empty(second)];
        self.current = 0;
        log::debug!("Frame history reset");
    }

    /// The target the next geometry pass renders into.
    pub fn current(&self) -> &T {
        &self.slots[self.current].target
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// `(current, previous)` sampling inputs for the post-effect draw.
    /// Until the other slot has been rendered, `previous` is `current`.
    pub fn inputs(&self) -> (&T, &T) {
        let previous = &self.slots[1 - self.current];
        let current = &self.slots[self.current].target;
        if previous.has_contents {
            (current, &previous.target)
        } else {
            (current, current)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.slots[1 - self.current].has_contents
    }

    /// Marks the current target as rendered and flips to the other one.
    pub fn advance(&mut self) {
        self.slots[self.current].has_contents = true;
        self.current = 1 - self.current;
    }
}

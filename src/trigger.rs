/// A flag that lets its animation run once per page load.
#[derive(Debug, Default, Clone)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` on the first call only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

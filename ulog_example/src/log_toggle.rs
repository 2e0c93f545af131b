//! Start/stop state of the example program, with callbacks that run when the state changes.

type ChangeCallback = Box<dyn Fn(bool) + Send + Sync>;

/// Whether logging is started. Callbacks registered with `on_change` are called with the
/// new value every time it actually changes, in the order they were registered.
#[derive(Default)]
pub struct LogToggle {
    started: bool,
    callbacks: Vec<ChangeCallback>,
}

impl LogToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn set_started(&mut self, value: bool) {
        if self.started == value {
            return;
        }

        self.started = value;
        for callback in &self.callbacks {
            callback(value);
        }
    }

    /// Flips the state, returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_started(!self.started);
        self.started
    }

    pub fn on_change<F>(&mut self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }
}

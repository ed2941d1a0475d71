//! A process wrapper whose dependency is passed in at construction.

/// The real dependency. Returns its input unchanged.
pub fn call(val: i64) -> i64 {
    val
}

/// Runs an injected `fn(i64) -> i64`.
#[derive(Debug, Clone, Copy)]
pub struct Process {
    call: fn(i64) -> i64,
}

impl Process {
    pub fn new(call: fn(i64) -> i64) -> Self {
        Self { call }
    }

    pub fn run(&self, val: i64) -> i64 {
        (self.call)(val)
    }
}

impl Default for Process {
    fn default() -> Self {
        Self::new(call)
    }
}

/// Runs `val` through the real dependency.
pub fn run(val: i64) -> i64 {
    Process::default().run(val)
}

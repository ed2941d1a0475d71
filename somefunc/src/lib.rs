//! A client that delegates to a pluggable [`Caller`].
//!
//! The client only ever sees `&dyn Caller`, so the concrete implementation can
//! be swapped (for example for a test double) without touching [`Client`].

/// Something that turns one integer into another.
///
/// Implementations must be total: no panics, no errors. Thread safety is up
/// to the implementation; add `Sync` where a caller is shared across threads.
pub trait Caller {
    fn call(&self, val: i64) -> i64;
}

/// The real caller. Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExampleCaller;

impl Caller for ExampleCaller {
    fn call(&self, val: i64) -> i64 {
        val
    }
}

/// Holds a borrowed caller and forwards every [`Client::run`] to it.
///
/// The caller is not owned, so one instance can back several clients.
#[derive(Clone, Copy)]
pub struct Client<'a> {
    func_caller: &'a dyn Caller,
}

impl<'a> Client<'a> {
    pub fn new(func_caller: &'a dyn Caller) -> Self {
        Self { func_caller }
    }

    pub fn run(&self, val: i64) -> i64 {
        self.func_caller.call(val)
    }
}

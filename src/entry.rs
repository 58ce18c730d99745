//! Default generator and entry point functions

use crate::generator::StdSystemTime;
use crate::{Uuid, V7Generator};
use rand::rngs::ThreadRng;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<V7Generator<ThreadRng, StdSystemTime>> = Default::default();
}

/// Generates a UUIDv7 object.
///
/// This function employs a thread-local generator and guarantees the
/// per-thread monotonic order of UUIDs generated within the same millisecond:
/// each identifier a thread produces is strictly greater than its
/// predecessor under unsigned big-endian 128-bit comparison, even when the
/// system clock stands still or goes backwards. No order is guaranteed
/// across threads. On Unix, this function resets the generator when the
/// process ID changes (i.e. upon process forks) to prevent collisions across
/// processes.
///
/// # Examples
///
/// ```rust
/// let uuid = muuid7::uuid7();
/// println!("{uuid}"); // e.g. "0189d2f0c5a17c05b219566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid7() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
            g.replace(Default::default());
        }

        g.borrow_mut().generate()
    })
}

/// Generates a UUIDv7 encoded in the 32-digit lowercase hexadecimal string
/// representation.
///
/// Use this to quickly get a new UUIDv7 as a string. Note the intentionally
/// compact form: 32 hexadecimal digits in byte order, without the dashes of
/// the canonical 8-4-4-4-12 presentation.
///
/// # Examples
///
/// ```rust
/// let s = muuid7::uuid7_string();
/// assert_eq!(s.len(), 32);
/// ```
pub fn uuid7_string() -> String {
    uuid7().into()
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon
    /// process forks), returning true if ThreadRng is reseeded or false
    /// otherwise.
    pub fn reseed_thread_rng_upon_pid_change() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid == last_pid.replace(pid) {
                false
            } else {
                // As of rand 0.8.5, up to fifteen u32 values need to be consumed before reseeding;
                // see rand::rngs::adapter::ReseedingRng docs for details
                let _: [u32; 15] = rand::random();
                true
            }
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() -> bool {
        false
    }
}

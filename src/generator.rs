//! UUIDv7 generator and related types.

use crate::Uuid;
use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum value of the 18-bit sequence counter.
const MAX_COUNTER: u32 = 0x3ffff;

/// Represents a UUIDv7 generator that encapsulates an 18-bit sequence counter
/// and guarantees the monotonic order of UUIDs generated within the same
/// millisecond.
///
/// This type provides the interface to customize the random number generator
/// and timestamp source of a UUIDv7 generator. It also helps control the
/// scope of guaranteed order of the generated UUIDs: each instance guarantees
/// the monotonic order of the UUIDs it generates, so wrapping one instance in
/// a mutex extends the guarantee across threads, while the thread-local
/// instances behind [`uuid7()`](crate::uuid7) scope it per thread.
///
/// # Examples
///
/// ```rust
/// use muuid7::generator::{StdSystemTime, V7Generator};
///
/// let mut g = V7Generator::new(rand::rngs::OsRng, StdSystemTime);
/// println!("{}", g.generate());
/// ```
///
/// # Counter and clock handling
///
/// On each call, [`generate`](V7Generator::generate) compares the clock
/// reading against the last timestamp observed:
///
/// - If the clock moved forward, the counter is reseeded from random data
///   with its most significant bit cleared, leaving 2¹⁷ increments of
///   headroom within the new millisecond.
/// - If the clock stood still or moved backwards, the identifier is issued
///   under the last timestamp observed and the counter is incremented. When
///   the counter overflows its 18 bits, the timestamp is incremented ahead
///   of the wall clock to open a fresh counter window.
///
/// Either way the emitted identifiers are strictly increasing, and the
/// recorded timestamp never regresses. The operation never blocks or waits
/// for the clock.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R, C = StdSystemTime> {
    /// Last `unix_ts_ms` under which an identifier was issued.
    prev_timestamp: u64,

    /// 18-bit sequence counter, stored in the low bits.
    counter: u32,

    /// Random number generator used by the generator.
    rng: R,

    /// Timestamp source used by the generator.
    clock: C,
}

impl<R: RngCore, C: UnixMillis> V7Generator<R, C> {
    /// Creates a generator instance with the specified random number
    /// generator and timestamp source.
    pub fn new(rng: R, clock: C) -> Self {
        Self {
            prev_timestamp: 0,
            counter: 0,
            rng,
            clock,
        }
    }

    /// Generates a new UUIDv7 object.
    pub fn generate(&mut self) -> Uuid {
        let mut ts = self.clock.unix_ts_ms();
        let mut bytes = [0u8; 16];

        if ts <= self.prev_timestamp {
            // The clock stood still or went backwards; issue the identifier
            // under the last timestamp observed and bump the counter.
            self.counter += 1;
            if self.counter > MAX_COUNTER {
                // Counter rollover: advance the timestamp ahead of the wall
                // clock to reserve a fresh 18-bit counter window.
                self.counter = 0;
                self.prev_timestamp += 1;
            }
            ts = self.prev_timestamp;

            // fill var and rand_b with random data
            self.fill_random_block(&mut bytes[8..]);

            // fill rand_a and the upper bits of rand_b with counter data
            bytes[6] = (self.counter >> 14) as u8;
            bytes[7] = (self.counter >> 6) as u8;
            bytes[8] = self.counter as u8 & 0x3f;
        } else {
            // fill ver, rand_a, var, and rand_b with random data
            self.fill_random_block(&mut bytes[6..]);

            // keep the most significant bit of the reseeded counter at zero,
            // guarding against rollover within the same millisecond
            bytes[6] &= 0xf7;

            self.counter = u32::from(bytes[6] & 0x0f) << 14
                | u32::from(bytes[7]) << 6
                | u32::from(bytes[8] & 0x3f);
            self.prev_timestamp = ts;
        }

        // fill unix_ts_ms
        bytes[0] = (ts >> 40) as u8;
        bytes[1] = (ts >> 32) as u8;
        bytes[2] = (ts >> 24) as u8;
        bytes[3] = (ts >> 16) as u8;
        bytes[4] = (ts >> 8) as u8;
        bytes[5] = ts as u8;

        // fill ver (top four bits are 0, 1, 1, 1)
        bytes[6] = (bytes[6] & 0x0f) | 0x70;

        // fill var (top two bits are 1, 0)
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Uuid::from(bytes)
    }

    /// Fills `block` with pseudo-random data, drawing one 64-bit word from
    /// the random number generator per eight bytes of output and copying its
    /// little-endian bytes into place.
    fn fill_random_block(&mut self, block: &mut [u8]) {
        for chunk in block.chunks_mut(8) {
            let word = self.rng.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7
/// object for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use muuid7::generator::{StdSystemTime, V7Generator};
///
/// V7Generator::new(rand::thread_rng(), StdSystemTime)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<R: RngCore, C: UnixMillis> Iterator for V7Generator<R, C> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore, C: UnixMillis> std::iter::FusedIterator for V7Generator<R, C> {}

/// Interface representing timestamp sources that return the Unix timestamp
/// in milliseconds.
///
/// The source does not have to be monotonic; [`V7Generator`] tolerates
/// clocks that stand still or go backwards. Sub-millisecond precision is
/// ignored.
pub trait UnixMillis {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// Default [`UnixMillis`] source that uses [`std::time::SystemTime`].
#[derive(Clone, Debug, Default)]
pub struct StdSystemTime;

impl UnixMillis for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

//! A monotonic UUID Version 7 generator with per-thread state
//!
//! ```rust
//! let uuid = muuid7::uuid7();
//! println!("{}", uuid); // e.g. "0189d2f0c5a17c05b219566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [draft-ietf-uuidrev-rfc4122bis](https://datatracker.ietf.org/doc/html/draft-ietf-uuidrev-rfc4122bis#name-uuid-version-7).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  counter  |                     rand                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 18-bit `counter` field (12 bits in `rand_a` and the upper 6 bits of
//!   `rand_b`) accommodates the sequence counter that ensures the monotonic
//!   order of IDs generated within the same millisecond. The counter is
//!   incremented by one for each new ID generated within the same timestamp
//!   and is reseeded from random data whenever the `unix_ts_ms` moves
//!   forward, with its most significant bit cleared to leave headroom
//!   against same-millisecond rollover.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 56 `rand` bits are filled with pseudo-random data.
//!
//! In the rare circumstances where the 18-bit `counter` field reaches the
//! maximum value and can no more be incremented within the same timestamp,
//! this crate increments the `unix_ts_ms`; therefore, the `unix_ts_ms` may
//! run ahead of the real-time clock under sustained same-millisecond load.
//! The same branch absorbs system clock rollbacks: the generator keeps
//! emitting identifiers under the last timestamp observed until the clock
//! catches up, so the per-thread monotonic order is never broken.
//!
//! Each operating-system thread owns one generator, lazily created on the
//! first call and reached through a thread-local slot; no locks are taken on
//! the hot path. Identifiers produced by a single thread are strictly
//! increasing under unsigned big-endian 128-bit comparison. No order is
//! guaranteed across threads; cross-thread uniqueness rests on the random
//! tail.
//!
//! # String form
//!
//! [`Uuid`] renders as 32 lowercase hexadecimal characters with no dashes,
//! deliberately departing from the canonical 8-4-4-4-12 presentation:
//!
//! ```rust
//! let s = muuid7::uuid7_string();
//! assert_eq!(s.len(), 32);
//! assert!(s.bytes().all(|c| c.is_ascii_hexdigit()));
//! ```
//!
//! # Crate features
//!
//! - `serde` enables serialization/deserialization of [`Uuid`] via serde.
//! - `uuid` enables lossless conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::Uuid;

pub mod generator;
#[doc(inline)]
pub use generator::V7Generator;

mod entry;
pub use entry::{uuid7, uuid7_string};

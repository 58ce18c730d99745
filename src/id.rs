use std::{fmt, ops, str};

/// Represents a UUID as a 16-byte big-endian array.
///
/// This type is write-only by design: it is produced by a generator and
/// rendered as text, but never parsed back into its fields. The derived
/// ordering compares the byte array lexicographically, which coincides with
/// the unsigned big-endian 128-bit order the monotonicity guarantee is
/// stated in.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 32-digit lowercase hexadecimal representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// Note that this crate intentionally renders identifiers as 32
    /// hexadecimal digits in byte order, without the dashes of the canonical
    /// 8-4-4-4-12 UUID presentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use muuid7::Uuid;
    ///
    /// let x = Uuid::from([
    ///     0x01, 0x80, 0xae, 0x59, 0x07, 0x8c, 0x7b, 0x80,
    ///     0xb1, 0x13, 0x2f, 0xe1, 0x4a, 0x61, 0x5f, 0xb3,
    /// ]);
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "0180ae59078c7b80b1132fe14a615fb3");
    /// assert_eq!(format!("{}", y), "0180ae59078c7b80b1132fe14a615fb3");
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 32];
        let mut buf_iter = buffer.iter_mut();
        for e in self.0 {
            *buf_iter.next().unwrap() = DIGITS[(e >> 4) as usize];
            *buf_iter.next().unwrap() = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        HexStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 32-digit lowercase hexadecimal representation without
    /// separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated
/// 32-digit string representation.
struct HexStr([u8; 32]);

impl ops::Deref for HexStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for HexStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    /// Decodes the 32-digit hexadecimal transport form back into bytes.
    ///
    /// This is a serde transport concern only; the crate exposes no public
    /// parsing surface.
    fn decode_hex(src: &str) -> Option<Uuid> {
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for e in dst.iter_mut() {
            let hi = iter.next()?.to_digit(16)? as u8;
            let lo = iter.next()?.to_digit(16)? as u8;
            *e = (hi << 4) | lo;
        }
        match iter.next() {
            None => Some(Uuid(dst)),
            Some(_) => None,
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            decode_hex(value)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &"32 hex digits"))
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000000000000000000000000000", &[0u8; 16]),
                (
                    "0180ae59078c7b80b1132fe14a615fb3",
                    &[
                        1, 128, 174, 89, 7, 140, 123, 128, 177, 19, 47, 225, 74, 97, 95, 179,
                    ],
                ),
                (
                    "0180ae5907907f6d897d79370b09dd07",
                    &[
                        1, 128, 174, 89, 7, 144, 127, 109, 137, 125, 121, 55, 11, 9, 221, 7,
                    ],
                ),
                (
                    "0180ae5907917e79880402ce2b5bc8d2",
                    &[
                        1, 128, 174, 89, 7, 145, 126, 121, 136, 4, 2, 206, 43, 91, 200, 210,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = Uuid::from(*bytes);
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Uuid;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000000000000000000000000000"),
            ([0xff; 16], "ffffffffffffffffffffffffffffffff"),
            (
                [
                    0x01, 0x7f, 0x22, 0xe2, 0x79, 0xb0, 0x7c, 0xc3, 0x98, 0xc4, 0xdc, 0x0c, 0x0c,
                    0x07, 0x39, 0x8f,
                ],
                "017f22e279b07cc398c4dc0c0c07398f",
            ),
            (
                [
                    0x01, 0x80, 0xae, 0x59, 0x07, 0x8c, 0x7b, 0x80, 0xb1, 0x13, 0x2f, 0xe1, 0x4a,
                    0x61, 0x5f, 0xb3,
                ],
                "0180ae59078c7b80b1132fe14a615fb3",
            ),
        ]
    }

    /// Encodes prepared cases correctly
    #[test]
    fn encodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(&e.encode() as &str, *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(&e.encode().to_string(), text);
            assert_eq!(&String::from(e), text);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), bytes);
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(e.as_bytes(), bytes);
            assert_eq!(e.as_ref(), &bytes[..]);
            assert_eq!(u128::from(e), u128::from_be_bytes(*bytes));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(uuid::Uuid::from(e)), e);
        }
    }

    /// Orders byte arrays as unsigned big-endian 128-bit integers
    #[test]
    fn orders_byte_arrays_as_unsigned_big_endian_integers() {
        let mut prev = Uuid::from([0x00; 16]);
        for e in [
            Uuid::from([
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x01,
            ]),
            Uuid::from([
                0x01, 0x7f, 0x22, 0xe2, 0x79, 0xb0, 0x7c, 0xc3, 0x98, 0xc4, 0xdc, 0x0c, 0x0c,
                0x07, 0x39, 0x8f,
            ]),
            Uuid::from([
                0x01, 0x7f, 0x22, 0xe2, 0x79, 0xb0, 0x7c, 0xc3, 0x98, 0xc4, 0xdc, 0x0c, 0x0c,
                0x07, 0x39, 0x90,
            ]),
            Uuid::from([0xff; 16]),
        ] {
            assert!(prev < e);
            assert!(u128::from(prev) < u128::from(e));
            prev = e;
        }
    }
}

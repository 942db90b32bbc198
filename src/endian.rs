//! Byte-order control.
//!
//! [`Endianness`] selects how fixed-width integers are decoded from and
//! encoded to byte arrays. Conversions are explicit named methods dispatching
//! to the `from_be_bytes` / `from_le_bytes` / `from_ne_bytes` family.

/// Byte order for fixed-width integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Big-endian byte order.
    Big,
    /// Little-endian byte order.
    Little,
    /// The platform's native byte order.
    Native,
}

macro_rules! endian_conversions {
    ($($read:ident / $write:ident: $ty:ty),+ $(,)?) => {
        impl Endianness {
            $(
                /// Decodes the integer from a fixed-size array in this byte order.
                pub fn $read(self, bytes: [u8; size_of::<$ty>()]) -> $ty {
                    match self {
                        Endianness::Big => <$ty>::from_be_bytes(bytes),
                        Endianness::Little => <$ty>::from_le_bytes(bytes),
                        Endianness::Native => <$ty>::from_ne_bytes(bytes),
                    }
                }

                /// Encodes the integer to a fixed-size array in this byte order.
                pub fn $write(self, value: $ty) -> [u8; size_of::<$ty>()] {
                    match self {
                        Endianness::Big => value.to_be_bytes(),
                        Endianness::Little => value.to_le_bytes(),
                        Endianness::Native => value.to_ne_bytes(),
                    }
                }
            )+
        }
    };
}

endian_conversions! {
    read_u16 / write_u16: u16,
    read_u32 / write_u32: u32,
    read_u64 / write_u64: u64,
    read_i16 / write_i16: i16,
    read_i32 / write_i32: i32,
    read_i64 / write_i64: i64,
}

use std::fmt;
use num_enum::TryFromPrimitive;

/// Variant name of `raw` in `T`, or the raw value in hex when it names none.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Last path segment of a type name, e.g. `Color` for `my_crate::wire::Color`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Hex dump for logs and error messages.
pub fn fmt_bytes(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_enum::{IntoPrimitive, TryFromPrimitive};

    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
    enum Kind {
        Alpha = 1,
        Beta = 0x0201,
    }

    #[test]
    fn names_known_and_hex_unknown() {
        assert_eq!(enum_name_or_hex::<Kind>(1), "Alpha");
        assert_eq!(enum_name_or_hex::<Kind>(0x0201), "Beta");
        assert_eq!(enum_name_or_hex::<Kind>(0x7f), "0x7f");
    }

    #[test]
    fn short_names() {
        assert_eq!(short_type_name::<Kind>(), "Kind");
        assert_eq!(short_type_name::<u32>(), "u32");
    }

    #[test]
    fn hex_dump() {
        assert_eq!(fmt_bytes(&[0xde, 0xad, 0x01]), "dead01");
    }
}

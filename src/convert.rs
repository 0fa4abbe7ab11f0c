// Copyright 2020 CoD Team

//! Integer conversion utilities.

use crate::int::Integer;

macro_rules! impl_from_native {
    ($($t: ty),* $(,)?) => {
        $(
        impl From<$t> for Integer {
            /// Converts through the decimal text form, re-using the
            /// validation and canonicalization of the parse path.
            #[inline]
            fn from(value: $t) -> Self {
                value
                    .to_string()
                    .parse()
                    .expect("native integers format as valid decimal strings")
            }
        }
        )*
    };
}

impl_from_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

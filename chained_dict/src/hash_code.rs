// SPDX-License-Identifier: MIT OR Apache-2.0
//! 32-bit hash codes for table keys.
//!
//! The table's compression function works on a signed 32-bit code, so keys
//! supply one explicitly through [`HashCode`] instead of going through a
//! `Hasher`. Integer and string codes are fixed functions of the value, which
//! keeps bucket placement reproducible across runs and platforms.

use std::{
    hash::{Hash, Hasher},
    rc::Rc,
    sync::Arc,
};

use rustc_hash::FxHasher;

/// A key that can produce a signed 32-bit hash code.
///
/// Implementations must agree with `Eq`: equal values return equal codes.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

#[allow(clippy::cast_possible_truncation)] // folding 64 bits into 32 is the point
const fn fold64(v: u64) -> i32 {
    (v ^ (v >> 32)) as i32
}

macro_rules! impl_small_int {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                #[inline]
                fn hash_code(&self) -> i32 {
                    i32::from(*self)
                }
            }
        )*
    };
}

impl_small_int!(i8, i16, i32, u8, u16);

impl HashCode for u32 {
    #[inline]
    fn hash_code(&self) -> i32 {
        i32::from_ne_bytes(self.to_ne_bytes())
    }
}

impl HashCode for i64 {
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn hash_code(&self) -> i32 {
        fold64(*self as u64)
    }
}

impl HashCode for u64 {
    #[inline]
    fn hash_code(&self) -> i32 {
        fold64(*self)
    }
}

impl HashCode for usize {
    #[inline]
    fn hash_code(&self) -> i32 {
        fold64(*self as u64)
    }
}

impl HashCode for isize {
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn hash_code(&self) -> i32 {
        fold64(*self as u64)
    }
}

impl HashCode for bool {
    #[inline]
    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl HashCode for char {
    #[inline]
    #[allow(clippy::cast_possible_wrap)] // code points top out at 0x10FFFF
    fn hash_code(&self) -> i32 {
        u32::from(*self) as i32
    }
}

impl HashCode for str {
    /// Polynomial hash `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code units.
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl HashCode for String {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Box<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Rc<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Arc<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<A: HashCode, B: HashCode> HashCode for (A, B) {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.0.hash_code().wrapping_mul(31).wrapping_add(self.1.hash_code())
    }
}

/// Adapter giving any `T: Hash` a [`HashCode`] through `FxHasher`.
///
/// Use it for label types that already derive `Hash` and have no natural
/// 32-bit code of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hashed<T>(pub T);

impl<T> Hashed<T> {
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Hash> HashCode for Hashed<T> {
    fn hash_code(&self) -> i32 {
        let mut hasher = FxHasher::default();
        self.0.hash(&mut hasher);
        fold64(hasher.finish())
    }
}

impl<T> From<T> for Hashed<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

//! Cache Key Module
//!
//! Structural keys built from the parameters that distinguish one lookup from
//! another. Two keys are equal when their parts are equal, in order.

use std::fmt;

// == Key Part ==
/// One distinguishing parameter of a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Null,
    Bool(bool),
    Int(i64),
    /// Normalized bit pattern of an `f64`, see [`KeyPart::float`]
    Float(u64),
    Str(String),
}

impl KeyPart {
    /// Builds a float part.
    ///
    /// `0.0` and `-0.0` map to the same part, as do all NaN payloads.
    pub fn float(value: f64) -> Self {
        let bits = if value == 0.0 {
            0.0f64.to_bits()
        } else if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            value.to_bits()
        };
        KeyPart::Float(bits)
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Null => f.write_str("null"),
            KeyPart::Bool(b) => write!(f, "{}", b),
            KeyPart::Int(i) => write!(f, "{}", i),
            KeyPart::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            KeyPart::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::Str(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::Str(value)
    }
}

impl From<&String> for KeyPart {
    fn from(value: &String) -> Self {
        KeyPart::Str(value.clone())
    }
}

impl From<bool> for KeyPart {
    fn from(value: bool) -> Self {
        KeyPart::Bool(value)
    }
}

impl From<i32> for KeyPart {
    fn from(value: i32) -> Self {
        KeyPart::Int(value.into())
    }
}

impl From<u32> for KeyPart {
    fn from(value: u32) -> Self {
        KeyPart::Int(value.into())
    }
}

impl From<i64> for KeyPart {
    fn from(value: i64) -> Self {
        KeyPart::Int(value)
    }
}

impl From<f32> for KeyPart {
    fn from(value: f32) -> Self {
        KeyPart::float(value.into())
    }
}

impl From<f64> for KeyPart {
    fn from(value: f64) -> Self {
        KeyPart::float(value)
    }
}

impl<T: Into<KeyPart>> From<Option<T>> for KeyPart {
    fn from(value: Option<T>) -> Self {
        value.map_or(KeyPart::Null, Into::into)
    }
}

// == Cache Key ==
/// Ordered composite of key parts.
///
/// A single-argument lookup yields a one-part key; multi-argument lookups keep
/// every argument, so `(18000.0, 21000.0)` and `(21000.0, 18000.0)` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CacheKey(Vec<KeyPart>);

impl CacheKey {
    /// Builds a key from its parts in order.
    pub fn of<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<KeyPart>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", part)?;
        }
        f.write_str("]")
    }
}

impl From<&str> for CacheKey {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<String> for CacheKey {
    fn from(value: String) -> Self {
        Self(vec![value.into()])
    }
}

/// Builds a [`CacheKey`] from any number of parameters convertible to [`KeyPart`].
///
/// ```
/// use region_cache::cache_key;
///
/// let key = cache_key!(18000.0, 21000.0);
/// assert_eq!(key.to_string(), "[18000,21000]");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($($part:expr),* $(,)?) => {{
        let parts: ::std::vec::Vec<$crate::cache::KeyPart> =
            ::std::vec![$($crate::cache::KeyPart::from($part)),*];
        $crate::cache::CacheKey::of(parts)
    }};
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        assert_eq!(cache_key!("Opel"), cache_key!("Opel".to_string()));
        assert_eq!(cache_key!(18000.0, 21000.0), cache_key!(18000.0, 21000.0));
        assert_ne!(cache_key!(18000.0, 21000.0), cache_key!(21000.0, 18000.0));
        assert_ne!(cache_key!("1"), cache_key!(1));
    }

    #[test]
    fn test_float_normalization() {
        assert_eq!(KeyPart::float(0.0), KeyPart::float(-0.0));
        assert_eq!(KeyPart::float(f64::NAN), KeyPart::float(-f64::NAN));
        assert_ne!(KeyPart::float(1.0), KeyPart::float(1.0000001));
    }

    #[test]
    fn test_keys_hash_by_value() {
        let mut set = HashSet::new();
        set.insert(cache_key!("VW", 90));
        set.insert(cache_key!("VW", 90));
        set.insert(cache_key!("VW", 120));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_option_parts() {
        let missing: Option<&str> = None;
        assert_eq!(cache_key!(missing).parts(), &[KeyPart::Null]);
        assert_eq!(cache_key!(Some("x")), cache_key!("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(cache_key!(18000.0, 21000.5).to_string(), "[18000,21000.5]");
        assert_eq!(cache_key!("Opel").to_string(), "[Opel]");
        assert_eq!(cache_key!().to_string(), "[]");
        assert!(cache_key!().is_empty());
    }

    #[test]
    fn test_from_str() {
        let key = CacheKey::from("Lamborghini");
        assert_eq!(key.len(), 1);
        assert_eq!(key, cache_key!("Lamborghini"));
    }
}

//! Serde support
//!
//! Timestamps serialize as their string export (`"1590417215661530"`) so
//! no precision is lost in formats with float-only numbers. Deserializing
//! accepts that string, any other layout `from_string` reads, an integer
//! count of microseconds, or float seconds.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::microtime::Microtime;
use crate::packed::PackedMicrotime;
use crate::traits::Microtimestamp;

struct MicrotimeVisitor<T>(PhantomData<T>);

impl<T: Microtimestamp> Visitor<'_> for MicrotimeVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a timestamp string, integer microseconds or float seconds")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::from_string(value).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        Ok(T::from_int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        Ok(T::from_int(i64::try_from(value).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<T, E> {
        Ok(T::from_float(value))
    }
}

impl Serialize for Microtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Microtime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MicrotimeVisitor(PhantomData))
    }
}

impl Serialize for PackedMicrotime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackedMicrotime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MicrotimeVisitor(PhantomData))
    }
}

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::Visitor,
};

/// The number of hits a move makes per use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultihitType {
    /// A static number of hits.
    Static(u8),
    /// A random number of hits in an inclusive range.
    Range(u8, u8),
}

impl Serialize for MultihitType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Static(n) => serializer.serialize_u8(*n),
            Self::Range(min, max) => serializer.collect_seq([min, max]),
        }
    }
}

struct MultihitTypeVisitor;

impl<'de> Visitor<'de> for MultihitTypeVisitor {
    type Value = MultihitType;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or an array of 2 integers")
    }

    fn visit_u8<E>(self, v: u8) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::Static(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::Static(v as u8))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let min = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(0, &self)),
        };
        let max = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(1, &self)),
        };
        if seq.next_element::<u8>()?.is_some() {
            return Err(serde::de::Error::invalid_length(3, &self));
        }
        Ok(Self::Value::Range(min, max))
    }
}

impl<'de> Deserialize<'de> for MultihitType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(MultihitTypeVisitor)
    }
}

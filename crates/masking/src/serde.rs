//!
//! Serde-related.
//!
//! Secrets can be read from configuration files but are never serialized back out.
//!

use serde::{de, Deserialize};

use crate::{Secret, Strategy};

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: de::DeserializeOwned + Sized,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

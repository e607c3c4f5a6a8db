use crate::Uri;
use core::fmt;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

impl Serialize for Uri {
    /// Serializes the URI as its canonical string form.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uri {
    /// Deserializes a string through [`Uri::parse`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Uri, D::Error> {
        struct UriVisitor;

        impl Visitor<'_> for UriVisitor {
            type Value = Uri;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a SIP URI string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Uri, E> {
                Uri::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(UriVisitor)
    }
}

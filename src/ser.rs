use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{Match, PatternID};

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for PatternID {
    fn serialize<Z>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        self.as_usize().serialize(serializer)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<S> Serialize for Match<'_, S>
where
    S: Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        let mut m = serializer.serialize_struct("Match", 3)?;
        m.serialize_field("pattern", &self.pattern())?;
        m.serialize_field("symbols", self.as_slice())?;
        m.serialize_field("start", &self.start())?;
        m.end()
    }
}

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::MapAccess;
use serde::de::Visitor;

/// Player identifier assigned by the coordinator.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card counts per player, in the order the coordinator listed them.
/// Order matters: the point-out scan walks it front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandSizes(Vec<(PlayerId, usize)>);

impl HandSizes {
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, usize)> {
        self.0.iter().map(|(id, n)| (id, *n))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I> FromIterator<(I, usize)> for HandSizes
where
    I: Into<PlayerId>,
{
    fn from_iter<T: IntoIterator<Item = (I, usize)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, n)| (id.into(), n)).collect())
    }
}

impl<'de> Deserialize<'de> for HandSizes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(Ordered)
    }
}

struct Ordered;

impl<'de> Visitor<'de> for Ordered {
    type Value = HandSizes;
    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of player id to card count")
    }
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut sizes = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<PlayerId, usize>()? {
            sizes.push(entry);
        }
        Ok(HandSizes(sizes))
    }
}

use std::collections::HashMap;
use std::fmt;

/// Named children of a [`Tag::Compound`]. Insertion order is irrelevant.
pub type Compound = HashMap<String, Tag>;

/// A node of the game's typed tag tree.
///
/// Variant order follows the format's numeric type ids (0 = `End` through
/// 12 = `LongArray`). Ids outside that range are carried as [`Tag::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<Tag>),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    /// A tag whose type id this crate does not know.
    Unknown(u8),
}

impl Tag {
    /// Build a compound from `(name, tag)` pairs.
    #[must_use]
    pub fn compound<K, I>(entries: I) -> Tag
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Tag)>,
    {
        Tag::Compound(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list from anything convertible into tags.
    #[must_use]
    pub fn list<T, I>(items: I) -> Tag
    where
        T: Into<Tag>,
        I: IntoIterator<Item = T>,
    {
        Tag::List(items.into_iter().map(Into::into).collect())
    }

    /// The format's numeric type id.
    #[must_use]
    pub fn type_id(&self) -> u8 {
        match self {
            Tag::End => 0,
            Tag::Byte(_) => 1,
            Tag::Short(_) => 2,
            Tag::Int(_) => 3,
            Tag::Long(_) => 4,
            Tag::Float(_) => 5,
            Tag::Double(_) => 6,
            Tag::ByteArray(_) => 7,
            Tag::String(_) => 8,
            Tag::List(_) => 9,
            Tag::Compound(_) => 10,
            Tag::IntArray(_) => 11,
            Tag::LongArray(_) => 12,
            Tag::Unknown(id) => *id,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Tag::End => "END",
            Tag::Byte(_) => "BYTE",
            Tag::Short(_) => "SHORT",
            Tag::Int(_) => "INT",
            Tag::Long(_) => "LONG",
            Tag::Float(_) => "FLOAT",
            Tag::Double(_) => "DOUBLE",
            Tag::ByteArray(_) => "BYTE[]",
            Tag::String(_) => "STRING",
            Tag::List(_) => "LIST",
            Tag::Compound(_) => "COMPOUND",
            Tag::IntArray(_) => "INT[]",
            Tag::LongArray(_) => "LONG[]",
            Tag::Unknown(_) => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a child of a compound. `None` for missing keys and non-compounds.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.as_compound().and_then(|map| map.get(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Read a numeric leaf as a short, the way the game reads enchantment
    /// ids and levels. Non-numeric or missing tags read as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn short_or_zero(&self, key: &str) -> i16 {
        match self.get(key) {
            Some(Tag::Byte(v)) => i16::from(*v),
            Some(Tag::Short(v)) => *v,
            Some(Tag::Int(v)) => *v as i16,
            Some(Tag::Long(v)) => *v as i16,
            Some(Tag::Float(v)) => *v as i16,
            Some(Tag::Double(v)) => *v as i16,
            _ => 0,
        }
    }
}

impl From<i8> for Tag {
    fn from(v: i8) -> Self {
        Tag::Byte(v)
    }
}

impl From<bool> for Tag {
    fn from(v: bool) -> Self {
        Tag::Byte(i8::from(v))
    }
}

impl From<i16> for Tag {
    fn from(v: i16) -> Self {
        Tag::Short(v)
    }
}

impl From<i32> for Tag {
    fn from(v: i32) -> Self {
        Tag::Int(v)
    }
}

impl From<i64> for Tag {
    fn from(v: i64) -> Self {
        Tag::Long(v)
    }
}

impl From<f32> for Tag {
    fn from(v: f32) -> Self {
        Tag::Float(v)
    }
}

impl From<f64> for Tag {
    fn from(v: f64) -> Self {
        Tag::Double(v)
    }
}

impl From<&str> for Tag {
    fn from(v: &str) -> Self {
        Tag::String(v.to_owned())
    }
}

impl From<String> for Tag {
    fn from(v: String) -> Self {
        Tag::String(v)
    }
}

impl From<Compound> for Tag {
    fn from(v: Compound) -> Self {
        Tag::Compound(v)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::End => write!(f, "END"),
            Tag::Byte(v) => write!(f, "{v}b"),
            Tag::Short(v) => write!(f, "{v}s"),
            Tag::Int(v) => write!(f, "{v}"),
            Tag::Long(v) => write!(f, "{v}L"),
            Tag::Float(v) => write!(f, "{v}f"),
            Tag::Double(v) => write!(f, "{v}d"),
            Tag::ByteArray(v) => write_array(f, "B;", v),
            Tag::String(v) => write!(f, "{v:?}"),
            Tag::List(items) => write_array(f, "", items),
            Tag::Compound(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{key}:{}", map[key])?;
                }
                write!(f, "}}")
            }
            Tag::IntArray(v) => write_array(f, "I;", v),
            Tag::LongArray(v) => write_array(f, "L;", v),
            Tag::Unknown(id) => write!(f, "<unknown type {id}>"),
        }
    }
}

fn write_array<T: fmt::Display>(f: &mut fmt::Formatter<'_>, prefix: &str, items: &[T]) -> fmt::Result {
    write!(f, "[{prefix}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

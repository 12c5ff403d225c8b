use std::{fmt, marker::PhantomData};

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor, value::MapAccessDeserializer};

use crate::foundation::core::FrameRect;

/// On-disk TexturePacker manifest. Every field is optional; absent values
/// fall back to empty/zero.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct RawManifest {
    pub frames: RawFrames,
    #[serde(deserialize_with = "object_only")]
    pub meta: RawMeta,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct RawMeta {
    pub image: Option<String>,
    #[serde(deserialize_with = "object_only")]
    pub size: RawSize,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct RawSize {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct RawFrame {
    pub filename: String,
    pub frame: FrameRect,
    pub rotated: bool,
}

/// Frames in document order, accepted in both the "JSON (Array)" and
/// "JSON (Hash)" export layouts.
#[derive(Debug, Default)]
pub(crate) struct RawFrames(pub Vec<RawFrame>);

impl<'de> serde::Deserialize<'de> for RawFrames {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawFramesVisitor)
    }
}

struct RawFramesVisitor;

impl<'de> Visitor<'de> for RawFramesVisitor {
    type Value = RawFrames;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of frame entries or a map from frame name to entry")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawFrames::default())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(frame) = seq.next_element::<RawFrame>()? {
            out.push(frame);
        }
        Ok(RawFrames(out))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, mut frame)) = map.next_entry::<String, RawFrame>()? {
            // The hash layout keys entries by name and usually omits `filename`.
            if frame.filename.is_empty() {
                frame.filename = name;
            }
            out.push(frame);
        }
        Ok(RawFrames(out))
    }
}

/// Deserialize `T` from a JSON object only.
///
/// Derived struct impls also accept arrays and fill fields by position, which
/// would let `[]` or `[[...], {...}]` pass as a manifest.
pub(crate) fn object_only<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    deserializer.deserialize_map(ObjectVisitor(PhantomData))
}

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T: serde::Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map))
    }
}

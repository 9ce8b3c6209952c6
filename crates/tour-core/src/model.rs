//! Scene and spot records.
//!
//! Two layers live here. `SceneRecord`/`SpotRecord` are the persisted and wire
//! shape, with positions in authoring units. `Scene`/`Spot` are what the viewer
//! consumes, with positions already converted to world units. Only
//! [`crate::loader::normalize_scenes`] turns the former into the latter, so the
//! scale factor cannot be applied twice.

use crate::constants::{DEFAULT_SPOT_ICON, DEFAULT_SPOT_SIZE};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spot variant tag. Unknown tags are kept in `Other` so they can be reported.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpotType {
    Hotspot,
    Infospot,
    Other(String),
}

impl SpotType {
    pub fn as_str(&self) -> &str {
        match self {
            SpotType::Hotspot => "hotspot",
            SpotType::Infospot => "infospot",
            SpotType::Other(s) => s,
        }
    }
}

impl From<String> for SpotType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "hotspot" => SpotType::Hotspot,
            "infospot" => SpotType::Infospot,
            _ => SpotType::Other(s),
        }
    }
}

impl From<&str> for SpotType {
    fn from(s: &str) -> Self {
        SpotType::from(s.to_string())
    }
}

impl From<SpotType> for String {
    fn from(t: SpotType) -> Self {
        match t {
            SpotType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media kind of an infospot content block.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Info,
    Image,
    Video,
    Audio,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Info => "info",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Other(s) => s,
        }
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "info" => ContentType::Info,
            "image" => ContentType::Image,
            "video" => ContentType::Video,
            "audio" => ContentType::Audio,
            _ => ContentType::Other(s),
        }
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        ContentType::from(s.to_string())
    }
}

impl From<ContentType> for String {
    fn from(t: ContentType) -> Self {
        match t {
            ContentType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `{type, value}` pair of combined infospot content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: String,
}

impl ContentItem {
    pub fn new(kind: impl Into<ContentType>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Infospot payload: a single string interpreted through `contentType`, or an
/// ordered list of typed items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpotContent {
    Single(String),
    Combined(Vec<ContentItem>),
}

/// Point in authoring units as stored in the document store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_world(self, scale: f32) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32) * scale
    }
}

/// Stored spot. Every field decodes leniently: a value of the wrong shape
/// reads as absent, so one bad spot is skipped at wiring time instead of
/// failing the whole payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotRecord {
    #[serde(rename = "type", default, deserialize_with = "lenient::field")]
    pub kind: Option<SpotType>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub position: Option<Position>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub target: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub content_type: Option<ContentType>,
    #[serde(default, deserialize_with = "lenient::content")]
    pub content: Option<SpotContent>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub size: Option<f32>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub icon: Option<String>,
}

impl SpotRecord {
    /// Fill the fields the document store defaults (`size`, `icon`).
    pub fn with_store_defaults(mut self) -> Self {
        self.size.get_or_insert(DEFAULT_SPOT_SIZE);
        self.icon.get_or_insert_with(|| DEFAULT_SPOT_ICON.to_string());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    pub id: String,
    pub src: String,
    #[serde(default, deserialize_with = "lenient::spots")]
    pub spots: Vec<SpotRecord>,
}

mod lenient {
    use super::{ContentItem, SpotContent, SpotRecord};
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        match T::deserialize(&value) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                log::warn!("[model] ignoring malformed spot field {value}: {e}");
                Ok(None)
            }
        }
    }

    /// Scalars read as text, so stored numbers still render.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar_text(&value).unwrap_or_default())
    }

    pub fn content<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<SpotContent>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Some(text) = scalar_text(&value) {
            return Ok(Some(SpotContent::Single(text)));
        }
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(SpotContent::Combined(
                items
                    .iter()
                    .filter_map(|item| match ContentItem::deserialize(item) {
                        Ok(item) => Some(item),
                        Err(e) => {
                            log::warn!("[model] dropping malformed content item {item}: {e}");
                            None
                        }
                    })
                    .collect(),
            ))),
            other => {
                log::warn!("[model] ignoring malformed spot content {other}");
                Ok(None)
            }
        }
    }

    /// A spot that is not an object becomes an empty record, keeping indices stable.
    pub fn spots<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<SpotRecord>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(items
                .iter()
                .map(|item| {
                    SpotRecord::deserialize(item).unwrap_or_else(|e| {
                        log::warn!("[model] malformed spot {item}: {e}");
                        SpotRecord::default()
                    })
                })
                .collect()),
            Value::Null => Ok(Vec::new()),
            other => {
                log::warn!("[model] scene spots is not a list: {other}");
                Ok(Vec::new())
            }
        }
    }
}

/// Scene as consumed by the viewer (positions in world units).
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub id: String,
    pub src: String,
    pub spots: Vec<Spot>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spot {
    pub kind: Option<SpotType>,
    pub position: Option<Vec3>,
    pub target: Option<String>,
    pub content_type: Option<ContentType>,
    pub content: Option<SpotContent>,
    pub size: Option<f32>,
    pub label: Option<String>,
    pub icon: Option<String>,
}

impl Spot {
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            size: self.size.unwrap_or(DEFAULT_SPOT_SIZE),
            icon: self
                .icon
                .clone()
                .unwrap_or_else(|| DEFAULT_SPOT_ICON.to_string()),
        }
    }
}

/// Visual parameters of a marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub size: f32,
    pub icon: String,
}

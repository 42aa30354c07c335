//! Decoded catalog records
//!
//! These are the values the dump decoder hands over. The writers only care
//! about the image field of each record; everything else is passed through
//! to the wire form untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image metadata attached to artists, labels, masters and releases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Image {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub height: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub width: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri150: String,
}

impl Image {
    pub fn new(uri: impl Into<String>) -> Self {
        Image {
            uri: uri.into(),
            ..Default::default()
        }
    }
}

/// Reference to another artist (alias, member or group)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Alias {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Artist {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub real_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_quality: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name_variations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Alias>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Alias>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Alias>,
}

/// Reference to a parent or sub label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelLabel {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Label {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contact_info: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_quality: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_labels: Vec<LabelLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_label: Option<LabelLabel>,
}

/// Artist credit on a master or release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReleaseArtist {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub joiner: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub anv: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tracks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Video {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub embed: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub src: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Master {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub main_release: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<ReleaseArtist>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub year: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_quality: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReleaseLabel {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Format {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quantity: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Track {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub position: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Identifier {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Company {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_type_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Release {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<ReleaseArtist>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_artists: Vec<ReleaseArtist>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<ReleaseLabel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<Format>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub released: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_quality: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub master_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub track_list: Vec<Track>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub companies: Vec<Company>,
}

/// The four kinds of records found in a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Artist,
    Label,
    Master,
    Release,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Artist => "artist",
            RecordKind::Label => "label",
            RecordKind::Master => "master",
            RecordKind::Release => "release",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    /// Accepts singular and plural names, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artist" | "artists" => Ok(RecordKind::Artist),
            "label" | "labels" => Ok(RecordKind::Label),
            "master" | "masters" => Ok(RecordKind::Master),
            "release" | "releases" => Ok(RecordKind::Release),
            other => Err(format!("unknown record kind: {}", other)),
        }
    }
}

/// A record that a writer can persist
///
/// The writers never look inside a record beyond its images, which they
/// clear when `Options::exclude_images` is set.
pub trait CatalogRecord: Serialize + Clone {
    const KIND: RecordKind;

    fn images(&self) -> &[Image];

    fn clear_images(&mut self);
}

macro_rules! impl_catalog_record {
    ($ty:ty, $kind:expr) => {
        impl CatalogRecord for $ty {
            const KIND: RecordKind = $kind;

            fn images(&self) -> &[Image] {
                &self.images
            }

            fn clear_images(&mut self) {
                self.images.clear();
            }
        }
    };
}

impl_catalog_record!(Artist, RecordKind::Artist);
impl_catalog_record!(Label, RecordKind::Label);
impl_catalog_record!(Master, RecordKind::Master);
impl_catalog_record!(Release, RecordKind::Release);

/// A single record of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Artist(Artist),
    Label(Label),
    Master(Master),
    Release(Release),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Artist(_) => RecordKind::Artist,
            Record::Label(_) => RecordKind::Label,
            Record::Master(_) => RecordKind::Master,
            Record::Release(_) => RecordKind::Release,
        }
    }
}

/// A homogeneous batch of records
#[derive(Debug, Clone, PartialEq)]
pub enum RecordBatch {
    Artists(Vec<Artist>),
    Labels(Vec<Label>),
    Masters(Vec<Master>),
    Releases(Vec<Release>),
}

impl RecordBatch {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordBatch::Artists(_) => RecordKind::Artist,
            RecordBatch::Labels(_) => RecordKind::Label,
            RecordBatch::Masters(_) => RecordKind::Master,
            RecordBatch::Releases(_) => RecordKind::Release,
        }
    }
}

macro_rules! impl_from_record {
    ($ty:ty, $variant:ident, $batch:ident) => {
        impl From<$ty> for Record {
            fn from(value: $ty) -> Self {
                Record::$variant(value)
            }
        }

        impl From<Vec<$ty>> for RecordBatch {
            fn from(value: Vec<$ty>) -> Self {
                RecordBatch::$batch(value)
            }
        }
    };
}

impl_from_record!(Artist, Artist, Artists);
impl_from_record!(Label, Label, Labels);
impl_from_record!(Master, Master, Masters);
impl_from_record!(Release, Release, Releases);

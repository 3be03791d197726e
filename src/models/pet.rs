//! Pet resource types shared by the contract, the controller and the store.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Adoption status of a pet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl std::str::FromStr for PetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid status: {} (expected available, pending or sold)", s))
    }
}

/// A stored pet. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Rex")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "dog")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

/// Body of `POST /pets` and `PUT /pets/{id}`: every mutable field, replacing what is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewPet {
    #[schema(example = "Rex", min_length = 1, max_length = 255)]
    pub name: String,
    #[serde(default)]
    #[schema(example = "dog")]
    pub tag: Option<String>,
    #[serde(default)]
    pub status: Option<PetStatus>,
}

impl NewPet {
    pub fn into_pet(self, id: i64) -> Pet {
        Pet {
            id,
            name: self.name,
            tag: self.tag,
            status: self.status,
        }
    }
}

/// Body of `PATCH /pets/{id}`. Absent fields are left alone; an explicit `null` clears `tag` or `status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct PetPatch {
    #[serde(default)]
    #[schema(min_length = 1, max_length = 255)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub tag: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<PetStatus>)]
    pub status: Option<Option<PetStatus>>,
}

impl PetPatch {
    pub fn apply(&self, pet: &mut Pet) {
        if let Some(name) = &self.name {
            pet.name = name.clone();
        }
        if let Some(tag) = &self.tag {
            pet.tag = tag.clone();
        }
        if let Some(status) = self.status {
            pet.status = status;
        }
    }
}

/// Marks a field as present, so `null` becomes `Some(None)` rather than `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string of `GET /pets`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPetsQuery {
    /// Comma-separated tags; a pet matches when its tag is any of them.
    pub tags: Option<String>,
    pub status: Option<PetStatus>,
    /// Maximum number of results (default 100, at most 1000).
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 1000;

/// Resolved list criteria handed to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetFilter {
    pub tags: Option<Vec<String>>,
    pub status: Option<PetStatus>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for PetFilter {
    fn default() -> Self {
        PetFilter {
            tags: None,
            status: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        let tag_ok = match &self.tags {
            Some(tags) => pet.tag.as_ref().map(|t| tags.contains(t)).unwrap_or(false),
            None => true,
        };
        let status_ok = self.status.map(|s| pet.status == Some(s)).unwrap_or(true);
        tag_ok && status_ok
    }
}

impl From<ListPetsQuery> for PetFilter {
    fn from(q: ListPetsQuery) -> Self {
        let tags = q.tags.map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        });
        PetFilter {
            tags: tags.filter(|t| !t.is_empty()),
            status: q.status,
            limit: q.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
            offset: q.offset.unwrap_or(0),
        }
    }
}

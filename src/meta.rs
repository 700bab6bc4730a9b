use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `{ "val": ... }` envelope used by the metadata store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapped<T> {
    pub val: T,
}

impl<T> Wrapped<T> {
    pub fn new(val: T) -> Self {
        Self { val }
    }
}

/// Strip envelopes, keeping order.
pub fn unwrap_all<T: Clone>(items: &[Wrapped<T>]) -> Vec<T> {
    items.iter().map(|item| item.val.clone()).collect()
}

/// `null` and a missing field both read as an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roles: Vec<String>,
    /// Fields the drawer does not show, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserDetails {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role.eq_ignore_ascii_case("admin"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata collections as handed over by the metadata store.
///
/// Every field may be missing; the panel composer fills in empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaState {
    #[serde(default)]
    pub labels: Option<Vec<Wrapped<String>>>,
    #[serde(default)]
    pub relationship_types: Option<Vec<Wrapped<String>>>,
    #[serde(default)]
    pub properties: Option<Vec<Wrapped<String>>>,
    #[serde(default)]
    pub user_details: Option<UserDetails>,
    #[serde(default)]
    pub database_kernel_info: Option<KernelInfo>,
}

/// Flat state object exposing the metadata under `meta`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub meta: Option<MetaState>,
}

impl StoreState {
    /// Metadata slice of the state; missing `meta` means all collections are empty.
    pub fn into_meta(self) -> MetaState {
        self.meta.unwrap_or_default()
    }
}

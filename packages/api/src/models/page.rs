use serde::Deserialize;

/// Paginated envelope: `{ data: [...], meta: { total } }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PageMeta {
    #[serde(default)]
    pub total: u64,
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw text entered on the input step, keyed by input-category id.
///
/// Values are kept exactly as typed; parsing happens during reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFormValues(BTreeMap<String, String>);

impl RawFormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn set(
        &mut self,
        id: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.0.insert(id.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for RawFormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for RawFormValues {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

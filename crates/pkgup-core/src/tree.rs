//! Installed dependency tree as reported by `npm ls --json`.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use pkgup_util::errors::PkgupError;

/// One package in an installed dependency tree.
///
/// Only the root carries `name`; every other node is named by the key under
/// which it appears in its parent's [`Dependencies`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    #[serde(default, skip_serializing_if = "Dependencies::is_empty")]
    pub dependencies: Dependencies,
}

impl DependencyNode {
    /// Parse the JSON printed by `npm ls --json`.
    pub fn from_json(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            PkgupError::Parse {
                message: format!("invalid dependency tree JSON: {e}"),
            }
            .into()
        })
    }

    /// A node with just a version, handy for building trees by hand.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Builder-style: append a child dependency.
    pub fn dependency(mut self, name: impl Into<String>, node: DependencyNode) -> Self {
        self.dependencies.push(name, node);
        self
    }

    /// Look up a direct dependency by name.
    pub fn child(&self, name: &str) -> Option<&DependencyNode> {
        self.dependencies.get(name)
    }

    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// Children of a [`DependencyNode`], in the order the listing reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies(Vec<(String, DependencyNode)>);

impl Dependencies {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a child. A repeated name keeps its first position and value.
    ///
    /// Linear in the number of children; bulk construction goes through
    /// [`FromIterator`], which is not.
    pub fn push(&mut self, name: impl Into<String>, node: DependencyNode) {
        let name = name.into();
        if self.get(&name).is_none() {
            self.0.push((name, node));
        }
    }

    pub fn get(&self, name: &str) -> Option<&DependencyNode> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DependencyNode)> {
        self.0.iter().map(|(n, node)| (n.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, DependencyNode)> for Dependencies {
    fn from_iter<I: IntoIterator<Item = (String, DependencyNode)>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        Self(
            iter.into_iter()
                .filter(|(name, _)| seen.insert(name.clone()))
                .collect(),
        )
    }
}

impl Serialize for Dependencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, node) in &self.0 {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dependencies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = Dependencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of package names to dependency nodes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, DependencyNode>()? {
                    entries.push(entry);
                }
                Ok(entries.into_iter().collect())
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Dependencies::new())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Dependencies::new())
            }
        }

        deserializer.deserialize_any(OrderedVisitor)
    }
}

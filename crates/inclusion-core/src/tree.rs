// Dweve Inclusion - Nested Inclusion Directives
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tree structure for parsed inclusion directives.

use std::ops::Index;

/// A nested, insertion-ordered mapping of inclusion names to sub-inclusions.
///
/// A leaf is a name mapped to an empty tree, so `people` and `people()`
/// produce the same value. Names are unique per level: inserting a name that
/// already exists replaces its subtree but keeps its original position.
///
/// Equality is order-sensitive.
///
/// Dropping and comparing trees works level by level on the heap, so any
/// tree [`parse`](crate::parse) accepts can be freed and compared. The
/// derived `Clone` and `Debug` recurse once per level and are meant for
/// trees of bounded depth, such as those produced under the default
/// [`Limits`](crate::Limits).
///
/// # Examples
///
/// ```
/// use inclusion_core::{parse, InclusionTree};
///
/// let tree = parse("tags,people(account)").unwrap();
/// let expected = InclusionTree::new()
///     .with("tags", InclusionTree::new())
///     .with("people", InclusionTree::new().with("account", InclusionTree::new()));
///
/// assert_eq!(tree, expected);
/// assert!(tree["tags"].is_leaf());
/// assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["tags", "people"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InclusionTree {
    entries: Vec<(String, InclusionTree)>,
}

impl InclusionTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` direct children.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert `name` mapped to `subtree`.
    ///
    /// An existing entry with the same name is overwritten in place and its
    /// previous subtree is returned.
    pub fn insert(&mut self, name: impl Into<String>, subtree: InclusionTree) -> Option<InclusionTree> {
        let name = name.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, subtree)),
            None => {
                self.entries.push((name, subtree));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, subtree: InclusionTree) -> Self {
        self.insert(name, subtree);
        self
    }

    /// Get the subtree requested under `name`.
    pub fn get(&self, name: &str) -> Option<&InclusionTree> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, subtree)| subtree)
    }

    /// Get a mutable reference to the subtree requested under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut InclusionTree> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, subtree)| subtree)
    }

    /// Returns `true` if `name` is present at this level.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove `name`, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<InclusionTree> {
        let index = self.position(name)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if nothing is nested below this node.
    ///
    /// Same as [`is_empty`](Self::is_empty); reads better on subtrees.
    pub fn is_leaf(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names at this level, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Subtrees at this level, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &InclusionTree> {
        self.entries.iter().map(|(_, subtree)| subtree)
    }

    /// `(name, subtree)` pairs at this level, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Maximum number of groups enclosing any name.
    ///
    /// A flat list of names has depth 0 and every level of non-empty
    /// sub-inclusions adds one, so the depth of a parsed directive equals
    /// the parenthesis nesting of its input. Empty groups (`people()`) leave
    /// nothing behind and do not count.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut pending: Vec<(&InclusionTree, usize)> = vec![(self, 0)];

        while let Some((tree, level)) = pending.pop() {
            for subtree in tree.values().filter(|subtree| !subtree.is_empty()) {
                max = max.max(level + 1);
                pending.push((subtree, level + 1));
            }
        }

        max
    }

    /// Number of names at every level.
    pub fn total_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&InclusionTree> = vec![self];

        while let Some(tree) = pending.pop() {
            count += tree.len();
            pending.extend(tree.values());
        }

        count
    }

    /// Dotted paths of every node, in pre-order.
    ///
    /// ```
    /// use inclusion_core::parse;
    ///
    /// let tree = parse("tags,people(account)").unwrap();
    /// assert_eq!(tree.paths(), vec!["tags", "people", "people.account"]);
    /// ```
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::with_capacity(self.total_count());
        // Reversed so that popping yields insertion order.
        let mut pending: Vec<(String, &InclusionTree)> = self
            .iter()
            .rev()
            .map(|(name, subtree)| (name.to_string(), subtree))
            .collect();

        while let Some((path, tree)) = pending.pop() {
            for (name, subtree) in tree.iter().rev() {
                pending.push((format!("{}.{}", path, name), subtree));
            }
            paths.push(path);
        }

        paths
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

impl PartialEq for InclusionTree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&InclusionTree, &InclusionTree)> = vec![(self, other)];

        while let Some((left, right)) = pending.pop() {
            if left.entries.len() != right.entries.len() {
                return false;
            }
            for ((left_name, left_tree), (right_name, right_tree)) in
                left.entries.iter().zip(&right.entries)
            {
                if left_name != right_name {
                    return false;
                }
                pending.push((left_tree, right_tree));
            }
        }

        true
    }
}

impl Eq for InclusionTree {}

impl Drop for InclusionTree {
    fn drop(&mut self) {
        if self.entries.iter().all(|(_, subtree)| subtree.entries.is_empty()) {
            return;
        }

        // Detach every level before it is freed so that no drop recurses.
        let mut pending: Vec<InclusionTree> = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(_, subtree)| subtree)
            .collect();

        while let Some(mut tree) = pending.pop() {
            pending.extend(
                std::mem::take(&mut tree.entries)
                    .into_iter()
                    .map(|(_, subtree)| subtree),
            );
        }
    }
}

impl Index<&str> for InclusionTree {
    type Output = InclusionTree;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(subtree) => subtree,
            None => panic!("no inclusion named '{}'", name),
        }
    }
}

/// Iterator over `(name, subtree)` pairs of an [`InclusionTree`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, InclusionTree)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a InclusionTree);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, subtree)| (key.as_str(), subtree))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, subtree)| (key.as_str(), subtree))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a InclusionTree {
    type Item = (&'a str, &'a InclusionTree);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for InclusionTree {
    type Item = (String, InclusionTree);
    type IntoIter = std::vec::IntoIter<(String, InclusionTree)>;

    fn into_iter(mut self) -> Self::IntoIter {
        std::mem::take(&mut self.entries).into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, InclusionTree)> for InclusionTree {
    fn from_iter<I: IntoIterator<Item = (K, InclusionTree)>>(iter: I) -> Self {
        let mut tree = InclusionTree::new();
        for (name, subtree) in iter {
            tree.insert(name, subtree);
        }
        tree
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::InclusionTree;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for InclusionTree {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, subtree) in self {
                map.serialize_entry(name, subtree)?;
            }
            map.end()
        }
    }

    struct TreeVisitor;

    impl<'de> Visitor<'de> for TreeVisitor {
        type Value = InclusionTree;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of inclusion names to nested inclusion maps")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut tree = InclusionTree::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((name, subtree)) = access.next_entry::<String, InclusionTree>()? {
                tree.insert(name, subtree);
            }
            Ok(tree)
        }
    }

    impl<'de> Deserialize<'de> for InclusionTree {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(TreeVisitor)
        }
    }
}

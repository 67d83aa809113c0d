//! Classification hierarchy: the descriptor served by the catalog and the
//! display tree built from it, annotated with live resource counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field_path::{FieldPath, MAX_HIERARCHY_LEVEL};
use crate::resource::Resource;
use crate::serde_helpers::null_as_default;

/// `GET /api/resource-hierarchy`: category name -> entry, nested by level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HierarchyDescriptor(pub BTreeMap<String, HierarchyEntry>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HierarchyEntry {
    pub level: Option<u8>,
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_categories: BTreeMap<String, HierarchyEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<HierarchyItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HierarchyItem {
    Name(String),
    Object {
        name: String,
        #[serde(default)]
        title: Option<String>,
    },
}

impl HierarchyItem {
    pub fn name(&self) -> &str {
        match self {
            HierarchyItem::Name(name) => name,
            HierarchyItem::Object { name, .. } => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            HierarchyItem::Object { title: Some(title), .. } => title,
            _ => self.name(),
        }
    }
}

impl HierarchyDescriptor {
    /// Level-1 names, which double as the selectable resource types.
    pub fn resource_types(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }
}

/// Values from the root down to a node; index `i` belongs to level `i + 1`.
pub type NodePath = Vec<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub name: String,
    pub label: String,
    pub level: u8,
    pub path: NodePath,
    pub count: usize,
    pub children: Vec<DisplayNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub name: String,
    pub label: String,
    pub level: u8,
    pub path: NodePath,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayNode {
    Category(CategoryNode),
    Leaf(LeafNode),
}

impl DisplayNode {
    pub fn name(&self) -> &str {
        match self {
            DisplayNode::Category(node) => &node.name,
            DisplayNode::Leaf(node) => &node.name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DisplayNode::Category(node) => &node.label,
            DisplayNode::Leaf(node) => &node.label,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            DisplayNode::Category(node) => node.level,
            DisplayNode::Leaf(node) => node.level,
        }
    }

    pub fn path(&self) -> &NodePath {
        match self {
            DisplayNode::Category(node) => &node.path,
            DisplayNode::Leaf(node) => &node.path,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            DisplayNode::Category(node) => node.count,
            DisplayNode::Leaf(node) => node.count,
        }
    }

    pub fn children(&self) -> &[DisplayNode] {
        match self {
            DisplayNode::Category(node) => &node.children,
            DisplayNode::Leaf(_) => &[],
        }
    }

    pub fn is_expandable(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn field(&self) -> FieldPath {
        FieldPath::from_level(self.level()).unwrap_or(FieldPath::Level5)
    }
}

/// Display tree for one result set. Rebuilt from scratch for every new list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HierarchyTree {
    pub roots: Vec<DisplayNode>,
}

impl HierarchyTree {
    pub fn build(descriptor: &HierarchyDescriptor, resources: &[Resource]) -> Self {
        Self { roots: build_level(&descriptor.0, &[], 1, resources) }
    }

    pub fn find(&self, path: &[String]) -> Option<&DisplayNode> {
        let mut nodes = self.roots.as_slice();
        let mut found = None;
        for segment in path {
            let node = nodes.iter().find(|node| node.name() == segment)?;
            nodes = node.children();
            found = Some(node);
        }
        found
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

fn build_level(
    entries: &BTreeMap<String, HierarchyEntry>,
    parent_path: &[String],
    level: u8,
    resources: &[Resource],
) -> Vec<DisplayNode> {
    if level > MAX_HIERARCHY_LEVEL {
        return Vec::new();
    }
    entries
        .iter()
        .map(|(name, entry)| {
            let path = child_path(parent_path, name);
            let mut children = build_level(&entry.sub_categories, &path, level + 1, resources);
            children.extend(build_items(&entry.items, &path, level + 1, resources));
            DisplayNode::Category(CategoryNode {
                name: name.clone(),
                label: entry.title.clone().unwrap_or_else(|| name.clone()),
                level,
                count: count_matching(resources, &path),
                path,
                children,
            })
        })
        .collect()
}

fn build_items(items: &[HierarchyItem], parent_path: &[String], level: u8, resources: &[Resource]) -> Vec<DisplayNode> {
    if level > MAX_HIERARCHY_LEVEL {
        return Vec::new();
    }
    items
        .iter()
        .map(|item| {
            let path = child_path(parent_path, item.name());
            DisplayNode::Leaf(LeafNode {
                name: item.name().to_string(),
                label: item.label().to_string(),
                level,
                count: count_matching(resources, &path),
                path,
            })
        })
        .collect()
}

fn child_path(parent_path: &[String], name: &str) -> NodePath {
    let mut path = parent_path.to_vec();
    path.push(name.to_string());
    path
}

/// Linear scan: resources whose level fields equal `path` segment by segment.
pub fn count_matching(resources: &[Resource], path: &[String]) -> usize {
    resources.iter().filter(|resource| resource_matches_path(resource, path)).count()
}

pub fn resource_matches_path(resource: &Resource, path: &[String]) -> bool {
    path.iter().enumerate().all(|(index, expected)| {
        let Some(field) = FieldPath::from_level(index as u8 + 1) else { return false };
        resource.field(field) == Some(expected.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(resource_type: &str, category: &str) -> Resource {
        Resource {
            resource_type: Some(resource_type.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn counts_follow_the_node_path() {
        let descriptor: HierarchyDescriptor = serde_json::from_value(json!({
            "TypeA": {"level": 1, "sub_categories": {"CatX": {"level": 2, "items": ["i1"]}}}
        }))
        .expect("descriptor");
        let tree = HierarchyTree::build(&descriptor, &[resource("TypeA", "CatX")]);

        let cat = tree.find(&["TypeA".to_string(), "CatX".to_string()]).expect("CatX");
        assert_eq!(cat.count(), 1);
        assert!(cat.is_expandable());

        let leaf = &cat.children()[0];
        assert!(matches!(leaf, DisplayNode::Leaf(_)));
        assert_eq!(leaf.name(), "i1");
        assert_eq!(leaf.level(), 3);
        assert_eq!(leaf.count(), 0);
    }

    #[test]
    fn nesting_beyond_level_five_is_dropped() {
        let descriptor: HierarchyDescriptor = serde_json::from_value(json!({
            "L1": {"sub_categories": {"L2": {"sub_categories": {"L3": {"sub_categories": {"L4": {"sub_categories": {
                "L5": {"items": ["too-deep"], "sub_categories": {"L6": {}}}
            }}}}}}}}
        }))
        .expect("descriptor");
        let tree = HierarchyTree::build(&descriptor, &[]);
        let path: Vec<String> = ["L1", "L2", "L3", "L4", "L5"].iter().map(|s| s.to_string()).collect();
        let level5 = tree.find(&path).expect("level 5 node");
        assert_eq!(level5.level(), 5);
        assert!(level5.children().is_empty());
        assert!(!level5.is_expandable());
    }

    #[test]
    fn titles_and_object_items_are_labels() {
        let descriptor: HierarchyDescriptor = serde_json::from_value(json!({
            "sys": {"title": "Systems", "items": [{"name": "lab", "title": "Laboratory"}], "sub_categories": null}
        }))
        .expect("descriptor");
        let tree = HierarchyTree::build(&descriptor, &[]);
        assert_eq!(tree.roots[0].label(), "Systems");
        assert_eq!(tree.roots[0].children()[0].label(), "Laboratory");
        assert_eq!(tree.roots[0].children()[0].name(), "lab");
    }

    #[test]
    fn childless_category_is_not_expandable() {
        let descriptor: HierarchyDescriptor = serde_json::from_value(json!({"Tools": {"level": 1}})).expect("descriptor");
        let tree = HierarchyTree::build(&descriptor, &[resource("Tools", "x"), resource("Tools", "y")]);
        assert!(!tree.roots[0].is_expandable());
        assert_eq!(tree.roots[0].count(), 2);
    }
}

//! Relationship network payload of `GET /api/network-data`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{null_as_default, required_string_or_number, string_or_number};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetworkData {
    #[serde(deserialize_with = "null_as_default")]
    pub nodes: Vec<NetworkNode>,
    #[serde(deserialize_with = "null_as_default")]
    pub edges: Vec<NetworkEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    #[serde(deserialize_with = "required_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(rename = "dataSourceId", default, deserialize_with = "string_or_number")]
    pub data_source_id: Option<String>,
}

impl NetworkNode {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Resource opened on double-click, if the node stands for one.
    pub fn detail_target(&self) -> Option<&str> {
        self.data_source_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    #[serde(deserialize_with = "required_string_or_number")]
    pub from: String,
    #[serde(deserialize_with = "required_string_or_number")]
    pub to: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Group used for nodes without one.
pub const UNGROUPED: &str = "Ungrouped";

impl NetworkData {
    pub fn node(&self, id: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Nodes connected to `id` by an edge in either direction.
    pub fn neighbours(&self, id: &str) -> Vec<&NetworkNode> {
        let mut neighbours: Vec<&NetworkNode> = Vec::new();
        for edge in &self.edges {
            let other = if edge.from == id {
                &edge.to
            } else if edge.to == id {
                &edge.from
            } else {
                continue;
            };
            if let Some(node) = self.node(other) {
                if !neighbours.iter().any(|n| n.id == node.id) {
                    neighbours.push(node);
                }
            }
        }
        neighbours
    }

    pub fn by_group(&self) -> BTreeMap<&str, Vec<&NetworkNode>> {
        let mut groups: BTreeMap<&str, Vec<&NetworkNode>> = BTreeMap::new();
        for node in &self.nodes {
            let group = node.group.as_deref().filter(|g| !g.is_empty()).unwrap_or(UNGROUPED);
            groups.entry(group).or_default().push(node);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> NetworkData {
        serde_json::from_value(json!({
            "nodes": [
                {"id": 1, "label": "GLASS", "group": "resource", "dataSourceId": "r-1"},
                {"id": 2, "label": "Kenya", "group": "country"},
                {"id": 3, "label": "WHONET", "group": "resource", "dataSourceId": 7},
                {"id": "4"}
            ],
            "edges": [{"from": 1, "to": 2}, {"from": 3, "to": 1}, {"from": 1, "to": 2}]
        }))
        .expect("network")
    }

    #[test]
    fn only_resource_nodes_route_to_details() {
        let network = sample();
        assert_eq!(network.node("1").and_then(NetworkNode::detail_target), Some("r-1"));
        assert_eq!(network.node("3").and_then(NetworkNode::detail_target), Some("7"));
        assert_eq!(network.node("2").and_then(NetworkNode::detail_target), None);
    }

    #[test]
    fn neighbours_are_deduplicated() {
        let network = sample();
        let ids: Vec<&str> = network.neighbours("1").iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn groups_include_ungrouped_nodes() {
        let network = sample();
        let groups = network.by_group();
        assert_eq!(groups.get("resource").map(Vec::len), Some(2));
        assert_eq!(groups.get(UNGROUPED).map(|nodes| nodes[0].display_label()), Some("4"));
    }
}

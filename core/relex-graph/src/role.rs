use relex_protocol::NodeId;
use std::collections::BTreeMap;
use std::fmt;

use crate::graph::NodeSet;
use crate::node::Dependency;

pub const ARG1: &str = "arg1";
pub const ARG2: &str = "arg2";
/// Every role whose name starts with this prefix names a relation node.
pub const REL_PREFIX: &str = "rel";

/// Assignment of pattern roles to graph nodes, as produced by a pattern
/// matcher. The bipath holds the arcs the pattern walked to bind them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMatch {
    groups: BTreeMap<String, NodeId>,
    bipath: Vec<Dependency>,
}

impl RoleMatch {
    pub fn new(groups: BTreeMap<String, NodeId>, bipath: Vec<Dependency>) -> Self {
        Self { groups, bipath }
    }

    /// Match without a bipath, for callers that bind roles by hand.
    pub fn from_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = (S, NodeId)>,
        S: Into<String>,
    {
        Self {
            groups: roles.into_iter().map(|(role, node)| (role.into(), node)).collect(),
            bipath: Vec::new(),
        }
    }

    pub fn get(&self, role: &str) -> Option<NodeId> {
        self.groups.get(role).copied()
    }

    pub fn roles(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.groups.iter().map(|(role, &node)| (role.as_str(), node))
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Relation nodes ordered by role name (`rel`, `rel1`, `rel2`, ...).
    pub fn relations(&self) -> Vec<NodeId> {
        self.groups
            .iter()
            .filter(|(role, _)| role.starts_with(REL_PREFIX))
            .map(|(_, &node)| node)
            .collect()
    }

    pub fn bipath(&self) -> &[Dependency] {
        &self.bipath
    }

    /// Every bound node.
    pub fn nodes(&self) -> NodeSet {
        self.groups.values().copied().collect()
    }
}

impl fmt::Display for RoleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (role, node)) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", role, node)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relations_sorted_by_role_name() {
        let m = RoleMatch::from_roles([
            ("rel2", NodeId::new(4)),
            ("arg1", NodeId::new(0)),
            ("rel1", NodeId::new(2)),
            ("arg2", NodeId::new(6)),
        ]);

        assert_eq!(m.relations(), vec![NodeId::new(2), NodeId::new(4)]);
        assert_eq!(m.get(ARG1), Some(NodeId::new(0)));
        assert_eq!(m.get("missing"), None);
        assert_eq!(m.nodes().len(), 4);
        assert_eq!(m.to_string(), "{arg1: 0, arg2: 6, rel1: 2, rel2: 4}");
    }
}

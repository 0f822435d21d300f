//! Data model for colored graph descriptions

use crate::color::Color;

/// A complete parsed description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Description {
    /// Color aliases declared in the optional header
    pub aliases: ColorAliases,
    /// The parsed nodes
    pub forest: Forest,
}

/// Index of a node inside its [`Forest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single line of the description
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Display label
    pub label: String,
    /// Resolved color, `None` when the line used `_`
    pub color: Option<Color>,
    /// Indentation level (0 for roots)
    pub depth: usize,
    /// Child nodes in source order
    pub children: Vec<NodeId>,
    /// Parent node, `None` for roots
    pub parent: Option<NodeId>,
    /// 1-based line number in the source text
    pub line: usize,
}

impl Node {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Color name, if any
    pub fn color_name(&self) -> Option<&str> {
        self.color.as_ref().map(Color::as_str)
    }
}

/// An ordered collection of trees.
///
/// The forest owns every node; nodes refer to each other by [`NodeId`] only,
/// so a node can never be reachable from two parents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node under `parent` (or as a new root) and return its id
    pub fn push(
        &mut self,
        label: String,
        color: Option<Color>,
        parent: Option<NodeId>,
        line: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = match parent {
            Some(p) => self.nodes[p.0].depth + 1,
            None => 0,
        };
        self.nodes.push(Node {
            label,
            color,
            depth,
            children: Vec::new(),
            parent,
            line,
        });
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Root nodes in source order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in source order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Parent -> child pairs in source order of the child
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.iter()
            .filter_map(|(id, node)| node.parent.map(|parent| (parent, id)))
    }

    /// Node ids of the tree under `root` grouped by depth
    pub fn levels(&self, root: NodeId) -> Vec<Vec<NodeId>> {
        let mut levels: Vec<Vec<NodeId>> = Vec::new();
        let base = self.nodes.get(root.0).map_or(0, |n| n.depth);
        self.walk_tree(root, |id, node| {
            let level = node.depth - base;
            if levels.len() <= level {
                levels.resize_with(level + 1, Vec::new);
            }
            levels[level].push(id);
        });
        levels
    }

    /// Depth-first pre-order visit of every tree
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, &Node),
    {
        for &root in &self.roots {
            self.walk_tree(root, &mut f);
        }
    }

    /// Depth-first pre-order visit of the tree under `start`
    pub fn walk_tree<F>(&self, start: NodeId, mut f: F)
    where
        F: FnMut(NodeId, &Node),
    {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id.0) else {
                continue;
            };
            f(id, node);
            stack.extend(node.children.iter().rev().copied());
        }
    }
}

/// Alias table declared by the optional `[alias:color, ...]` header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAliases {
    entries: Vec<(String, Option<Color>)>,
}

impl ColorAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias. Returns `false` if the alias is already declared.
    pub fn insert(&mut self, alias: impl Into<String>, color: Option<Color>) -> bool {
        let alias = alias.into();
        if self.contains(&alias) {
            return false;
        }
        self.entries.push((alias, color));
        true
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.iter().any(|(a, _)| a == alias)
    }

    /// Look up an alias. The outer `Option` is the lookup, the inner one is
    /// the color (`None` for an alias mapped to `_`).
    pub fn get(&self, alias: &str) -> Option<Option<&Color>> {
        self.entries
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, c)| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aliases in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Color>)> {
        self.entries.iter().map(|(a, c)| (a.as_str(), c.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(name: &str) -> Option<Color> {
        Color::parse(name)
    }

    #[test]
    fn test_push_links_parent_and_child() {
        let mut forest = Forest::new();
        let robot = forest.push("Robot".into(), color("black"), None, 1);
        let battery = forest.push("Battery".into(), color("firebrick"), Some(robot), 2);

        assert_eq!(forest.roots(), &[robot]);
        assert_eq!(forest.children(robot), &[battery]);
        assert_eq!(forest.parent(battery), Some(robot));
        assert_eq!(forest.get(battery).unwrap().depth, 1);
        assert!(forest.get(robot).unwrap().is_root());
    }

    #[test]
    fn test_walk_is_preorder() {
        let mut forest = Forest::new();
        let a = forest.push("A".into(), None, None, 1);
        let b = forest.push("B".into(), None, Some(a), 2);
        forest.push("C".into(), None, Some(b), 3);
        forest.push("D".into(), None, Some(a), 4);
        forest.push("E".into(), None, None, 5);

        let mut labels = Vec::new();
        forest.walk(|_, node| labels.push(node.label.clone()));
        assert_eq!(labels, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_levels_group_by_depth() {
        let mut forest = Forest::new();
        let a = forest.push("A".into(), None, None, 1);
        let b = forest.push("B".into(), None, Some(a), 2);
        let c = forest.push("C".into(), None, Some(b), 3);
        let d = forest.push("D".into(), None, Some(a), 4);

        assert_eq!(forest.levels(a), vec![vec![a], vec![b, d], vec![c]]);
    }

    #[test]
    fn test_edges_follow_source_order() {
        let mut forest = Forest::new();
        let a = forest.push("A".into(), None, None, 1);
        let b = forest.push("B".into(), None, Some(a), 2);
        let c = forest.push("C".into(), None, Some(a), 3);

        assert_eq!(forest.edges().collect::<Vec<_>>(), vec![(a, b), (a, c)]);
    }

    #[test]
    fn test_aliases_reject_duplicates() {
        let mut aliases = ColorAliases::new();
        assert!(aliases.insert("p", color("firebrick")));
        assert!(!aliases.insert("p", color("black")));
        assert!(aliases.insert("n", None));

        assert_eq!(aliases.get("p").flatten().map(Color::as_str), Some("firebrick"));
        assert_eq!(aliases.get("n"), Some(None));
        assert_eq!(aliases.get("x"), None);
    }
}

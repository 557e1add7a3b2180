//! Two-phase trie nodes.
//!
//! [`NodeBuilder`] is the mutable build-phase node: children are created on
//! demand while rules are inserted along their reversed label paths.
//! [`Node`] is the frozen query-phase node: the child map is fixed at
//! freeze time and only ever read afterwards. Freezing consumes the
//! builder, so no mutable alias can survive into the query phase.

use std::collections::HashMap;

use crate::rule::{Rule, WILDCARD};

/// Mutable trie node used while inserting rules.
#[derive(Default)]
pub(crate) struct NodeBuilder {
    rule: Option<Rule>,
    children: HashMap<String, NodeBuilder>,
}

impl NodeBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Walk `path` from this node, creating missing children, and return
    /// the node at the end of the path. Labels must already be lower-cased.
    pub(crate) fn descendant_mut(&mut self, path: &[String]) -> &mut NodeBuilder {
        let mut node = self;
        for label in path {
            node = node
                .children
                .entry(label.clone())
                .or_insert_with(NodeBuilder::new);
        }
        node
    }

    pub(crate) fn set_rule(&mut self, rule: Rule) {
        self.rule = Some(rule);
    }

    /// Convert this subtree into its immutable form.
    pub(crate) fn freeze(self) -> Node {
        Node {
            rule: self.rule,
            children: self
                .children
                .into_iter()
                .map(|(label, child)| (label, child.freeze()))
                .collect(),
        }
    }
}

/// Immutable trie node used for lookups.
pub(crate) struct Node {
    rule: Option<Rule>,
    children: HashMap<String, Node>,
}

impl Node {
    /// Collect every rule on any node reachable from here along
    /// `reversed_labels`, exploring the literal child and the wildcard
    /// child as independent branches.
    pub(crate) fn collect_matches<'a>(
        &'a self,
        reversed_labels: &[&str],
        matches: &mut Vec<&'a Rule>,
    ) {
        let Some((label, rest)) = reversed_labels.split_first() else {
            return;
        };

        if let Some(child) = self.children.get(*label) {
            if let Some(rule) = &child.rule {
                matches.push(rule);
            }
            child.collect_matches(rest, matches);
        }

        if *label != WILDCARD {
            if let Some(wildcard) = self.children.get(WILDCARD) {
                if let Some(rule) = &wildcard.rule {
                    matches.push(rule);
                }
                wildcard.collect_matches(rest, matches);
            }
        }
    }

    /// Collect every rule in this subtree.
    pub(crate) fn collect_rules<'a>(&'a self, rules: &mut Vec<&'a Rule>) {
        if let Some(rule) = &self.rule {
            rules.push(rule);
        }
        for child in self.children.values() {
            child.collect_rules(rules);
        }
    }
}

//! Scene graph: node storage, the identifier registry and late-bound
//! attach/detach.
//!
//! The [`Scene`] owns every node. Nodes refer to their children by
//! [`NodeKey`], and the registry maps identifiers to keys so a parent can
//! attach a child by name. Nodes are never removed from the scene, so a key
//! stays valid for the scene's whole lifetime.

mod dispatch;
mod node;

pub use node::SceneNode;

use std::collections::HashMap;

use thiserror::Error;

/// Scene errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("Unknown node identifier: {0}")]
    UnknownIdentifier(String),
    #[error("Attaching {child} under {parent} would create a cycle")]
    WouldCycle { parent: String, child: String },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Handle to a node stored in a [`Scene`].
///
/// A key is only meaningful for the scene that returned it. Looking it up in
/// any other scene ([`Scene::node`], [`Scene::node_mut`]) panics or yields an
/// unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(usize);

impl NodeKey {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owner of all scene nodes plus the identifier registry.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    registry: HashMap<String, NodeKey>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and register it under its identifier.
    ///
    /// An identifier that is already registered is repointed to the new
    /// node; the old node stays in the scene and in any child list that
    /// already holds it.
    pub fn insert(&mut self, node: SceneNode) -> NodeKey {
        let key = NodeKey(self.nodes.len());
        let id = node.id().to_string();
        self.nodes.push(node);
        self.register(id, key);
        key
    }

    /// Point `id` at `key`, replacing any earlier registration.
    pub fn register(&mut self, id: impl Into<String>, key: NodeKey) {
        let id = id.into();
        if let Some(previous) = self.registry.insert(id.clone(), key) {
            if previous != key {
                log::debug!("Identifier {:?} re-registered: {:?} -> {:?}", id, previous, key);
            }
        }
    }

    /// Look up the node registered under `id`.
    pub fn resolve(&self, id: &str) -> SceneResult<NodeKey> {
        self.registry
            .get(id)
            .copied()
            .ok_or_else(|| SceneError::UnknownIdentifier(id.to_string()))
    }

    /// Append the node registered as `id` to `parent`'s children.
    pub fn attach(&mut self, parent: NodeKey, id: &str) -> SceneResult<()> {
        let child = self.resolve(id)?;
        if child == parent || self.is_descendant(child, parent) {
            return Err(SceneError::WouldCycle {
                parent: self.node(parent).id().to_string(),
                child: id.to_string(),
            });
        }
        self.node_mut(parent).children.push(child);
        Ok(())
    }

    /// Remove the node registered as `id` from `parent`'s children.
    ///
    /// Not being a child of `parent` is not an error.
    pub fn detach(&mut self, parent: NodeKey, id: &str) -> SceneResult<()> {
        let child = self.resolve(id)?;
        self.node_mut(parent).children.retain(|&c| c != child);
        Ok(())
    }

    /// Check if `node` appears anywhere in the subtree under `root`.
    pub fn is_descendant(&self, root: NodeKey, node: NodeKey) -> bool {
        let mut stack: Vec<NodeKey> = self.node(root).children.clone();
        while let Some(key) = stack.pop() {
            if key == node {
                return true;
            }
            stack.extend_from_slice(&self.node(key).children);
        }
        false
    }

    /// Get a node by key.
    ///
    /// # Panics
    ///
    /// Panics if `key` was not handed out by this scene and is out of range.
    pub fn node(&self, key: NodeKey) -> &SceneNode {
        &self.nodes[key.0]
    }

    pub fn node_mut(&mut self, key: NodeKey) -> &mut SceneNode {
        &mut self.nodes[key.0]
    }

    /// Get the node registered under `id`.
    pub fn get(&self, id: &str) -> Option<&SceneNode> {
        self.registry.get(id).map(|&key| self.node(key))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SceneNode> {
        let key = *self.registry.get(id)?;
        Some(self.node_mut(key))
    }

    /// Number of nodes stored, including ones no longer registered.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Keys of all stored nodes in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        (0..self.nodes.len()).map(NodeKey)
    }
}

//! Wrapped creators and the per-kind creator registry.

use crate::core::EventObject;
use crate::creator::{validate_payload, CreatorError, CreatorKind};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for raw creator functions.
///
/// A creator receives positional JSON arguments and returns the payload
/// fields of a message. It must return an object and must not supply the
/// `type` discriminant itself.
pub type CreatorFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A creator bound to its registry key.
///
/// Wrapping happens exactly once, at model construction. Invoking the
/// wrapped creator runs the underlying function, validates its return
/// value, then builds the tagged object: payload fields first, the tag
/// injected last, so the discriminant always reflects the registry key.
#[derive(Clone)]
pub struct WrappedCreator {
    kind: CreatorKind,
    key: String,
    inner: CreatorFn,
}

impl WrappedCreator {
    pub(crate) fn new(kind: CreatorKind, key: String, inner: CreatorFn) -> Self {
        Self { kind, key, inner }
    }

    /// The creator family this entry belongs to.
    pub fn kind(&self) -> CreatorKind {
        self.kind
    }

    /// The registry key, which is also the discriminant of every object
    /// this creator produces.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Invoke the underlying creator and return the tagged object.
    ///
    /// Calling twice with identical arguments yields structurally equal
    /// results, provided the underlying creator is pure.
    ///
    /// # Errors
    ///
    /// Returns a [`CreatorError`] when the creator's return value breaks
    /// the contract (non-object, or a user-supplied `type` field).
    pub fn create(&self, args: &[Value]) -> Result<EventObject, CreatorError> {
        let raw = (self.inner)(args);
        let fields = validate_payload(self.kind, &self.key, raw)?;
        Ok(EventObject::new(self.key.clone(), fields))
    }
}

/// Immutable mapping from type-key to wrapped creator for one kind.
///
/// Built once at model construction; lookups and invocations are the only
/// operations afterwards.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use statemodel::Model;
///
/// let model = Model::builder(0i64)
///     .event("login", |args| json!({ "user": args[0] }))
///     .build()
///     .unwrap();
///
/// let event = model.events().create("login", &[json!("ada")]).unwrap();
/// assert_eq!(event.event_type(), "login");
/// assert_eq!(event.get("user"), Some(&json!("ada")));
/// ```
#[derive(Clone)]
pub struct CreatorRegistry {
    kind: CreatorKind,
    creators: HashMap<String, WrappedCreator>,
}

impl CreatorRegistry {
    pub(crate) fn new(kind: CreatorKind) -> Self {
        Self {
            kind,
            creators: HashMap::new(),
        }
    }

    /// Wrap and store a creator under its key. Key uniqueness is the
    /// builder's responsibility.
    pub(crate) fn insert(&mut self, key: String, creator: CreatorFn) {
        let wrapped = WrappedCreator::new(self.kind, key.clone(), creator);
        self.creators.insert(key, wrapped);
    }

    /// The creator family this registry holds.
    pub fn kind(&self) -> CreatorKind {
        self.kind
    }

    /// Look up the wrapped creator for a key.
    pub fn get(&self, key: &str) -> Option<&WrappedCreator> {
        self.creators.get(key)
    }

    /// Whether a creator is registered under the key.
    pub fn contains(&self, key: &str) -> bool {
        self.creators.contains_key(key)
    }

    /// Invoke the creator registered under `key`.
    ///
    /// # Errors
    ///
    /// [`CreatorError::UnknownCreator`] when no creator is registered under
    /// the key, otherwise whatever the wrapped creator reports.
    pub fn create(&self, key: &str, args: &[Value]) -> Result<EventObject, CreatorError> {
        let creator = self.get(key).ok_or_else(|| CreatorError::UnknownCreator {
            kind: self.kind,
            key: key.to_string(),
        })?;
        creator.create(args)
    }

    /// All registered type-keys, sorted for stable listings.
    pub fn types(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.creators.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered creators.
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    /// Whether the registry holds no creators.
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

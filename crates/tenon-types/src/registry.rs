//! Class registry
//!
//! Append-only store of class metadata, indexed by id with a name
//! map. Populated at startup; the resolver only ever reads it, so a
//! shared `Arc<ClassRegistry>` needs no locking.

use rustc_hash::FxHashMap;

use crate::class::Class;

/// Registry of runtime classes
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Classes indexed by id
    classes: Vec<Class>,
    /// Class name to id mapping
    name_to_id: FxHashMap<String, usize>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            name_to_id: FxHashMap::default(),
        }
    }

    /// Register a class; its id must equal `next_class_id()`
    pub fn register_class(&mut self, class: Class) -> usize {
        let id = class.id;
        let name = class.name.clone();

        self.classes.push(class);
        self.name_to_id.insert(name, id);

        id
    }

    /// Get class by id
    pub fn get_class(&self, id: usize) -> Option<&Class> {
        self.classes.get(id)
    }

    /// Get class by name
    pub fn get_class_by_name(&self, name: &str) -> Option<&Class> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.classes.get(*id))
    }

    /// Next available class id
    pub fn next_class_id(&self) -> usize {
        self.classes.len()
    }

    /// Direct ancestor of a class, if any
    pub fn superclass_of(&self, id: usize) -> Option<&Class> {
        self.get_class(id)
            .and_then(|class| class.parent_id)
            .and_then(|parent| self.get_class(parent))
    }

    /// Ancestor chain for a class: the class itself first, the root
    /// ancestor last.
    pub fn class_hierarchy(&self, class_id: usize) -> Vec<&Class> {
        let mut hierarchy = Vec::new();
        let mut current_id = Some(class_id);

        while let Some(id) = current_id {
            match self.get_class(id) {
                Some(class) => {
                    hierarchy.push(class);
                    current_id = class.parent_id;
                }
                None => break,
            }
        }

        hierarchy
    }

    /// Check whether `sub_id` is `super_id` or one of its descendants
    pub fn is_subclass_of(&self, sub_id: usize, super_id: usize) -> bool {
        if sub_id == super_id {
            return true;
        }

        let mut current_id = sub_id;
        while let Some(class) = self.get_class(current_id) {
            match class.parent_id {
                Some(parent_id) if parent_id == super_id => return true,
                Some(parent_id) => current_id = parent_id,
                None => break,
            }
        }

        false
    }

    /// Iterate over all classes with their ids
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Class)> {
        self.classes.iter().enumerate()
    }
}

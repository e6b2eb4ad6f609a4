use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use crate::ir::{PropertyNode, SchemaMember, SchemaNode};

/// The flattened field set of a schema after folding in its `allOf` chain.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSchema<'a> {
    /// Fields in emission order: composed members first, the schema's own
    /// properties last. A later definition of a name replaces the earlier one
    /// in place.
    pub fields: IndexMap<&'a str, &'a PropertyNode>,
    pub required: IndexSet<&'a str>,
}

impl ResolvedSchema<'_> {
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }
}

/// Resolve the named schema. Returns `None` if no schema has that name.
pub fn resolve_schema<'a>(
    name: &str,
    schemas: &'a IndexMap<String, SchemaNode>,
) -> Option<ResolvedSchema<'a>> {
    let (key, schema) = schemas.get_key_value(name)?;
    let mut resolution = Resolution::new(schemas);
    resolution.seen.insert(key.as_str());
    resolution.fold(schema);
    Some(resolution.resolved)
}

/// Traversal state for one resolution call.
struct Resolution<'a> {
    schemas: &'a IndexMap<String, SchemaNode>,
    seen: HashSet<&'a str>,
    resolved: ResolvedSchema<'a>,
}

impl<'a> Resolution<'a> {
    fn new(schemas: &'a IndexMap<String, SchemaNode>) -> Self {
        Self {
            schemas,
            seen: HashSet::new(),
            resolved: ResolvedSchema::default(),
        }
    }

    fn fold(&mut self, node: &'a SchemaNode) {
        for member in &node.all_of {
            match member {
                SchemaMember::Ref(target) => {
                    if self.seen.contains(target.as_str()) {
                        continue;
                    }
                    let Some((key, schema)) = self.schemas.get_key_value(target.as_str()) else {
                        log::debug!("allOf reference `{target}` not found; skipped");
                        continue;
                    };
                    self.seen.insert(key.as_str());
                    self.fold(schema);
                }
                // Inline members contribute their own properties only.
                SchemaMember::Inline(inline) => self.fold_direct(inline),
            }
        }
        self.fold_direct(node);
    }

    fn fold_direct(&mut self, node: &'a SchemaNode) {
        for (name, prop) in &node.properties {
            self.resolved.fields.insert(name.as_str(), prop);
        }
        self.resolved
            .required
            .extend(node.required.iter().map(String::as_str));
    }
}

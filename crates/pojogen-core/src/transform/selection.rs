use std::cmp::Ordering;
use std::collections::HashSet;

use crate::ir::{Role, SpecDocument};
use crate::{CodeGenerator, GeneratedUnit};

/// Expand a selection of base schema names into generated units.
///
/// Each selected schema is emitted once per role it plays (request, response,
/// or a bare model when it plays neither). Every schema it refers to is
/// emitted as a bare model. Units are returned sorted by qualified name, and
/// no qualified name appears twice.
pub fn expand_selection<G: CodeGenerator>(
    document: &SpecDocument,
    selection: &[String],
    generator: &G,
) -> Result<Vec<GeneratedUnit>, G::Error> {
    let mut expansion = Expansion::new(document, generator);

    for name in selection {
        let Some(summary) = document.summary(name) else {
            log::warn!("selected schema `{name}` not found in document");
            continue;
        };
        for role in summary.roles() {
            expansion.schedule(name, role)?;
        }
    }

    let mut units = expansion.units;
    units.sort_by(|a, b| alphabetical(&a.name, &b.name));
    log::info!(
        "generated {} units from {} selected schemas",
        units.len(),
        selection.len()
    );
    Ok(units)
}

/// Case-insensitive order, with byte order breaking ties.
fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// State for one expansion run. Never shared between runs.
struct Expansion<'a, G> {
    document: &'a SpecDocument,
    generator: &'a G,
    processed: HashSet<String>,
    units: Vec<GeneratedUnit>,
}

impl<'a, G: CodeGenerator> Expansion<'a, G> {
    fn new(document: &'a SpecDocument, generator: &'a G) -> Self {
        Self {
            document,
            generator,
            processed: HashSet::new(),
            units: Vec::new(),
        }
    }

    fn schedule(&mut self, name: &str, role: Role) -> Result<(), G::Error> {
        if name.is_empty() {
            return Ok(());
        }
        let qualified = role.qualified_name(name);
        if self.processed.contains(&qualified) {
            return Ok(());
        }
        let document = self.document;
        let Some(schema) = document.schema(name) else {
            log::debug!("reference `{name}` has no schema; skipped");
            return Ok(());
        };
        self.processed.insert(qualified.clone());

        // Dependencies never carry a role.
        for dependency in schema.references() {
            self.schedule(dependency, Role::Model)?;
        }

        let code = self.generator.synthesize(document, name, role)?;
        self.units.push(GeneratedUnit {
            name: qualified,
            code,
        });
        Ok(())
    }
}

use crate::IdGenerator;

/// A name-keyed catalog of identifier generators that preserves registration
/// order.
///
/// The catalog is built once at startup with the known generators and read
/// thereafter. Registering a generator whose name is already present silently
/// replaces the earlier entry in place, keeping its original position; this
/// is accepted behavior, not an error.
#[derive(Default)]
pub struct GeneratorRegistry {
    entries: Vec<(&'static str, Box<dyn IdGenerator>)>,
}

impl GeneratorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `generator` under its own [`IdGenerator::name`], replacing any
    /// earlier entry with the same name.
    pub fn register(&mut self, generator: Box<dyn IdGenerator>) {
        let name = generator.name();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            Some(entry) => entry.1 = generator,
            None => self.entries.push((name, generator)),
        }
    }

    /// Looks up a generator by its catalog name.
    pub fn get(&self, name: &str) -> Option<&dyn IdGenerator> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, generator)| generator.as_ref())
    }

    /// Iterates the generators in registration order.
    pub fn list(&self) -> impl Iterator<Item = &dyn IdGenerator> {
        self.entries.iter().map(|(_, generator)| generator.as_ref())
    }

    /// Iterates the catalog names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no generators.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

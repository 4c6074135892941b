use std::fmt;

use super::resource::ResourceLocation;

/// The override chosen for an item: its position in the list and its model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Selection<'a> {
    index: usize,
    model: &'a ResourceLocation,
}

impl fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} -> {}", self.index, self.model)
    }
}

impl<'a> Selection<'a> {
    pub fn new(index: usize, model: &'a ResourceLocation) -> Self {
        Self { index, model }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn model(&self) -> &'a ResourceLocation {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selection() {
        let model = ResourceLocation::new("item/apple_golden");
        let s = Selection::new(2, &model);
        assert_eq!(s.index(), 2);
        assert_eq!(s.model().path(), "item/apple_golden");
        assert_eq!(s.to_string(), "#2 -> minecraft:item/apple_golden");
    }

    #[test]
    fn selection_equality() {
        let a = ResourceLocation::new("item/a");
        let b = ResourceLocation::new("item/b");
        assert_eq!(Selection::new(0, &a), Selection::new(0, &a));
        assert_ne!(Selection::new(0, &a), Selection::new(0, &b));
        assert_ne!(Selection::new(0, &a), Selection::new(1, &a));
    }
}

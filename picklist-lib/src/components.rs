//! Rendering slot table.
//!
//! The rendering layer is outside this crate, but it needs one place that
//! says which renderer to use for each part of the widget. [`Components`] is
//! that table. It is passed in at construction; a slot without an entry
//! resolves to the built-in renderer for that slot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Every overridable rendering slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentSlot {
    ClearIndicator,
    Control,
    DropdownIndicator,
    DownChevron,
    CrossIcon,
    Group,
    GroupHeading,
    IndicatorsContainer,
    IndicatorSeparator,
    Input,
    LoadingIndicator,
    Menu,
    MenuList,
    MenuPortal,
    LoadingMessage,
    NoOptionsMessage,
    MultiValue,
    MultiValueContainer,
    MultiValueLabel,
    MultiValueRemove,
    Option,
    Placeholder,
    SelectContainer,
    SingleValue,
    ValueContainer,
}

impl ComponentSlot {
    /// All slots, in declaration order.
    pub const ALL: [ComponentSlot; 25] = [
        Self::ClearIndicator,
        Self::Control,
        Self::DropdownIndicator,
        Self::DownChevron,
        Self::CrossIcon,
        Self::Group,
        Self::GroupHeading,
        Self::IndicatorsContainer,
        Self::IndicatorSeparator,
        Self::Input,
        Self::LoadingIndicator,
        Self::Menu,
        Self::MenuList,
        Self::MenuPortal,
        Self::LoadingMessage,
        Self::NoOptionsMessage,
        Self::MultiValue,
        Self::MultiValueContainer,
        Self::MultiValueLabel,
        Self::MultiValueRemove,
        Self::Option,
        Self::Placeholder,
        Self::SelectContainer,
        Self::SingleValue,
        Self::ValueContainer,
    ];
}

/// Which renderer a slot resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a, R> {
    /// A renderer supplied by the caller.
    Custom(&'a R),
    /// The built-in renderer for the slot.
    Default(ComponentSlot),
}

/// Renderer overrides keyed by slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Components<R> {
    overrides: BTreeMap<ComponentSlot, R>,
}

impl<R> Components<R> {
    /// No overrides; every slot uses its built-in renderer.
    pub fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Override one slot.
    pub fn with(mut self, slot: ComponentSlot, renderer: R) -> Self {
        self.overrides.insert(slot, renderer);
        self
    }

    /// Resolve the renderer for a slot.
    pub fn resolve(&self, slot: ComponentSlot) -> Resolved<'_, R> {
        match self.overrides.get(&slot) {
            Some(renderer) => Resolved::Custom(renderer),
            None => Resolved::Default(slot),
        }
    }

    /// Whether a slot is overridden.
    pub fn is_overridden(&self, slot: ComponentSlot) -> bool {
        self.overrides.contains_key(&slot)
    }

    /// Layer `overrides` on top of this table; later entries win.
    pub fn merged(mut self, overrides: Components<R>) -> Self {
        self.overrides.extend(overrides.overrides);
        self
    }
}

impl<R> Default for Components<R> {
    fn default() -> Self {
        Self::new()
    }
}

//! Style maps and style merging.
//!
//! A style is a JSON object of CSS-like properties. Each slot of the widget
//! may have a [`StyleFn`] that derives its style from a base style and the
//! slot's render props. [`merge_styles`] layers one set of slot functions on
//! top of another.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// CSS-like property map.
pub type Style = serde_json::Map<String, Value>;

/// Render-time props a style function may inspect (`isFocused`, ...).
pub type StyleProps = serde_json::Map<String, Value>;

/// Derives a slot's style from the base style and its props.
pub type StyleFn = Arc<dyn Fn(Style, &StyleProps) -> Style + Send + Sync>;

/// Styleable parts of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSlot {
    ClearIndicator,
    Container,
    Control,
    DropdownIndicator,
    Group,
    GroupHeading,
    IndicatorsContainer,
    IndicatorSeparator,
    Input,
    LoadingIndicator,
    LoadingMessage,
    Menu,
    MenuList,
    MenuPortal,
    MultiValue,
    MultiValueLabel,
    MultiValueRemove,
    NoOptionsMessage,
    Option,
    Placeholder,
    SingleValue,
    ValueContainer,
}

/// Style functions keyed by slot.
#[derive(Clone, Default)]
pub struct StylesConfig {
    styles: BTreeMap<StyleSlot, StyleFn>,
}

impl StylesConfig {
    /// Empty config; every slot keeps its base style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style function of a slot.
    pub fn with<F>(mut self, slot: StyleSlot, style: F) -> Self
    where
        F: Fn(Style, &StyleProps) -> Style + Send + Sync + 'static,
    {
        self.styles.insert(slot, Arc::new(style));
        self
    }

    /// Set a slot to merge fixed properties over its base style.
    pub fn with_overrides(self, slot: StyleSlot, overrides: Style) -> Self {
        self.with(slot, move |mut base, _| {
            base.extend(overrides.clone());
            base
        })
    }

    /// The style function of a slot.
    pub fn get(&self, slot: StyleSlot) -> Option<&StyleFn> {
        self.styles.get(&slot)
    }

    /// Whether a slot has a style function.
    pub fn contains(&self, slot: StyleSlot) -> bool {
        self.styles.contains_key(&slot)
    }

    /// Slots that have style functions, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = StyleSlot> + '_ {
        self.styles.keys().copied()
    }

    /// Compute the style of a slot. Slots without a function keep `base`.
    pub fn apply(&self, slot: StyleSlot, base: Style, props: &StyleProps) -> Style {
        match self.styles.get(&slot) {
            Some(style) => style(base, props),
            None => base,
        }
    }
}

impl fmt::Debug for StylesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.styles.keys()).finish()
    }
}

/// Layer `target` over `source`.
///
/// Slots present in both run the source function first and feed its output
/// to the target function. Slots present in only one side are taken as is.
pub fn merge_styles(source: &StylesConfig, target: &StylesConfig) -> StylesConfig {
    let mut merged = source.styles.clone();
    for (slot, target_fn) in &target.styles {
        let composed: StyleFn = match source.styles.get(slot) {
            Some(source_fn) => {
                let source_fn = Arc::clone(source_fn);
                let target_fn = Arc::clone(target_fn);
                Arc::new(move |base: Style, props: &StyleProps| {
                    target_fn(source_fn(base, props), props)
                })
            }
            None => Arc::clone(target_fn),
        };
        merged.insert(*slot, composed);
    }
    StylesConfig { styles: merged }
}

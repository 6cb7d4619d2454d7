use indexmap::IndexMap;
use smallvec::SmallVec;

use super::AttrSet;
use crate::SharedString;

/// One named option axis: a documented default plus per-value attributes.
#[derive(Debug, Clone)]
struct Axis {
    default: SharedString,
    values: IndexMap<SharedString, AttrSet>,
}

/// Attributes that apply only when every `(axis, value)` pair in the
/// selector matches the effective selection.
#[derive(Debug, Clone)]
struct CompoundRule {
    selector: SmallVec<[(SharedString, SharedString); 2]>,
    attrs: AttrSet,
}

/// A declarative variant table.
///
/// `resolve` merges, in order: base attributes, each axis's attributes for
/// the effective value (axes in declaration order), then every matching
/// compound rule (in declaration order). An omitted axis resolves to its
/// default; so does a value the axis never declared.
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    base: AttrSet,
    axes: IndexMap<SharedString, Axis>,
    compounds: Vec<CompoundRule>,
}

impl VariantTable {
    pub fn builder() -> VariantTableBuilder {
        VariantTableBuilder::default()
    }

    pub fn resolve(&self, selection: &[(&str, &str)]) -> AttrSet {
        let mut out = self.base.clone();
        let mut effective: IndexMap<&SharedString, &str> = IndexMap::new();

        for (name, axis) in &self.axes {
            let chosen = selection
                .iter()
                .find(|(axis_name, _)| *axis_name == name.as_str())
                .map(|(_, value)| *value)
                .filter(|value| axis.values.contains_key(*value));

            let value = chosen.unwrap_or(axis.default.as_str());

            if let Some(attrs) = axis.values.get(value) {
                out.merge(attrs);
            }

            effective.insert(name, value);
        }

        for rule in &self.compounds {
            let matches = rule
                .selector
                .iter()
                .all(|(axis, value)| effective.get(axis) == Some(&value.as_str()));

            if matches {
                out.merge(&rule.attrs);
            }
        }

        out
    }
}

#[derive(Debug, Default)]
pub struct VariantTableBuilder {
    base: AttrSet,
    axes: IndexMap<SharedString, Axis>,
    compounds: Vec<CompoundRule>,
}

impl VariantTableBuilder {
    pub fn base(mut self, attrs: AttrSet) -> Self {
        self.base = attrs;
        self
    }

    pub fn axis<N, D, I, V>(mut self, name: N, default: D, values: I) -> Self
    where
        N: Into<SharedString>,
        D: Into<SharedString>,
        I: IntoIterator<Item = (V, AttrSet)>,
        V: Into<SharedString>,
    {
        self.axes.insert(
            name.into(),
            Axis {
                default: default.into(),
                values: values
                    .into_iter()
                    .map(|(value, attrs)| (value.into(), attrs))
                    .collect(),
            },
        );
        self
    }

    pub fn compound<I, A, V>(mut self, selector: I, attrs: AttrSet) -> Self
    where
        I: IntoIterator<Item = (A, V)>,
        A: Into<SharedString>,
        V: Into<SharedString>,
    {
        self.compounds.push(CompoundRule {
            selector: selector
                .into_iter()
                .map(|(axis, value)| (axis.into(), value.into()))
                .collect(),
            attrs,
        });
        self
    }

    pub fn build(self) -> VariantTable {
        VariantTable {
            base: self.base,
            axes: self.axes,
            compounds: self.compounds,
        }
    }
}

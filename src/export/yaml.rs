// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! YAML export of measures and parts.
//!
//! A measure exports as a single-entry mapping keyed by its name:
//!
//! ```yaml
//! kick:
//!   content:
//!   - true
//!   - false
//!   - null
//!   type: Measure
//! ```
//!
//! `On` is `true`, `Off` is `false` and `Unset` is null. Variations carry
//! `type: MeasureVariation`.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::arrangement::Part;
use crate::model::Measure;

/// Exported body of one measure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureDocument {
    /// One flag per step
    pub content: Vec<Option<bool>>,
    /// `Measure` or `MeasureVariation`
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl MeasureDocument {
    /// Build the export body for a measure
    pub fn from_measure(measure: &Measure) -> Self {
        Self {
            content: measure.contents().iter().map(|s| s.as_flag()).collect(),
            kind: measure.kind().type_name(),
        }
    }
}

/// Measure name mapped to its body
pub type NamedDocument = BTreeMap<String, MeasureDocument>;

fn named(measure: &Measure) -> NamedDocument {
    let mut doc = BTreeMap::new();
    doc.insert(measure.name().to_string(), MeasureDocument::from_measure(measure));
    doc
}

/// Export a measure or variation as YAML
pub fn export_measure(measure: &Measure) -> Result<String> {
    serde_yaml::to_string(&named(measure))
        .with_context(|| format!("Failed to export measure {:?}", measure.name()))
}

/// Export the base measure of every bar in a part, in bar order.
///
/// Variations are not merged; render the part first to export what it
/// sounds like.
pub fn export_part(part: &Part) -> Result<String> {
    let docs: Vec<NamedDocument> = part
        .bars()
        .iter()
        .map(|bar| named(bar.base_measure()))
        .collect();
    serde_yaml::to_string(&docs).with_context(|| format!("Failed to export part {:?}", part.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tristate::{Off, On};
    use serde_yaml::Value;

    fn entry<'a>(doc: &'a Value, name: &str) -> &'a Value {
        doc.get(name).unwrap()
    }

    #[test]
    fn test_document_flags() {
        let mut measure = Measure::new("mybar", 3);
        measure.set_note(0, On).unwrap();
        let doc = MeasureDocument::from_measure(&measure);
        assert_eq!(doc.content, vec![Some(true), Some(false), Some(false)]);
        assert_eq!(doc.kind, "Measure");
    }

    #[test]
    fn test_export_measure() {
        let mut measure = Measure::new("mybar", 3);
        measure.set_note(0, On).unwrap();

        let yaml = export_measure(&measure).unwrap();
        let doc: Value = serde_yaml::from_str(&yaml).unwrap();
        let body = entry(&doc, "mybar");

        assert_eq!(body["type"], Value::String("Measure".to_string()));
        assert_eq!(
            body["content"],
            serde_yaml::from_str::<Value>("[true, false, false]").unwrap()
        );
    }

    #[test]
    fn test_export_variation() {
        let mut measure = Measure::new("mybar", 3);
        let variation = measure.make_variation().unwrap();
        variation.set_note(0, Off).unwrap();
        variation.set_note(2, On).unwrap();

        let yaml = export_measure(variation).unwrap();
        let doc: Value = serde_yaml::from_str(&yaml).unwrap();
        let body = entry(&doc, "mybar-variant-0");

        assert_eq!(body["type"], Value::String("MeasureVariation".to_string()));
        assert_eq!(
            body["content"],
            serde_yaml::from_str::<Value>("[false, null, true]").unwrap()
        );
    }

    #[test]
    fn test_export_part() {
        let mut part = Part::new(2).with_name("verse");
        part.bar_mut(1)
            .unwrap()
            .base_measure_mut()
            .set_note(15, On)
            .unwrap();

        let yaml = export_part(&part).unwrap();
        let docs: Vec<Value> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(docs.len(), 2);

        let last = entry(&docs[1], "blank measure");
        assert_eq!(last["content"][15], Value::Bool(true));
        assert_eq!(last["content"][0], Value::Bool(false));
    }
}

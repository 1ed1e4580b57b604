//! # Provenance
//!
//! Walks a clause and everything that fed into it, producing a tree that can
//! be serialized next to a result or printed as an audit trail.
//!
//! ```rust
//! use formula_core::clauses::en_1993_1_1::{
//!     Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance,
//! };
//! use formula_core::provenance;
//!
//! let n_pl_rd = Form6Dot6DesignPlasticResistance::new(1000.0, 355.0, 1.0).unwrap();
//! let check = Form6Dot5UnityCheckTensileStrength::new(100_000.0, n_pl_rd).unwrap();
//!
//! let trail = provenance::trace(&check);
//! assert_eq!(trail.labels(), vec!["6.5", "6.6"]);
//! assert_eq!(trail.depth(), 2);
//! ```

use serde::Serialize;

use crate::formula::{Clause, Operand};
use crate::latex::DEFAULT_PRECISION;

/// One clause in a provenance tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvenanceNode {
    /// Formula number (e.g. "6.6")
    pub label: &'static str,
    /// Human-readable clause name
    pub name: &'static str,
    /// Citation of the source document
    pub citation: String,
    /// LaTeX symbol of the result
    pub return_symbol: &'static str,
    /// Rendered result (number, or OK / Not OK for checks)
    pub result: String,
    /// Unit of the result, empty for checks
    pub unit: String,
    /// Short rendering, `{symbol} {op} {result} {unit}`
    pub short: String,
    /// Inputs in declaration order
    pub inputs: Vec<ProvenanceInput>,
}

/// One named input of a [`ProvenanceNode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvenanceInput {
    /// Input name (e.g. `n_t_rd`)
    pub name: &'static str,
    /// LaTeX symbol, if the clause declares one for this input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    /// Numeric value used in the calculation
    pub value: f64,
    /// The formula or check the value came from, if it was not a plain number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ProvenanceNode>,
}

/// Trace `clause` and its inputs, rendering with the default precision
pub fn trace<C: Clause + ?Sized>(clause: &C) -> ProvenanceNode {
    trace_with_precision(clause, DEFAULT_PRECISION)
}

/// Trace `clause` and its inputs, rendering every node with `precision` decimals
pub fn trace_with_precision<C: Clause + ?Sized>(clause: &C, precision: usize) -> ProvenanceNode {
    let metadata = clause.metadata();
    let latex = clause.latex_with_precision(precision);

    let inputs = clause
        .inputs()
        .into_iter()
        .map(|input| ProvenanceInput {
            name: input.name,
            symbol: metadata.variable(input.name).map(|variable| variable.symbol),
            value: input.operand.value(),
            source: match input.operand {
                Operand::Value(_) => None,
                Operand::Formula(formula) => Some(trace_with_precision(formula.as_ref(), precision)),
                Operand::Check(check) => Some(trace_with_precision(check.as_ref(), precision)),
            },
        })
        .collect();

    ProvenanceNode {
        label: metadata.label,
        name: metadata.name,
        citation: metadata.source_document.citation(),
        return_symbol: metadata.return_symbol,
        short: latex.short(),
        result: latex.result,
        unit: latex.unit,
        inputs,
    }
}

impl ProvenanceNode {
    /// Number of clause levels, 1 for a clause fed only by plain numbers
    pub fn depth(&self) -> usize {
        1 + self
            .inputs
            .iter()
            .filter_map(|input| input.source.as_ref())
            .map(ProvenanceNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Labels of this clause and all upstream clauses, depth first
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = vec![self.label];
        for source in self.inputs.iter().filter_map(|input| input.source.as_ref()) {
            labels.extend(source.labels());
        }
        labels
    }

    /// Indented markdown list, one line per clause and per input
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        self.write_markdown(&mut output, 0);
        output
    }

    fn write_markdown(&self, output: &mut String, level: usize) {
        let indent = "  ".repeat(level);
        output.push_str(&format!(
            "{}- ({}) {} [{}]: `{}`\n",
            indent, self.label, self.name, self.citation, self.short
        ));

        for input in &self.inputs {
            let symbol = input.symbol.map(|symbol| format!(" `{}`", symbol)).unwrap_or_default();
            output.push_str(&format!("{}  - {}{} = {}\n", indent, input.name, symbol, input.value));
            if let Some(source) = &input.source {
                source.write_markdown(output, level + 2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::en_1992_1_1::Form3Dot15DesignCompressiveStrength;
    use crate::clauses::en_1993_1_1::{Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance};
    use std::sync::Arc;

    fn tension_check() -> Form6Dot5UnityCheckTensileStrength {
        let n_pl_rd = Form6Dot6DesignPlasticResistance::new(1000.0, 355.0, 1.0).unwrap();
        Form6Dot5UnityCheckTensileStrength::new(177_500.0, n_pl_rd).unwrap()
    }

    #[test]
    fn test_leaf_clause() {
        let f_cd = Form3Dot15DesignCompressiveStrength::new(1.0, 30.0, 1.5).unwrap();
        let node = trace(&f_cd);

        assert_eq!(node.label, "3.15");
        assert_eq!(node.citation, "EN 1992-1-1:2004");
        assert_eq!(node.result, "20.000");
        assert_eq!(node.unit, "MPa");
        assert_eq!(node.depth(), 1);
        assert_eq!(node.inputs.len(), 3);
        assert_eq!(node.inputs[1].symbol, Some("f_{ck}"));
        assert!(node.inputs.iter().all(|input| input.source.is_none()));
    }

    #[test]
    fn test_nested_clause() {
        let node = trace(&tension_check());

        assert_eq!(node.result, r"\text{OK}");
        assert_eq!(node.unit, "");
        assert_eq!(node.depth(), 2);
        assert_eq!(node.labels(), vec!["6.5", "6.6"]);

        let upstream = node.inputs[1].source.as_ref().unwrap();
        assert_eq!(upstream.short, "N_{pl,Rd} = 355000.000 N");
        assert_eq!(node.inputs[1].value, 355_000.0);
    }

    #[test]
    fn test_precision_reaches_upstream_nodes() {
        let node = trace_with_precision(&tension_check(), 0);
        let upstream = node.inputs[1].source.as_ref().unwrap();
        assert_eq!(upstream.result, "355000");
    }

    #[test]
    fn test_shared_upstream_traced_everywhere() {
        let n_pl_rd = Arc::new(Form6Dot6DesignPlasticResistance::new(1000.0, 355.0, 1.0).unwrap());
        let first = Form6Dot5UnityCheckTensileStrength::new(100_000.0, Arc::clone(&n_pl_rd)).unwrap();
        let second = Form6Dot5UnityCheckTensileStrength::new(400_000.0, Arc::clone(&n_pl_rd)).unwrap();

        assert_eq!(trace(&first).inputs[1].source, trace(&second).inputs[1].source);
        assert_eq!(trace(&second).result, r"\text{Not OK}");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(trace(&tension_check())).unwrap();

        assert_eq!(json["label"], "6.5");
        assert_eq!(json["inputs"][0]["name"], "n_ed");
        assert!(json["inputs"][0].get("source").is_none());
        assert_eq!(json["inputs"][1]["source"]["label"], "6.6");
        assert_eq!(json["inputs"][1]["source"]["inputs"][0]["symbol"], "A");
    }

    #[test]
    fn test_markdown() {
        let markdown = trace(&tension_check()).to_markdown();
        let lines: Vec<&str> = markdown.lines().collect();

        assert_eq!(
            lines[0],
            r"- (6.5) Tension Unity Check [EN 1993-1-1:2005]: `\text{CHECK} \to \text{OK}`"
        );
        assert_eq!(lines[1], "  - n_ed `N_{Ed}` = 177500");
        assert_eq!(lines[2], "  - n_t_rd `N_{t,Rd}` = 355000");
        assert_eq!(
            lines[3],
            "    - (6.6) Design Plastic Resistance [EN 1993-1-1:2005]: `N_{pl,Rd} = 355000.000 N`"
        );
        assert_eq!(lines[4], "      - a `A` = 1000");
        assert_eq!(lines.len(), 7);
    }
}

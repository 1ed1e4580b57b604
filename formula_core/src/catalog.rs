//! # Clause Catalog
//!
//! Every clause shipped by this crate, with lookup by source document and
//! label, and a generated markdown reference.
//!
//! ```rust
//! use formula_core::catalog;
//! use formula_core::formula::metadata::EN_1993_1_1_2005;
//!
//! let clause = catalog::find(EN_1993_1_1_2005, "6.6").unwrap();
//! assert_eq!(clause.return_symbol, "N_{pl,Rd}");
//! ```
//!
//! Regenerate the reference document with:
//!
//! ```bash
//! cargo run --bin gen-catalog
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::clauses::en_1992_1_1::{Form3Dot15DesignCompressiveStrength, Form3Dot16DesignTensileStrength};
use crate::clauses::en_1993_1_1::{
    Form6Dot10NcRdClass1And2And3, Form6Dot12UnityCheckBendingMoment, Form6Dot13MCRdClass1And2,
    Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance, Form6Dot9UnityCheckCompressiveStrength,
};
use crate::formula::metadata::{ClauseMetadata, SourceDocument};

/// Metadata of every clause, in document then formula order
pub static ALL_CLAUSES: &[&ClauseMetadata] = &[
    // EN 1992-1-1
    &Form3Dot15DesignCompressiveStrength::METADATA,
    &Form3Dot16DesignTensileStrength::METADATA,
    // EN 1993-1-1
    &Form6Dot5UnityCheckTensileStrength::METADATA,
    &Form6Dot6DesignPlasticResistance::METADATA,
    &Form6Dot9UnityCheckCompressiveStrength::METADATA,
    &Form6Dot10NcRdClass1And2And3::METADATA,
    &Form6Dot12UnityCheckBendingMoment::METADATA,
    &Form6Dot13MCRdClass1And2::METADATA,
];

type Index = HashMap<SourceDocument, HashMap<&'static str, &'static ClauseMetadata>>;

static INDEX: Lazy<Index> = Lazy::new(|| {
    let mut index: Index = HashMap::new();
    for clause in ALL_CLAUSES {
        index
            .entry(clause.source_document)
            .or_default()
            .insert(clause.label, *clause);
    }
    index
});

/// Look up a clause by document and formula label
pub fn find(document: SourceDocument, label: &str) -> Option<&'static ClauseMetadata> {
    INDEX.get(&document).and_then(|clauses| clauses.get(label)).copied()
}

/// All clauses of one document, in catalog order
pub fn in_document(document: SourceDocument) -> Vec<&'static ClauseMetadata> {
    ALL_CLAUSES
        .iter()
        .filter(|clause| clause.source_document == document)
        .copied()
        .collect()
}

/// Documents with at least one clause, in catalog order
pub fn documents() -> Vec<SourceDocument> {
    let mut documents: Vec<SourceDocument> = Vec::new();
    for clause in ALL_CLAUSES {
        if !documents.contains(&clause.source_document) {
            documents.push(clause.source_document);
        }
    }
    documents
}

/// Generate the markdown reference of all clauses.
pub fn generate_catalog_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Formulary Clause Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-catalog`

This document lists every formula and check implemented in `formula_core`,
grouped by source document. Symbols are given as they appear in the rendered
LaTeX; inputs are passed by the name in the **Input** column.

---

"#,
    );

    let documents = documents();

    for document in &documents {
        output.push_str(&format!("## {} ({})\n\n", document.citation(), document.short_form()));

        for clause in in_document(*document) {
            let kind = if clause.is_check() { "Check" } else { "Formula" };
            output.push_str(&format!("### ({}) {}\n\n", clause.label, clause.name));
            output.push_str(&format!("{}\n\n", clause.description));
            output.push_str(&format!(
                "**{}:** `{} {} {}`\n\n",
                kind,
                clause.return_symbol,
                if clause.is_check() { r"\to" } else { "=" },
                clause.equation
            ));
            output.push_str(&format!("**Unit:** {}\n\n", clause.unit));

            if !clause.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Input | Description | Units |\n");
                output.push_str("|--------|-------|-------------|-------|\n");
                for variable in clause.variables {
                    output.push_str(&format!(
                        "| `{}` | `{}` | {} | {} |\n",
                        variable.symbol, variable.name, variable.description, variable.unit
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}, formula ({})\n\n", document.citation(), clause.label));
            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Clauses:** {}\n- **Checks:** {}\n- **Documents:** {}\n",
        ALL_CLAUSES.len(),
        ALL_CLAUSES.iter().filter(|clause| clause.is_check()).count(),
        documents.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::metadata::{EN_1992_1_1_2004, EN_1993_1_1_2005};
    use std::collections::HashSet;

    #[test]
    fn test_all_clauses_have_metadata() {
        assert_eq!(ALL_CLAUSES.len(), 8);

        for clause in ALL_CLAUSES {
            assert!(!clause.label.is_empty());
            assert!(!clause.name.is_empty(), "Clause {} has no name", clause.label);
            assert!(!clause.equation.is_empty(), "Clause {} has no equation", clause.label);
            assert!(!clause.variables.is_empty(), "Clause {} has no variables", clause.label);
        }
    }

    #[test]
    fn test_every_variable_appears_in_its_equation() {
        for clause in ALL_CLAUSES {
            for variable in clause.variables {
                assert!(
                    clause.equation.contains(variable.symbol),
                    "Clause {}: symbol {} missing from equation",
                    clause.label,
                    variable.symbol
                );
            }
        }
    }

    #[test]
    fn test_labels_unique_per_document() {
        let mut seen = HashSet::new();
        for clause in ALL_CLAUSES {
            assert!(
                seen.insert((clause.source_document, clause.label)),
                "Duplicate clause {} in {}",
                clause.label,
                clause.source_document
            );
        }
    }

    #[test]
    fn test_find() {
        let clause = find(EN_1992_1_1_2004, "3.15").unwrap();
        assert_eq!(clause.name, "Design Compressive Strength");

        assert!(find(EN_1993_1_1_2005, "6.13").is_some());
        assert!(find(EN_1992_1_1_2004, "6.6").is_none());
        assert!(find(SourceDocument::Other("Unknown"), "1.1").is_none());
    }

    #[test]
    fn test_documents_in_catalog_order() {
        assert_eq!(documents(), vec![EN_1992_1_1_2004, EN_1993_1_1_2005]);
        assert_eq!(in_document(EN_1993_1_1_2005).len(), 6);
    }

    #[test]
    fn test_generate_catalog_markdown() {
        let markdown = generate_catalog_markdown();

        assert!(markdown.contains("# Formulary Clause Reference"));
        assert!(markdown.contains("## EN 1993-1-1:2005 (Eurocode 3)"));
        assert!(markdown.contains("### (6.6) Design Plastic Resistance"));
        assert!(markdown.contains(r"**Check:** `\text{CHECK} \to \frac{N_{Ed}}{N_{t,Rd}} \leq 1`"));
        assert!(markdown.contains("| `f_{ck}` | `f_ck` |"));
        assert!(markdown.contains("- **Total Clauses:** 8"));
        assert!(markdown.contains("- **Checks:** 3"));
    }
}

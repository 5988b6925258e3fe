//! Printable truth tables.
//!
//! ```
//! use entail_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let a = logic.mk_var("A");
//! let b = logic.mk_var("B");
//! let f = logic.mk_and(a, b);
//!
//! let table = logic.truth_table(&[f], &[a, b]);
//! assert_eq!(table.to_string(), "\
//! A B : f0
//! 0 0 : 0
//! 1 0 : 0
//! 0 1 : 0
//! 1 1 : 1
//! ");
//! ```

use std::fmt;

use crate::assignment::Assignment;
use crate::logic::Logic;
use crate::reference::Ref;

#[derive(Debug, Clone)]
pub struct TruthTableRow {
    pub assignment: Assignment,
    /// One output per expression, in the order the expressions were given.
    pub outputs: Vec<bool>,
}

/// Outputs of several expressions over every row of one variable list.
#[derive(Debug, Clone)]
pub struct TruthTable {
    var_names: Vec<String>,
    exprs: Vec<Ref>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    pub fn var_names(&self) -> &[String] {
        &self.var_names
    }

    pub fn exprs(&self) -> &[Ref] {
        &self.exprs
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Output column of the expression at position `col`.
    pub fn column(&self, col: usize) -> Vec<bool> {
        self.rows.iter().map(|r| r.outputs[col]).collect()
    }

    /// Rows on which the expression at position `col` is true.
    pub fn satisfying_rows(&self, col: usize) -> Vec<&Assignment> {
        self.rows
            .iter()
            .filter(|r| r.outputs[col])
            .map(|r| &r.assignment)
            .collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        let widths: Vec<usize> = self.var_names.iter().map(|n| n.chars().count().max(1)).collect();
        let labels: Vec<String> = (0..self.exprs.len()).map(|i| format!("f{}", i)).collect();

        let mut line = String::new();
        for (name, &w) in self.var_names.iter().zip(&widths) {
            write!(line, "{:<w$} ", name, w = w)?;
        }
        line.push(':');
        for label in &labels {
            write!(line, " {}", label)?;
        }
        writeln!(f, "{}", line.trim_end())?;

        for row in &self.rows {
            line.clear();
            for (vv, &w) in row.assignment.iter().zip(&widths) {
                write!(line, "{:<w$} ", vv.value as u8, w = w)?;
            }
            line.push(':');
            for (out, label) in row.outputs.iter().zip(&labels) {
                write!(line, " {:<w$}", *out as u8, w = label.len())?;
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl Logic {
    /// Evaluates every expression in `exprs` under every row over `variables`.
    pub fn truth_table(&self, exprs: &[Ref], variables: &[Ref]) -> TruthTable {
        let evaluators: Vec<_> = exprs.iter().map(|&f| self.evaluator(f)).collect();
        let var_names = self
            .ordered_vars(variables)
            .into_iter()
            .map(|v| self.var_name(v))
            .collect();

        let rows = self
            .combinations(variables)
            .map(|assignment| {
                self.assign(&assignment);
                let outputs = evaluators.iter().map(|ev| ev.eval()).collect();
                TruthTableRow { assignment, outputs }
            })
            .collect();

        TruthTable {
            var_names,
            exprs: exprs.to_vec(),
            rows,
        }
    }
}

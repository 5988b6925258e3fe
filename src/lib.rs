//! # entail-rs: truth-table entailment for propositional logic
//!
//! **`entail-rs`** decides whether a conclusion follows from a set of premises
//! by enumerating the truth table over a finite, ordered list of variables.
//!
//! ## How it works
//!
//! For an expression and an ordered variable list, the *truth set* is the list
//! of truth-table rows under which the expression is true. Rows are numbered
//! by reading the variable list as a binary counter (first variable = lowest
//! bit), so every truth set comes out sorted. Intersecting the premises' truth
//! sets is then a linear merge-join, and the argument is valid exactly when
//! that intersection is contained in the conclusion's truth set.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All expressions live in a [`Logic`][crate::logic::Logic] manager and are referred to by lightweight [`Ref`][crate::reference::Ref] handles. Identical subexpressions are shared.
//! - **Acyclic by Construction**: A node can only be built from existing children, so an expression can never refer to itself.
//! - **Five Connectives**: negation, conjunction, disjunction, implication and biconditional, with operator sugar (`&`, `|`, `!`, `>>`, `%`).
//! - **Stateful Variables**: Each variable holds a value; evaluation reads it, and applying a truth-table row writes it.
//!
//! ## Basic Usage
//!
//! ```rust
//! use entail_rs::argument::Argument;
//! use entail_rs::logic::Logic;
//!
//! let logic = Logic::default();
//!
//! let football = logic.mk_var("I played football");
//! let basketball = logic.mk_var("I played basketball");
//! let breakfast = logic.mk_var("I ate breakfast");
//! let happy = logic.mk_var("I am happy");
//!
//! let argument = Argument::new(
//!     logic.build(happy | football),
//!     [
//!         logic.build(football | breakfast),
//!         logic.build(breakfast | basketball),
//!         logic.build(happy % breakfast),
//!     ],
//! )
//! .unwrap();
//!
//! let vars = [football, basketball, breakfast, happy];
//! assert!(logic.valid(&vars, &argument));
//! assert!(logic.satisfiable(&vars, &argument));
//! ```
//!
//! ## Core Components
//!
//! - **[`logic`]**: The [`Logic`][crate::logic::Logic] manager, variables and connectives.
//! - **[`assignment`]**: Truth-table rows and their enumeration.
//! - **[`truth_set`]**: Truth sets and merge-join intersection.
//! - **[`argument`]**: Validity and satisfiability of arguments.
//! - **[`compare`]**, **[`truth_table`]**: Pointwise comparison and printable tables.
//! - **[`dot`]**: Graphviz rendering of expression DAGs.

pub mod argument;
pub mod assignment;
pub mod compare;
pub mod dot;
pub mod error;
pub mod eval;
pub mod logic;
pub mod node;
pub mod ops;
pub mod reference;
pub mod table;
pub mod truth_set;
pub mod truth_table;
pub mod types;
pub mod utils;

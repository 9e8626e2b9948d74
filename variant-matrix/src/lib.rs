//! Variant matrix engine
//!
//! Keeps the variant table of a physical product consistent while the
//! merchant edits its option groups (Color × Size × ...):
//!
//! - [`options`]: option group / value edits with the trailing-placeholder rule
//! - [`generate`]: cartesian product of active groups
//! - [`key`]: combination identifiers
//! - [`reconcile`]: carry entered price/quantity/SKU/weight across regenerations
//! - [`persisted`]: map stored variant rows onto combinations (edit flow)
//! - [`submit`]: update/create instructions for storage
//! - [`editor`]: session state tying it all together
//!
//! # Example
//!
//! ```
//! use variant_matrix::{EngineConfig, VariantEditor};
//!
//! let mut editor = VariantEditor::new(EngineConfig::default());
//! let color = editor.add_option_group().unwrap();
//! editor.rename_option_group(&color, "Color");
//! editor.push_option_value(&color, "Red");
//! editor.push_option_value(&color, "Blue");
//!
//! assert_eq!(editor.combinations().len(), 2);
//! ```

pub mod config;
pub mod editor;
pub mod generate;
pub mod key;
pub mod options;
pub mod persisted;
pub mod reconcile;
pub mod submit;

// Re-exports
pub use config::EngineConfig;
pub use editor::{FieldsPatch, VariantEditor};
pub use generate::generate_combinations;
pub use key::{CombinationKeyMode, KEY_SEPARATOR, combination_key};
pub use persisted::{PersistedIdMap, build_persisted_id_map, derive_option_groups};
pub use reconcile::{ReconcileReport, reconcile};
pub use submit::{SubmitPlan, build_create_instructions, build_update_instructions};

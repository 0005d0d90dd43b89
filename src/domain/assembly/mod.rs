//! Aggregate assembly: raw rows in, linked owner aggregates out.
//!
//! # Pipeline
//!
//! 1. [`owner_loader`] fetches owner rows, then one batched descendant fetch
//! 2. [`visit_collator`] groups visit rows per pet, most recent first
//! 3. [`pet_assembler`] resolves pet types and attaches collated visits
//! 4. [`graph_linker`] attaches pets to owners and visits to pets, checking ids
//!
//! Steps 2-4 are pure in-memory work. The only suspension points are the two
//! store fetches in step 1.

pub mod graph_linker;
pub mod owner_loader;
pub mod pet_assembler;
pub mod visit_collator;

pub use owner_loader::{assemble_owners, load_aggregates};
pub use pet_assembler::{PetTypeLookup, assemble_pets};
pub use visit_collator::{VisitsByPet, collate_visits};

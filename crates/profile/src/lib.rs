//! # bazi-profile
//!
//! Display-level derivations over a computed chart: enriched pillar
//! records, the per-element archetype profile keyed by the day
//! master, and the pairwise five-element interaction analysis.
//!
//! Everything here is pure table lookup and classification over the
//! read-only cycle constants; the returned records own their data and
//! never alias the static tables.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `enrich` | Enriched pillar/chart records and life-area table |
//! | `archetype` | Per-element personality archetypes |
//! | `interaction` | Pairwise element interaction classification |

mod archetype;
mod enrich;
mod interaction;

pub use archetype::{element_profile, ElementProfile};
pub use enrich::{EnrichedChart, EnrichedPillar, LifeArea};
pub use interaction::{
    classify_elements, pillar_interactions, ElementInteraction, ElementRelation, InteractionKind,
    InteractionStrength,
};

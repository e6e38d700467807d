//! # bazi-cycle
//!
//! Identity tables and index arithmetic for the sexagenary cycle:
//! the 10 heavenly stems, the 12 earthly branches, and the five
//! elements with their producing/controlling cycles.
//!
//! All types here are `Copy` value enums backed by fixed domain
//! constants. There is no configuration and no dynamic registration:
//! a stem's element or a branch's animal is the same in every build.
//!
//! Index arithmetic is always the non-negative remainder. The
//! [`Stem::from_cycle`] and [`Branch::from_cycle`] constructors accept
//! any `i64` (including negative offsets produced by subtraction) and
//! reduce it with `rem_euclid`, so downstream pillar arithmetic can
//! never observe an out-of-range index.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `element` | Five elements and yin/yang polarity |
//! | `stem` | Heavenly stems (0..=9) |
//! | `branch` | Earthly branches (0..=11) |
//! | `error` | Index validation errors |

mod branch;
mod element;
mod error;
mod stem;

pub use branch::Branch;
pub use element::{Element, Polarity};
pub use error::CycleError;
pub use stem::Stem;

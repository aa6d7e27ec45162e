//! Noise-tolerant percentage change classification for runrate.
//!
//! - [`ChangeCalculator`] - Compares an observed value with a reference value
//! - [`compute_change`] - One-shot comparison with an explicit threshold

#![doc(issue_tracker_base_url = "https://github.com/runrate-rs/runrate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calculator;

pub use calculator::{ChangeCalculator, compute_change, round_to_cents};

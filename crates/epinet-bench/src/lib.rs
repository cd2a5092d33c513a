//! Benchmark profiles for the epinet reaction-network framework.
//!
//! - [`metapopulation_profile`]: `patches` SIR patches coupled by spatial
//!   reactions between neighbouring patches, for highest-order and
//!   validation benchmarks at realistic network sizes.
//! - [`patch_states`]: deterministic initial populations, one state per patch.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use epinet_core::{Algorithm, CompartmentState, ReactionBinding, ReactionFamily};
use epinet_model::NetworkConfig;

/// Compartments per patch (S, I, R).
pub const PATCH_COMPARTMENTS: u32 = 3;

/// Build a metapopulation network of `patches` SIR patches on a ring.
///
/// Per patch: infection (second order), recovery (first order), and one
/// spatial reaction per compartment towards the next patch. Compartment
/// `3 * p + k` is compartment `k` of patch `p`.
pub fn metapopulation_profile(patches: u32, algorithm: Algorithm) -> NetworkConfig {
    let mut cfg = NetworkConfig::new((patches * PATCH_COMPARTMENTS) as usize, algorithm)
        .parameter(0.3)
        .parameter(0.1)
        .parameter(0.01);
    for p in 0..patches {
        let base = p * PATCH_COMPARTMENTS;
        let next = ((p + 1) % patches) * PATCH_COMPARTMENTS;
        cfg = cfg
            .reaction(
                base,
                base + 1,
                ReactionBinding::new(ReactionFamily::SecondOrder, [0]),
            )
            .reaction(
                base + 1,
                base + 2,
                ReactionBinding::new(ReactionFamily::FirstOrder, [1]),
            );
        for k in 0..PATCH_COMPARTMENTS {
            cfg = cfg.reaction(
                base + k,
                next + k,
                ReactionBinding::new(ReactionFamily::Spatial, [2]),
            );
        }
    }
    cfg
}

/// One state per patch with a deterministic pseudo-random outbreak.
pub fn patch_states(patches: usize, seed: u64) -> Vec<CompartmentState> {
    (0..patches as u64)
        .map(|p| {
            let infected = (p.wrapping_add(seed).wrapping_mul(6364136223846793007) >> 58) + 1;
            CompartmentState::from_counts(vec![1000 - infected, infected, 0])
        })
        .collect()
}

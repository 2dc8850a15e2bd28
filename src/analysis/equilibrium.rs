//! Equilibrium analysis for the heterozygote-advantage regime.
//!
//! With the heterozygote fitter than both homozygotes, selection balances
//! the two alleles at a stable interior equilibrium instead of fixing one.
//! The equilibrium depends only on the selection coefficients against the
//! homozygotes, measured relative to the heterozygote.

use crate::base::AlleleFrequencies;
use crate::evolution::GenotypeFitness;

/// Analytic equilibrium allele frequencies under heterozygote advantage.
///
/// With selection coefficients `s_a = w_AS - w_AA` and `s_s = w_AS - w_SS`
/// (both measured against the heterozygote), the stable interior equilibrium
/// is `freq_s = s_a / (s_a + s_s)`. The deterministic trajectory converges
/// toward this point from any starting state with both alleles present.
///
/// Returns `None` when the fitness table admits no stable interior
/// equilibrium, i.e. when the heterozygote is not strictly fitter than both
/// homozygotes.
pub fn equilibrium_frequencies(fitness: &GenotypeFitness) -> Option<AlleleFrequencies> {
    if !fitness.has_heterozygote_advantage() {
        return None;
    }
    let s_a = *fitness.heterozygous - *fitness.homozygous_a;
    let s_s = *fitness.heterozygous - *fitness.homozygous_s;
    let freq_s = s_a / (s_a + s_s);
    Some(AlleleFrequencies::new_unchecked(1.0 - freq_s, freq_s))
}

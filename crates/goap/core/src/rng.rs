//! Injected randomness for the agent's initial conditions.
//!
//! The core never touches a process-wide generator. Callers pick an
//! [`RngOracle`] and a seed, so the same seed always yields the same start.
//!
//! # Determinism
//!
//! Every implementation must map a seed to a single value. Replaying a run
//! only requires the seed recorded alongside it; there is no hidden state to
//! restore.

/// Deterministic random source.
///
/// Implementations must return the same value for the same seed. The oracle
/// is stateless: successive draws use successive seeds, not internal state.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    ///
    /// Zero sides is treated as a one-sided die, so the roll is always 1.
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: a 64-bit linear congruential step followed by
/// an output permutation that yields 32 bits.
///
/// # Properties
///
/// - **Deterministic**: one seed, one output
/// - **Cheap**: a multiply, an add, a xorshift and a rotate per draw
/// - **Small**: the whole state is the 64-bit seed
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// LCG multiplier (Knuth's MMIX constant).
    const MULTIPLIER: u64 = 6364136223846793005;

    /// LCG increment; must be odd.
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = state * MULTIPLIER + INCREMENT (mod 2^64)`
    #[inline]
    fn advance(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output: fold the high bits down with a xorshift, then rotate by
    /// the top five bits of the state.
    #[inline]
    fn permute(state: u64) -> u32 {
        let folded = ((state ^ (state >> 18)) >> 27) as u32;
        folded.rotate_right((state >> 59) as u32)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::permute(Self::advance(seed))
    }
}

/// Decides whether a new agent starts under attack, with odds of one in
/// `one_in`. Odds of one in 1 (or 0) always attack.
pub fn roll_under_attack<R: RngOracle + ?Sized>(rng: &R, seed: u64, one_in: u32) -> bool {
    let attacked = rng.roll_die(seed, one_in) == 1;
    tracing::debug!(seed, one_in, attacked, "rolled initial attack");
    attacked
}

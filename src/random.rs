//! Process-wide random number generator.
//!
//! The generator is seeded exactly once per process: either explicitly through
//! [`init_process_rng`] at startup, or from OS entropy on first use. Later
//! calls draw from the same stream and never reseed.

use log::{debug, warn};
use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

static PROCESS_RNG: OnceCell<Mutex<StdRng>> = OnceCell::new();

fn seeded(seed: Option<u64>) -> Mutex<StdRng> {
    let rng = match seed {
        Some(seed) => {
            debug!("Seeding process RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            debug!("Seeding process RNG from OS entropy");
            StdRng::from_entropy()
        }
    };
    Mutex::new(rng)
}

/// Seed the process generator. Returns `false` when it was already seeded,
/// in which case the existing stream is kept.
pub fn init_process_rng(seed: Option<u64>) -> bool {
    let mut initialised_here = false;
    PROCESS_RNG.get_or_init(|| {
        initialised_here = true;
        seeded(seed)
    });

    if !initialised_here {
        warn!("Process RNG already seeded, ignoring new seed {:?}", seed);
    }
    initialised_here
}

/// Run `f` with exclusive access to the process generator
pub fn with_process_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    let rng = PROCESS_RNG.get_or_init(|| seeded(None));
    // A panic while holding the lock leaves the generator itself intact.
    let mut guard = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

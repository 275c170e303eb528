//! # Random Number Generation
//!
//! [`SimRng`] wraps a seeded PRNG and remembers its seed so a run can be
//! logged and replayed.
//!
//! ```rust
//! use econ_sim::rng::SimRng;
//!
//! let mut rng = SimRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

pub mod prng;

pub use prng::SimRng;

//! This library implements the building blocks of [Gaussian Process](https://en.wikipedia.org/wiki/Gaussian_process)
//! regression models needed for inference and for hyperparameters optimization by maximum marginal likelihood:
//! covariance kernels defining the GP prior over functions and likelihoods relating latent function values
//! to observations.
//!
//! Every strictly positive hyperparameter is handled through its logarithm so that optimizers
//! work on an unconstrained domain: [Kernel] and [Likelihood] implementations expose their
//! hyperparameters as a flat vector of log values and give gradients with respect to those values.
//!
//! Covariance computations accept either the raw design matrix or precomputed
//! [PairwiseStats] through [KernelData], the statistics being reused as long as the
//! kernel requires the same [StatsKind].
//!
//! # Example
//!
//! ```
//! use gpkit_gp::{Kernel, KernelData, Likelihood, PairwiseStats};
//! use gpkit_gp::kernels::PolynomialKernel;
//! use gpkit_gp::likelihoods::GaussianLikelihood;
//! use ndarray::array;
//!
//! let x = array![[0.1, 0.5], [0.7, -0.2], [-0.4, 0.9]];
//! let y = array![0.3, 1.2, -0.5];
//!
//! // quadratic kernel with c = 1 and sigma^2 = 1
//! let kernel = PolynomialKernel::new(0., 0., 2);
//! let stats = PairwiseStats::inner_products(&x);
//! let data = KernelData::cached(&stats);
//!
//! let k = kernel.cov_matrix(&data).expect("covariance matrix");
//! let dk = kernel.grad_stack(&data).expect("covariance gradients");
//! assert_eq!((3, 3, kernel.num_params()), dk.dim());
//!
//! let lik = GaussianLikelihood::new(-1.);
//! let f = k.column(0).to_owned();
//! let logp = lik.log_density(&f, &y).expect("log density");
//! let dlogp_df = lik.dlog_density_df(&f, &y).expect("log density derivatives");
//! assert_eq!(logp.len(), dlogp_df.len());
//! ```
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod errors;
pub mod kernels;
pub mod likelihoods;

mod parameters;
mod utils;

pub use errors::*;
pub use kernels::Kernel;
pub use likelihoods::Likelihood;
pub use parameters::*;
pub use utils::{KernelData, PairwiseStats, Prior, StatsKind};

//! A module for covariance kernels of the GP prior.
//!
//! Kernel hyperparameters are exposed as a flat vector of logarithms of the natural,
//! strictly positive, parameters so that an optimizer can search an unconstrained domain.
//! Gradients are given with respect to those log-parameters.
//!
//! The following kernels are implemented:
//! * polynomial.

use crate::errors::{GpError, Result};
use crate::utils::{KernelData, Prior, StatsKind};
use linfa::Float;
use log::debug;
use ndarray::{Array1, Array2, Array3, ArrayBase, Axis, Data, Ix1, Ix2, Zip, array};
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trait for covariance kernels used in GP regression
pub trait Kernel<F: Float>: Clone + fmt::Display + Sync {
    /// Number of optimizable hyperparameters
    fn num_params(&self) -> usize;

    /// Current hyperparameters as log values
    fn params(&self) -> Array1<F>;

    /// Set hyperparameters from log values.
    /// Fails with [`GpError::ParameterCountError`] unless `params.len() == self.num_params()`
    fn set_params(&mut self, params: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()>;

    /// Pairwise statistics the kernel is a function of
    fn stats_kind(&self) -> StatsKind;

    /// Covariance `k(x, y)` between two points
    fn cov(
        &self,
        x: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<F>;

    /// Covariance (n_obs, n_obs) matrix of the training data
    fn cov_matrix(&self, data: &KernelData<F>) -> Result<Array2<F>>;

    /// Cross covariance (n1, n2) matrix between points given as (n1, nx) and (n2, nx) arrays
    fn cross_cov(
        &self,
        x1: &ArrayBase<impl Data<Elem = F>, Ix2>,
        x2: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array2<F>>;

    /// Derivative of the covariance matrix entry `K[i, j]` with respect to
    /// the `p`-th log hyperparameter
    fn dkij_dtheta(&self, data: &KernelData<F>, i: usize, j: usize, p: usize) -> Result<F>;

    /// Gradients of the covariance matrix with respect to all log hyperparameters
    /// as a (n_obs, n_obs, num_params) array where `[i, j, p]` is `dkij_dtheta(data, i, j, p)`
    fn grad_stack(&self, data: &KernelData<F>) -> Result<Array3<F>>;
}

/// Polynomial kernel
///
/// `k(x, y) = sigma^2 * (c + x.y)^degree`
///
/// where `c > 0` is an offset, `sigma^2` the signal variance and `degree` a fixed
/// integer which is not part of the optimized hyperparameters.
/// Hyperparameters are `[log(c), log(sigma)]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct PolynomialKernel<F: Float> {
    /// Offset
    c: F,
    /// Signal variance
    sigma2: F,
    /// Polynomial degree
    degree: u32,
    /// Priors on the log hyperparameters
    #[cfg_attr(feature = "serializable", serde(default))]
    priors: Vec<Prior<F>>,
}

impl<F: Float> Default for PolynomialKernel<F> {
    fn default() -> Self {
        PolynomialKernel::new(F::zero(), F::zero(), 2)
    }
}

impl<F: Float> PolynomialKernel<F> {
    /// Number of log hyperparameters: `log(c)` and `log(sigma)`
    pub const N_PARAMS: usize = 2;

    /// Constructor from `log(c)`, `log(sigma)` and the polynomial degree
    pub fn new(log_c: F, log_sigma: F, degree: u32) -> Self {
        PolynomialKernel {
            c: log_c.exp(),
            sigma2: (F::cast(2.) * log_sigma).exp(),
            degree,
            priors: Vec::new(),
        }
    }

    /// Get offset
    pub fn c(&self) -> F {
        self.c
    }

    /// Get signal variance
    pub fn sigma2(&self) -> F {
        self.sigma2
    }

    /// Get polynomial degree
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Get priors on the log hyperparameters, empty at construction
    pub fn priors(&self) -> &[Prior<F>] {
        &self.priors
    }

    /// Covariance given the inner product `t` of two points
    fn cov_at(&self, t: F) -> F {
        self.sigma2 * powu(self.c + t, self.degree)
    }

    /// Covariance derivative with respect to `log(c)` given the inner product `t`:
    /// `c * degree * sigma^2 * (c + t)^(degree - 1)`
    fn dk_dlogc_at(&self, t: F) -> F {
        if self.degree == 0 {
            F::zero()
        } else {
            self.c
                * F::cast(self.degree)
                * self.sigma2
                * powu(self.c + t, self.degree - 1)
        }
    }

    /// Covariance derivative with respect to `log(sigma)` given the inner product `t`
    fn dk_dlogsigma_at(&self, t: F) -> F {
        F::cast(2.) * self.cov_at(t)
    }

    /// Covariance derivative with respect to the `p`-th log hyperparameter
    /// given the inner product `t`. Raw and cached data only differ in the way `t` is obtained.
    fn dk_dtheta_at(&self, t: F, p: usize) -> Result<F> {
        match p {
            0 => Ok(self.dk_dlogc_at(t)),
            1 => Ok(self.dk_dlogsigma_at(t)),
            _ => Err(GpError::InvalidValueError(format!(
                "hyperparameter index {p} out of range, {} has {} hyperparameters",
                self,
                Self::N_PARAMS
            ))),
        }
    }
}

/// `base^n` for any `u32` exponent, `powi` taking an `i32`
fn powu<F: Float>(base: F, n: u32) -> F {
    match i32::try_from(n) {
        Ok(n) => base.powi(n),
        Err(_) => {
            let p = base.abs().powf(F::cast(n));
            if base < F::zero() && n % 2 == 1 { -p } else { p }
        }
    }
}

impl<F: Float> Kernel<F> for PolynomialKernel<F> {
    fn num_params(&self) -> usize {
        Self::N_PARAMS
    }

    fn params(&self) -> Array1<F> {
        array![self.c.ln(), self.sigma2.ln() / F::cast(2.)]
    }

    fn set_params(&mut self, params: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()> {
        GpError::check_param_count(Self::N_PARAMS, params.len())?;
        self.c = params[0].exp();
        self.sigma2 = (F::cast(2.) * params[1]).exp();
        Ok(())
    }

    fn stats_kind(&self) -> StatsKind {
        StatsKind::InnerProduct
    }

    fn cov(
        &self,
        x: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<F> {
        GpError::check_same_len("points", x.len(), y.len())?;
        Ok(self.cov_at(x.dot(y)))
    }

    fn cov_matrix(&self, data: &KernelData<F>) -> Result<Array2<F>> {
        let xtx = data.inner_products()?;
        let mut k = Array2::<F>::zeros(xtx.raw_dim());
        Zip::from(&mut k)
            .and(&xtx)
            .par_for_each(|kij, &t| *kij = self.cov_at(t));
        Ok(k)
    }

    fn cross_cov(
        &self,
        x1: &ArrayBase<impl Data<Elem = F>, Ix2>,
        x2: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array2<F>> {
        GpError::check_same_len("points dimension", x1.ncols(), x2.ncols())?;
        let mut k = x1.dot(&x2.t());
        k.par_mapv_inplace(|t| self.cov_at(t));
        Ok(k)
    }

    fn dkij_dtheta(&self, data: &KernelData<F>, i: usize, j: usize, p: usize) -> Result<F> {
        let t = data.inner_product(i, j)?;
        self.dk_dtheta_at(t, p)
    }

    fn grad_stack(&self, data: &KernelData<F>) -> Result<Array3<F>> {
        let xtx = data.inner_products()?;
        let n_obs = xtx.nrows();
        let mut grads = Array3::<F>::zeros((n_obs, n_obs, Self::N_PARAMS));
        Zip::from(grads.lanes_mut(Axis(2)))
            .and(&xtx)
            .par_for_each(|mut dk, &t| {
                dk[0] = self.dk_dlogc_at(t);
                dk[1] = self.dk_dlogsigma_at(t);
            });
        debug!("{self} gradients computed for {n_obs} observations");
        Ok(grads)
    }
}

impl<F: Float> fmt::Display for PolynomialKernel<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Polynomial(c={}, sigma2={}, degree={})",
            self.c, self.sigma2, self.degree
        )
    }
}

//! A module for likelihood models relating the latent GP values `f` to observations `y`.
//!
//! Observations are independent given `f`: all quantities are computed
//! observation-wise and returned as vectors aligned with `f` and `y`.
//!
//! The following likelihoods are implemented:
//! * gaussian (additive observation noise),
//! * poisson (counts with log link).

use crate::errors::{GpError, Result};
use crate::utils::Prior;
use linfa::Float;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Zip, array};
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A trait for likelihood models used in GP regression
pub trait Likelihood<F: Float>: Clone + fmt::Display + Sync {
    /// Number of optimizable hyperparameters
    fn num_params(&self) -> usize;

    /// Current hyperparameters as log values
    fn params(&self) -> Array1<F>;

    /// Set hyperparameters from log values.
    /// Fails with [`GpError::ParameterCountError`] unless `params.len() == self.num_params()`
    fn set_params(&mut self, params: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()>;

    /// Log density `log p(y_i | f_i)` of each observation
    fn log_density(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>>;

    /// Derivative of the log density of each observation with respect to its latent value `f_i`
    fn dlog_density_df(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>>;

    /// Derivatives of the log density of each observation with respect to the log hyperparameters
    /// as a (n_obs, num_params) array
    fn dlog_density_dtheta(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array2<F>>;

    /// Mean of the observations given latent values
    fn mean(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F>;

    /// Variance of the observations given latent values
    fn variance(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F>;

    /// Predictive mean and variance of the observations given
    /// the predictive mean and variance of the latent values
    fn predict_obs(
        &self,
        f_mean: &ArrayBase<impl Data<Elem = F>, Ix1>,
        f_var: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<(Array1<F>, Array1<F>)>;
}

/// Gaussian likelihood
///
/// `y = f + e` with `e ~ N(0, sigma^2)`. Hyperparameter is `[log(sigma)]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct GaussianLikelihood<F: Float> {
    /// Observation noise standard deviation
    sigma: F,
    /// Priors on the log hyperparameters
    #[cfg_attr(feature = "serializable", serde(default))]
    priors: Vec<Prior<F>>,
}

impl<F: Float> Default for GaussianLikelihood<F> {
    fn default() -> Self {
        GaussianLikelihood::new(F::cast(Self::DEFAULT_LOG_SIGMA))
    }
}

impl<F: Float> GaussianLikelihood<F> {
    /// Default `log(sigma)` value
    pub const DEFAULT_LOG_SIGMA: f64 = -2.;

    /// Constructor from `log(sigma)`
    pub fn new(log_sigma: F) -> Self {
        GaussianLikelihood {
            sigma: log_sigma.exp(),
            priors: Vec::new(),
        }
    }

    /// Get noise standard deviation
    pub fn sigma(&self) -> F {
        self.sigma
    }

    /// Get priors on the log hyperparameters, empty at construction
    pub fn priors(&self) -> &[Prior<F>] {
        &self.priors
    }
}

impl<F: Float> Likelihood<F> for GaussianLikelihood<F> {
    fn num_params(&self) -> usize {
        1
    }

    fn params(&self) -> Array1<F> {
        array![self.sigma.ln()]
    }

    fn set_params(&mut self, params: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()> {
        GpError::check_param_count(1, params.len())?;
        self.sigma = params[0].exp();
        Ok(())
    }

    /// `-0.5 * log(2 pi) - log(sigma) - 0.5 * ((y - f) / sigma)^2`
    fn log_density(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>> {
        GpError::check_same_len("latent values and observations", f.len(), y.len())?;
        let log_norm = F::cast(0.5 * (2. * std::f64::consts::PI).ln()) + self.sigma.ln();
        let half = F::cast(0.5);
        Ok(Zip::from(f)
            .and(y)
            .map_collect(|&fi, &yi| -log_norm - half * ((yi - fi) / self.sigma).powi(2)))
    }

    fn dlog_density_df(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>> {
        GpError::check_same_len("latent values and observations", f.len(), y.len())?;
        let sigma2 = self.sigma * self.sigma;
        Ok(Zip::from(f).and(y).map_collect(|&fi, &yi| (yi - fi) / sigma2))
    }

    /// `sigma * (-1 / sigma + (y - f)^2 / sigma^3)`
    fn dlog_density_dtheta(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array2<F>> {
        GpError::check_same_len("latent values and observations", f.len(), y.len())?;
        let sigma = self.sigma;
        let dtheta = Zip::from(f).and(y).map_collect(|&fi, &yi| {
            sigma * (-F::one() / sigma + (yi - fi).powi(2) / sigma.powi(3))
        });
        Ok(dtheta.insert_axis(Axis(1)))
    }

    fn mean(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        f.to_owned()
    }

    fn variance(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        Array1::from_elem(f.len(), self.sigma * self.sigma)
    }

    fn predict_obs(
        &self,
        f_mean: &ArrayBase<impl Data<Elem = F>, Ix1>,
        f_var: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<(Array1<F>, Array1<F>)> {
        GpError::check_same_len("predictive means and variances", f_mean.len(), f_var.len())?;
        let sigma2 = self.sigma * self.sigma;
        Ok((f_mean.to_owned(), f_var.mapv(|v| v + sigma2)))
    }
}

impl<F: Float> fmt::Display for GaussianLikelihood<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Gaussian(sigma={})", self.sigma)
    }
}

/// Poisson likelihood
///
/// `y ~ Poisson(exp(f))` for non-negative integer counts `y`, no hyperparameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(into = "String"),
    serde(try_from = "String")
)]
pub struct PoissonLikelihood();

impl<F: Float> Likelihood<F> for PoissonLikelihood {
    fn num_params(&self) -> usize {
        0
    }

    fn params(&self) -> Array1<F> {
        Array1::zeros(0)
    }

    fn set_params(&mut self, params: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()> {
        GpError::check_param_count(0, params.len())
    }

    /// `y * f - exp(f) - log(gamma(1 + y))`
    fn log_density(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>> {
        GpError::check_same_len("latent values and observations", f.len(), y.len())?;
        Ok(Zip::from(f)
            .and(y)
            .map_collect(|&fi, &yi| yi * fi - fi.exp() - ln_factorial(yi)))
    }

    fn dlog_density_df(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>> {
        GpError::check_same_len("latent values and observations", f.len(), y.len())?;
        Ok(Zip::from(f).and(y).map_collect(|&fi, &yi| yi - fi.exp()))
    }

    fn dlog_density_dtheta(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array2<F>> {
        GpError::check_same_len("latent values and observations", f.len(), y.len())?;
        Ok(Array2::zeros((f.len(), 0)))
    }

    fn mean(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        f.mapv(F::exp)
    }

    fn variance(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        f.mapv(F::exp)
    }

    /// Moments of the counts when `f ~ N(mu, v)`, `exp(f)` being log-normal:
    /// * `E[y] = exp(mu + v / 2)`
    /// * `Var[y] = E[y] + (exp(v) - 1) * exp(2 mu + v)`
    fn predict_obs(
        &self,
        f_mean: &ArrayBase<impl Data<Elem = F>, Ix1>,
        f_var: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<(Array1<F>, Array1<F>)> {
        GpError::check_same_len("predictive means and variances", f_mean.len(), f_var.len())?;
        let half = F::cast(0.5);
        let two = F::cast(2.);
        let mean = Zip::from(f_mean)
            .and(f_var)
            .map_collect(|&mu, &v| (mu + half * v).exp());
        let var = Zip::from(&mean)
            .and(f_mean)
            .and(f_var)
            .map_collect(|&m, &mu, &v| m + v.exp_m1() * (two * mu + v).exp());
        Ok((mean, var))
    }
}

/// `log(y!)` computed as `log(gamma(1 + y))`
///
/// `y` is expected to be a non-negative integer count. It is not checked:
/// fractional values give the gamma function interpolation and negative ones
/// may hit the poles of `lgamma`.
fn ln_factorial<F: Float>(y: F) -> F {
    let y = y.to_f64().unwrap_or(f64::NAN);
    F::cast(libm::lgamma(1. + y))
}

/// A closed set of likelihood models which can be handled uniformly
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum LikelihoodModel<F: Float> {
    /// Gaussian likelihood
    Gaussian(GaussianLikelihood<F>),
    /// Poisson likelihood
    Poisson(PoissonLikelihood),
}

impl<F: Float> Default for LikelihoodModel<F> {
    fn default() -> Self {
        LikelihoodModel::Gaussian(GaussianLikelihood::default())
    }
}

impl<F: Float> From<GaussianLikelihood<F>> for LikelihoodModel<F> {
    fn from(lik: GaussianLikelihood<F>) -> Self {
        LikelihoodModel::Gaussian(lik)
    }
}

impl<F: Float> From<PoissonLikelihood> for LikelihoodModel<F> {
    fn from(lik: PoissonLikelihood) -> Self {
        LikelihoodModel::Poisson(lik)
    }
}

impl<F: Float> Likelihood<F> for LikelihoodModel<F> {
    fn num_params(&self) -> usize {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.num_params(),
            LikelihoodModel::Poisson(lik) => Likelihood::<F>::num_params(lik),
        }
    }

    fn params(&self) -> Array1<F> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.params(),
            LikelihoodModel::Poisson(lik) => lik.params(),
        }
    }

    fn set_params(&mut self, params: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.set_params(params),
            LikelihoodModel::Poisson(lik) => lik.set_params(params),
        }
    }

    fn log_density(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.log_density(f, y),
            LikelihoodModel::Poisson(lik) => lik.log_density(f, y),
        }
    }

    fn dlog_density_df(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.dlog_density_df(f, y),
            LikelihoodModel::Poisson(lik) => lik.dlog_density_df(f, y),
        }
    }

    fn dlog_density_dtheta(
        &self,
        f: &ArrayBase<impl Data<Elem = F>, Ix1>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array2<F>> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.dlog_density_dtheta(f, y),
            LikelihoodModel::Poisson(lik) => lik.dlog_density_dtheta(f, y),
        }
    }

    fn mean(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.mean(f),
            LikelihoodModel::Poisson(lik) => lik.mean(f),
        }
    }

    fn variance(&self, f: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.variance(f),
            LikelihoodModel::Poisson(lik) => lik.variance(f),
        }
    }

    fn predict_obs(
        &self,
        f_mean: &ArrayBase<impl Data<Elem = F>, Ix1>,
        f_var: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<(Array1<F>, Array1<F>)> {
        match self {
            LikelihoodModel::Gaussian(lik) => lik.predict_obs(f_mean, f_var),
            LikelihoodModel::Poisson(lik) => lik.predict_obs(f_mean, f_var),
        }
    }
}

impl fmt::Display for PoissonLikelihood {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Poisson")
    }
}

impl From<PoissonLikelihood> for String {
    fn from(_item: PoissonLikelihood) -> String {
        "Poisson".to_string()
    }
}

impl TryFrom<String> for PoissonLikelihood {
    type Error = &'static str;
    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        if s == "Poisson" {
            Ok(Self::default())
        } else {
            Err("Bad string value for PoissonLikelihood, should be \'Poisson\'")
        }
    }
}

impl<F: Float> fmt::Display for LikelihoodModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LikelihoodModel::Gaussian(lik) => write!(f, "{lik}"),
            LikelihoodModel::Poisson(lik) => write!(f, "{lik}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use finitediff::vec;

    #[test]
    fn test_gaussian_log_density() {
        let lik = GaussianLikelihood::new(0.);
        let logp = lik.log_density(&array![0.], &array![1.]).unwrap();
        assert_abs_diff_eq!(-1.4189385332046727, logp[0], epsilon = 1e-10);
    }

    #[test]
    fn test_gaussian_log_density_scaled() {
        // sigma = 2, residual = 1
        let lik = GaussianLikelihood::new(f64::ln(2.));
        let logp = lik.log_density(&array![1.5, -1.], &array![0.5, -1.]).unwrap();
        let log_norm = 0.5 * (2. * std::f64::consts::PI).ln() + f64::ln(2.);
        assert_abs_diff_eq!(
            array![-log_norm - 0.125, -log_norm],
            logp,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_gaussian_params() {
        let lik = GaussianLikelihood::new(-0.8);
        assert_abs_diff_eq!(array![-0.8], lik.params(), epsilon = 1e-12);
        assert_eq!(1, lik.num_params());

        assert!(lik.priors().is_empty());

        let mut lik = GaussianLikelihood::<f64>::default();
        assert!(lik.priors().is_empty());
        assert_abs_diff_eq!((-2f64).exp(), lik.sigma(), epsilon = 1e-12);
        lik.set_params(&array![0.3]).unwrap();
        assert_abs_diff_eq!(0.3f64.exp(), lik.sigma(), epsilon = 1e-12);
        assert!(lik.priors().is_empty());
        assert_eq!(
            Err(GpError::ParameterCountError {
                expected: 1,
                actual: 2
            }),
            lik.set_params(&array![0.3, 0.1])
        );
        assert!(lik.set_params(&Array1::<f64>::zeros(0)).is_err());
    }

    #[test]
    fn test_gaussian_dimension_mismatch() {
        let lik = GaussianLikelihood::<f64>::default();
        let f = array![0., 1.];
        let y = array![0.];
        assert!(matches!(
            lik.log_density(&f, &y),
            Err(GpError::DimensionMismatch(_))
        ));
        assert!(lik.dlog_density_df(&f, &y).is_err());
        assert!(lik.dlog_density_dtheta(&f, &y).is_err());
        assert!(lik.predict_obs(&f, &y).is_err());
    }

    #[test]
    fn test_gaussian_moments() {
        let lik = GaussianLikelihood::new(f64::ln(0.5));
        let f = array![-1., 0., 2.5];
        assert_eq!(f, lik.mean(&f));
        assert_abs_diff_eq!(array![0.25, 0.25, 0.25], lik.variance(&f), epsilon = 1e-12);

        let (mean, var) = lik.predict_obs(&f, &array![0.1, 0.2, 0.]).unwrap();
        assert_eq!(f, mean);
        assert_abs_diff_eq!(array![0.35, 0.45, 0.25], var, epsilon = 1e-12);
    }

    fn check_dlog_density_df(lik: &impl Likelihood<f64>, f: Vec<f64>, y: Array1<f64>) {
        let dlogp = lik.dlog_density_df(&Array1::from(f.clone()), &y).unwrap();
        // observations are independent: gradient of the sum is the vector of derivatives
        let logp_sum = |f: &Vec<f64>| -> std::result::Result<f64, anyhow::Error> {
            Ok(lik.log_density(&Array1::from(f.clone()), &y)?.sum())
        };
        let grad_central = vec::central_diff(&logp_sum)(&f).unwrap();
        for (analytic, fdiff) in dlogp.iter().zip(grad_central.iter()) {
            assert_relative_eq!(*analytic, *fdiff, max_relative = 1e-5, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_gaussian_dlog_density_df() {
        let lik = GaussianLikelihood::new(-0.3);
        check_dlog_density_df(&lik, vec![-1.2, 0., 0.7, 2.1], array![0.4, -0.5, 0.7, 1.]);
    }

    #[test]
    fn test_poisson_dlog_density_df() {
        let lik = PoissonLikelihood::default();
        check_dlog_density_df(&lik, vec![-1.2, 0., 0.7, 2.1], array![0., 2., 1., 7.]);
    }

    #[test]
    fn test_gaussian_dlog_density_dtheta() {
        let f = array![-1.2, 0., 0.7, 2.1];
        let y = array![0.4, -0.5, 0.7, 1.];
        let lik = GaussianLikelihood::new(-0.3);
        let dtheta = lik.dlog_density_dtheta(&f, &y).unwrap();
        assert_eq!((4, 1), dtheta.dim());
        for i in 0..f.len() {
            let logp_i = |theta: &Vec<f64>| -> std::result::Result<f64, anyhow::Error> {
                let lik = GaussianLikelihood::new(theta[0]);
                Ok(lik.log_density(&f, &y)?[i])
            };
            let grad_central = vec::central_diff(&logp_i)(&vec![-0.3]).unwrap();
            assert_relative_eq!(dtheta[[i, 0]], grad_central[0], max_relative = 1e-5);
        }
    }

    #[test]
    fn test_poisson_log_density() {
        let lik = PoissonLikelihood::default();
        let logp = lik.log_density(&array![0.], &array![2.]).unwrap();
        assert_abs_diff_eq!(-1. - f64::ln(2.), logp[0], epsilon = 1e-10);
        assert_abs_diff_eq!(-1.6931471805599454, logp[0], epsilon = 1e-10);

        // log(3!) = log(6)
        let logp = lik.log_density(&array![1.], &array![3.]).unwrap();
        assert_abs_diff_eq!(3. - 1f64.exp() - 6f64.ln(), logp[0], epsilon = 1e-10);
    }

    #[test]
    fn test_ln_factorial() {
        assert_abs_diff_eq!(0., ln_factorial(0.), epsilon = 1e-12);
        assert_abs_diff_eq!(120f64.ln(), ln_factorial(5.), epsilon = 1e-10);
        // fractional counts fall back to the gamma function, Gamma(1.5) = sqrt(pi) / 2
        assert_abs_diff_eq!(
            (std::f64::consts::PI.sqrt() / 2.).ln(),
            ln_factorial(0.5),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_poisson_params() {
        let mut lik = PoissonLikelihood::default();
        assert_eq!(0, Likelihood::<f64>::num_params(&lik));
        assert_eq!(0, Likelihood::<f64>::params(&lik).len());
        assert!(lik.set_params(&Array1::<f64>::zeros(0)).is_ok());
        assert_eq!(
            Err(GpError::ParameterCountError {
                expected: 0,
                actual: 1
            }),
            lik.set_params(&array![1.])
        );
        let dtheta = lik
            .dlog_density_dtheta(&array![0., 1.], &array![1., 2.])
            .unwrap();
        assert_eq!((2, 0), dtheta.dim());
    }

    #[test]
    fn test_poisson_moments() {
        let lik = PoissonLikelihood::default();
        let f = array![-1., 0., 1.5];
        let rate = f.mapv(f64::exp);
        assert_abs_diff_eq!(rate, lik.mean(&f), epsilon = 1e-12);
        assert_abs_diff_eq!(rate, lik.variance(&f), epsilon = 1e-12);

        // no latent uncertainty: plain poisson moments
        let (mean, var) = lik.predict_obs(&f, &array![0., 0., 0.]).unwrap();
        assert_abs_diff_eq!(rate, mean, epsilon = 1e-12);
        assert_abs_diff_eq!(rate, var, epsilon = 1e-12);

        let (mean, var) = lik.predict_obs(&array![0.5], &array![0.4]).unwrap();
        let expected_mean = 0.7f64.exp();
        assert_abs_diff_eq!(expected_mean, mean[0], epsilon = 1e-12);
        let expected_var = expected_mean + (0.4f64.exp() - 1.) * 1.4f64.exp();
        assert_abs_diff_eq!(expected_var, var[0], epsilon = 1e-12);
    }

    #[test]
    fn test_likelihood_model_dispatch() {
        let f = array![-0.5, 0.3, 1.1];
        let y = array![0., 1., 4.];

        let gaussian = GaussianLikelihood::new(-0.4);
        let mut model = LikelihoodModel::from(gaussian.clone());
        assert_eq!(1, model.num_params());
        assert_eq!(
            gaussian.log_density(&f, &y).unwrap(),
            model.log_density(&f, &y).unwrap()
        );
        model.set_params(&array![0.2]).unwrap();
        assert_abs_diff_eq!(array![0.2], model.params(), epsilon = 1e-12);
        assert_eq!(
            GaussianLikelihood::new(0.2).dlog_density_dtheta(&f, &y).unwrap(),
            model.dlog_density_dtheta(&f, &y).unwrap()
        );

        let poisson = PoissonLikelihood::default();
        let model = LikelihoodModel::<f64>::from(poisson);
        assert_eq!(0, model.num_params());
        assert_eq!(
            poisson.dlog_density_df(&f, &y).unwrap(),
            model.dlog_density_df(&f, &y).unwrap()
        );
        assert_eq!(poisson.mean(&f), model.mean(&f));
        assert_eq!("Poisson", model.to_string());
    }

    #[test]
    fn test_likelihood_display() {
        assert_eq!("Gaussian(sigma=1)", GaussianLikelihood::<f64>::new(0.).to_string());
        assert_eq!("Poisson", PoissonLikelihood().to_string());
        assert_eq!(
            Ok(PoissonLikelihood()),
            PoissonLikelihood::try_from("Poisson".to_string())
        );
        assert!(PoissonLikelihood::try_from("Gaussian".to_string()).is_err());
    }

    #[cfg(feature = "serializable")]
    #[test]
    fn test_likelihood_save_load() {
        let model = LikelihoodModel::from(GaussianLikelihood::new(-0.7));
        let data = serde_json::to_string(&model).unwrap();
        let loaded: LikelihoodModel<f64> = serde_json::from_str(&data).unwrap();
        assert_abs_diff_eq!(model.params(), loaded.params(), epsilon = 1e-12);
        match loaded {
            LikelihoodModel::Gaussian(lik) => assert!(lik.priors().is_empty()),
            LikelihoodModel::Poisson(_) => panic!("gaussian likelihood expected"),
        }

        let data = serde_json::to_string(&PoissonLikelihood()).unwrap();
        assert_eq!(r#""Poisson""#, data);
    }
}

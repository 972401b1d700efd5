use crate::errors::{GpError, Result};
use crate::kernels::PolynomialKernel;
use crate::likelihoods::GaussianLikelihood;
use linfa::{Float, ParamGuard};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

fn check_finite<F: Float>(name: &str, value: F) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GpError::InvalidValueError(format!(
            "`{name}` should be finite, got {value}"
        )))
    }
}

/// A set of validated polynomial kernel parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct PolynomialKernelValidParams<F: Float> {
    /// Logarithm of the offset c
    pub(crate) log_c: F,
    /// Logarithm of the signal standard deviation sigma
    pub(crate) log_sigma: F,
    /// Polynomial degree, not optimized
    pub(crate) degree: u32,
}

impl<F: Float> Default for PolynomialKernelValidParams<F> {
    fn default() -> PolynomialKernelValidParams<F> {
        PolynomialKernelValidParams {
            log_c: F::zero(),
            log_sigma: F::zero(),
            degree: 2,
        }
    }
}

impl<F: Float> PolynomialKernelValidParams<F> {
    /// Get `log(c)`
    pub fn log_c(&self) -> F {
        self.log_c
    }

    /// Get `log(sigma)`
    pub fn log_sigma(&self) -> F {
        self.log_sigma
    }

    /// Get polynomial degree
    pub fn degree(&self) -> u32 {
        self.degree
    }
}

impl<F: Float> From<PolynomialKernelValidParams<F>> for PolynomialKernel<F> {
    fn from(params: PolynomialKernelValidParams<F>) -> Self {
        PolynomialKernel::new(params.log_c, params.log_sigma, params.degree)
    }
}

#[derive(Clone, Debug)]
/// The set of hyperparameters that can be specified to build a [PolynomialKernel].
pub struct PolynomialKernelParams<F: Float>(PolynomialKernelValidParams<F>);

impl<F: Float> Default for PolynomialKernelParams<F> {
    fn default() -> Self {
        Self(PolynomialKernelValidParams::default())
    }
}

impl<F: Float> PolynomialKernelParams<F> {
    /// A constructor for polynomial kernel parameters given the degree
    pub fn new(degree: u32) -> PolynomialKernelParams<F> {
        Self(PolynomialKernelValidParams {
            degree,
            ..Default::default()
        })
    }

    /// Set `log(c)`, c being the offset added to inner products.
    pub fn log_c(mut self, log_c: F) -> Self {
        self.0.log_c = log_c;
        self
    }

    /// Set `log(sigma)`, sigma^2 being the signal variance.
    pub fn log_sigma(mut self, log_sigma: F) -> Self {
        self.0.log_sigma = log_sigma;
        self
    }

    /// Set polynomial degree.
    pub fn degree(mut self, degree: u32) -> Self {
        self.0.degree = degree;
        self
    }

    /// Check parameters and build the kernel
    pub fn build(self) -> Result<PolynomialKernel<F>> {
        Ok(self.check()?.into())
    }
}

impl<F: Float> From<PolynomialKernelValidParams<F>> for PolynomialKernelParams<F> {
    fn from(valid: PolynomialKernelValidParams<F>) -> Self {
        PolynomialKernelParams(valid)
    }
}

impl<F: Float> ParamGuard for PolynomialKernelParams<F> {
    type Checked = PolynomialKernelValidParams<F>;
    type Error = GpError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        check_finite("log_c", self.0.log_c)?;
        check_finite("log_sigma", self.0.log_sigma)?;
        if i32::try_from(self.0.degree).is_err() {
            return Err(GpError::InvalidValueError(format!(
                "`degree` should be at most {}, got {}",
                i32::MAX,
                self.0.degree
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A set of validated gaussian likelihood parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct GaussianLikelihoodValidParams<F: Float> {
    /// Logarithm of the observation noise standard deviation
    pub(crate) log_sigma: F,
}

impl<F: Float> Default for GaussianLikelihoodValidParams<F> {
    fn default() -> GaussianLikelihoodValidParams<F> {
        GaussianLikelihoodValidParams {
            log_sigma: F::cast(GaussianLikelihood::<F>::DEFAULT_LOG_SIGMA),
        }
    }
}

impl<F: Float> GaussianLikelihoodValidParams<F> {
    /// Get `log(sigma)`
    pub fn log_sigma(&self) -> F {
        self.log_sigma
    }
}

impl<F: Float> From<GaussianLikelihoodValidParams<F>> for GaussianLikelihood<F> {
    fn from(params: GaussianLikelihoodValidParams<F>) -> Self {
        GaussianLikelihood::new(params.log_sigma)
    }
}

#[derive(Clone, Debug, Default)]
/// The set of hyperparameters that can be specified to build a [GaussianLikelihood].
pub struct GaussianLikelihoodParams<F: Float>(GaussianLikelihoodValidParams<F>);

impl<F: Float> GaussianLikelihoodParams<F> {
    /// Set `log(sigma)`, sigma being the observation noise standard deviation.
    pub fn log_sigma(mut self, log_sigma: F) -> Self {
        self.0.log_sigma = log_sigma;
        self
    }

    /// Check parameters and build the likelihood
    pub fn build(self) -> Result<GaussianLikelihood<F>> {
        Ok(self.check()?.into())
    }
}

impl<F: Float> ParamGuard for GaussianLikelihoodParams<F> {
    type Checked = GaussianLikelihoodValidParams<F>;
    type Error = GpError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        check_finite("log_sigma", self.0.log_sigma)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float> PolynomialKernel<F> {
    /// Parameters to build a polynomial kernel of given `degree`
    pub fn params_builder(degree: u32) -> PolynomialKernelParams<F> {
        PolynomialKernelParams::new(degree)
    }
}

impl<F: Float> GaussianLikelihood<F> {
    /// Parameters to build a gaussian likelihood
    pub fn params_builder() -> GaussianLikelihoodParams<F> {
        GaussianLikelihoodParams::default()
    }
}

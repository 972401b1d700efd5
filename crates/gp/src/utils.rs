use crate::errors::{GpError, Result};
use linfa::Float;
use log::debug;
use ndarray::{Array2, ArrayBase, ArrayView2, CowArray, Data, Ix2, Zip};
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// The kind of pairwise statistics a kernel family is a function of.
///
/// Kernels depending only on inner products `x.y` (linear, polynomial) share
/// [`StatsKind::InnerProduct`] statistics, stationary kernels share
/// [`StatsKind::SquaredDistance`] ones. A cache can be reused by any kernel
/// reporting the same kind for the same design matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(into = "String"),
    serde(try_from = "String")
)]
pub enum StatsKind {
    /// Inner products `x_i . x_j`
    InnerProduct,
    /// Squared euclidean distances `|x_i - x_j|^2`
    SquaredDistance,
}

impl StatsKind {
    /// Textual tag of the statistics kind
    pub fn key(&self) -> &'static str {
        match self {
            StatsKind::InnerProduct => "InnerProduct",
            StatsKind::SquaredDistance => "SquaredDistance",
        }
    }
}

impl fmt::Display for StatsKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl From<StatsKind> for String {
    fn from(item: StatsKind) -> String {
        item.key().to_string()
    }
}

impl TryFrom<String> for StatsKind {
    type Error = &'static str;
    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        match s.as_str() {
            "InnerProduct" => Ok(StatsKind::InnerProduct),
            "SquaredDistance" => Ok(StatsKind::SquaredDistance),
            _ => Err("Bad string value for StatsKind, should be \'InnerProduct\' or \'SquaredDistance\'"),
        }
    }
}

/// A structure to retain pairwise statistics of a design matrix used to compute covariance matrices.
///
/// The design matrix is given as a (n_obs, nx) array, one observation per row.
/// Statistics are stored as a symmetric (n_obs, n_obs) matrix: only the upper triangle
/// is computed, the lower one is a mirror copy so that the matrix is exactly symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseStats<F: Float> {
    kind: StatsKind,
    values: Array2<F>,
    nx: usize,
}

impl<F: Float> PairwiseStats<F> {
    /// Compute `kind` statistics for points given as an array (n_obs, nx)
    pub fn new(x: &ArrayBase<impl Data<Elem = F>, Ix2>, kind: StatsKind) -> PairwiseStats<F> {
        let x = x.view();
        let n_obs = x.nrows();
        let mut values = Array2::<F>::zeros((n_obs, n_obs));

        Zip::indexed(values.rows_mut()).par_for_each(|i, mut row| {
            let xi = x.row(i);
            for j in i..n_obs {
                let xj = x.row(j);
                row[j] = match kind {
                    StatsKind::InnerProduct => xi.dot(&xj),
                    StatsKind::SquaredDistance => {
                        let d = &xi - &xj;
                        d.dot(&d)
                    }
                };
            }
        });
        for i in 1..n_obs {
            for j in 0..i {
                values[[i, j]] = values[[j, i]];
            }
        }
        debug!("{kind} statistics computed for {n_obs} observations");

        PairwiseStats {
            kind,
            values,
            nx: x.ncols(),
        }
    }

    /// Inner products `XtX[i, j] = x_i . x_j`
    pub fn inner_products(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> PairwiseStats<F> {
        Self::new(x, StatsKind::InnerProduct)
    }

    /// Squared distances `D[i, j] = |x_i - x_j|^2`
    pub fn squared_distances(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> PairwiseStats<F> {
        Self::new(x, StatsKind::SquaredDistance)
    }

    /// Kind of statistics
    pub fn kind(&self) -> StatsKind {
        self.kind
    }

    /// Compatibility tag of the statistics
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    /// Number of observations
    pub fn n_obs(&self) -> usize {
        self.values.nrows()
    }

    /// Dimension of the observations the statistics were computed from
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Statistics as a symmetric (n_obs, n_obs) matrix
    pub fn values(&self) -> &Array2<F> {
        &self.values
    }

    /// Statistic between observations `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> Result<F> {
        check_obs_index(self.n_obs(), i, j)?;
        Ok(self.values[[i, j]])
    }

    /// Whether the statistics can stand for `x` when evaluating a kernel
    /// requiring `kind` statistics.
    ///
    /// Only shapes are compared: a cache has to be rebuilt by the caller
    /// whenever the design matrix values change.
    pub fn is_compatible(&self, kind: StatsKind, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> bool {
        self.kind == kind && self.n_obs() == x.nrows() && self.nx == x.ncols()
    }
}

/// Training data as given to kernel computations:
/// either the raw design matrix or its precomputed pairwise statistics.
#[derive(Debug, Clone, Copy)]
pub enum KernelData<'a, F: Float> {
    /// Design matrix (n_obs, nx), statistics are recomputed on the fly
    Raw(ArrayView2<'a, F>),
    /// Precomputed statistics
    Cached(&'a PairwiseStats<F>),
}

impl<'a, F: Float> KernelData<'a, F> {
    /// Raw data from a design matrix
    pub fn raw<S: Data<Elem = F>>(x: &'a ArrayBase<S, Ix2>) -> Self {
        KernelData::Raw(x.view())
    }

    /// Cached data from precomputed statistics
    pub fn cached(stats: &'a PairwiseStats<F>) -> Self {
        KernelData::Cached(stats)
    }

    /// Number of observations
    pub fn n_obs(&self) -> usize {
        match self {
            KernelData::Raw(x) => x.nrows(),
            KernelData::Cached(stats) => stats.n_obs(),
        }
    }

    /// Inner product `x_i . x_j`, looked up in the cache when available
    pub fn inner_product(&self, i: usize, j: usize) -> Result<F> {
        check_obs_index(self.n_obs(), i, j)?;
        match self {
            KernelData::Raw(x) => Ok(x.row(i).dot(&x.row(j))),
            KernelData::Cached(stats) => {
                check_kind(StatsKind::InnerProduct, stats.kind())?;
                Ok(stats.values[[i, j]])
            }
        }
    }

    /// All inner products as a symmetric (n_obs, n_obs) matrix,
    /// borrowed from the cache when available
    pub fn inner_products(&self) -> Result<CowArray<'a, F, Ix2>> {
        match *self {
            KernelData::Raw(x) => Ok(PairwiseStats::inner_products(&x).values.into()),
            KernelData::Cached(stats) => {
                check_kind(StatsKind::InnerProduct, stats.kind())?;
                Ok(stats.values.view().into())
            }
        }
    }
}

impl<'a, F: Float> From<&'a PairwiseStats<F>> for KernelData<'a, F> {
    fn from(stats: &'a PairwiseStats<F>) -> Self {
        KernelData::Cached(stats)
    }
}

fn check_obs_index(n_obs: usize, i: usize, j: usize) -> Result<()> {
    if i < n_obs && j < n_obs {
        Ok(())
    } else {
        Err(GpError::DimensionMismatch(format!(
            "observation indices ({i}, {j}) out of range for {n_obs} observations"
        )))
    }
}

fn check_kind(expected: StatsKind, actual: StatsKind) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(GpError::IncompatibleStats {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// A prior specification attached to one hyperparameter.
///
/// Kernels and likelihoods only store their priors, the regularization
/// layer consuming them gives meaning to `family` and `args`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Prior<F: Float> {
    /// Index of the log hyperparameter the prior applies to
    pub param: usize,
    /// Name of the prior distribution family
    pub family: String,
    /// Arguments of the prior distribution
    pub args: Vec<F>,
}

impl<F: Float> Prior<F> {
    /// Constructor
    pub fn new(param: usize, family: impl Into<String>, args: Vec<F>) -> Self {
        Prior {
            param,
            family: family.into(),
            args,
        }
    }
}

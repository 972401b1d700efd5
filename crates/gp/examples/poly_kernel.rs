use gpkit_gp::kernels::PolynomialKernel;
use gpkit_gp::likelihoods::{GaussianLikelihood, LikelihoodModel, PoissonLikelihood};
use gpkit_gp::{Kernel, KernelData, Likelihood, PairwiseStats};
use ndarray::{Array, Array1, Axis, arr1, concatenate};

fn main() {
    env_logger::init();

    let xt = Array::linspace(-1., 1., 6).insert_axis(Axis(1));
    let counts = arr1(&[4., 2., 1., 0., 1., 3.]);

    let kernel = PolynomialKernel::params_builder(2)
        .log_c(0.)
        .log_sigma(0.5)
        .build()
        .expect("valid polynomial kernel");
    let stats = PairwiseStats::inner_products(&xt);
    let data = KernelData::cached(&stats);

    println!("Covariance matrix of {kernel} at {}", xt.column(0));
    let k = kernel.cov_matrix(&data).expect("covariance matrix");
    println!("{k}");

    let grads = kernel.grad_stack(&data).expect("covariance gradients");
    for p in 0..kernel.num_params() {
        println!(
            "dK/dtheta_{p} (theta = {}):\n{}",
            kernel.params()[p],
            grads.index_axis(Axis(2), p)
        );
    }

    // log rate of the counts as latent values
    let f: Array1<f64> = arr1(&[1.2, 0.8, 0.1, -0.6, 0.2, 1.0]);
    for lik in [
        LikelihoodModel::from(PoissonLikelihood::default()),
        LikelihoodModel::from(GaussianLikelihood::new(-1.)),
    ] {
        let logp = lik.log_density(&f, &counts).expect("log density");
        let dlogp = lik.dlog_density_df(&f, &counts).expect("log density gradient");
        let (mean, var) = lik
            .predict_obs(&f, &Array1::from_elem(f.len(), 0.1))
            .expect("predictive moments");
        println!("{lik}: log density = {}", logp.sum());
        println!("(f, dlogp/df, E[y], Var[y])");
        println!(
            "{}",
            concatenate![
                Axis(1),
                f.view().insert_axis(Axis(1)),
                dlogp.insert_axis(Axis(1)),
                mean.insert_axis(Axis(1)),
                var.insert_axis(Axis(1))
            ]
        );
    }
}

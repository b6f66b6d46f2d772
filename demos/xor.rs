use fitnet::{ActivationFunction, Network, Sample};

fn main() -> fitnet::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut network = Network::new(
        &[2, 4, 1],
        0.5,
        Some(7),
        ActivationFunction::Tanh,
        ActivationFunction::Sigmoid,
    )?;

    let data = vec![
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![0.0, 0.0], vec![0.0]),
    ];

    let report = network.train_batch(&data, 10_000, 0.05, 1000)?;
    match report.converged_at() {
        Some(epoch) => println!("Converged at epoch {epoch}"),
        None => println!("Stopped after {} epochs", report.epochs_run()),
    }
    if let Some(final_error) = report.final_error() {
        println!("Final error: {:.6}", final_error);
    }

    for sample in &data {
        println!("Input: {:?} -> Output: {:.4}", sample.input, network.infer(&sample.input)?[0]);
    }
    Ok(())
}

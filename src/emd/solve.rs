use super::error::Error;
use super::settings::Settings;
use super::solution::Solution;
use crate::Energy;
use crate::simplex::Greedy;
use crate::simplex::Problem;
use crate::simplex::Simplex;
use crate::simplex::Status;
use crate::transport::Coupling;
use crate::transport::Density;
use crate::transport::Measure;

/// Earth Mover's Distance between `p` and `q` under `metric`.
///
/// Validates both sides, balances unequal masses with a zero-cost dummy
/// line, bootstraps a greedy basis and runs the transportation simplex.
/// The distance is the optimal work divided by the shared mass, the smaller
/// of the two totals.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for an empty or massless side, a negative or
///   non-finite weight, or a negative or non-finite ground distance.
/// - [`Error::NonConvergence`] when the pivot cap is hit and
///   [`Settings::partial`] is off. The error carries the truncated solution.
/// - [`Error::InternalInconsistency`] if the basis stops spanning, or if
///   the plan fails to move the shared mass between real entries.
pub fn emd<P, Q, M>(p: &P, q: &Q, metric: &M, settings: &Settings) -> Result<Solution, Error>
where
    P: Density,
    Q: Density,
    M: Measure<P::Support, Q::Support>,
{
    let problem = Problem::new(p, q, metric)?;
    let limit = settings.limit(problem.rows(), problem.cols());
    let greedy = Greedy::from(problem).minimize()?;
    let simplex = Simplex::from(greedy).limit(limit).minimize()?;
    let solution = simplex.solution(settings.flows)?;
    match simplex.status() {
        Status::Truncated if settings.partial => {
            log::warn!(
                "{:<32}{} pivots, returning partial distance {}",
                "pivot cap reached",
                simplex.iterations(),
                solution.distance()
            );
            Ok(solution)
        }
        Status::Truncated => Err(Error::NonConvergence {
            iterations: simplex.iterations(),
            partial: Box::new(solution),
        }),
        Status::Optimal => Ok(solution),
        Status::Pending => Err(Error::InternalInconsistency(
            "simplex returned without a verdict".into(),
        )),
    }
}

/// Distance only, with default settings.
pub fn distance<P, Q, M>(p: &P, q: &Q, metric: &M) -> Result<Energy, Error>
where
    P: Density,
    Q: Density,
    M: Measure<P::Support, Q::Support>,
{
    emd(p, q, metric, &Settings::default()).map(|s| s.distance())
}

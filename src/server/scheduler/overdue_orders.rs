use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::order_status::{guard::TransitionPolicy, OrderStatusService},
    util::clock::Clock,
};

/// Starts the overdue order sweep.
///
/// On every tick of `schedule` the sweep marks `InProgress` orders whose equipment is past
/// its end date as `Overdue`. Failures are logged and the job keeps running.
///
/// # Arguments
/// - `db`: Database connection
/// - `clock`: Time source the sweep compares end dates against
/// - `schedule`: Cron expression with a seconds field, e.g. `0 */5 * * * *`
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler; keep it alive for the sweep to continue
/// - `Err(AppError::SchedulerErr)`: Invalid schedule or scheduler start failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    clock: Arc<dyn Clock>,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let clock = clock.clone();

        Box::pin(async move {
            if let Err(e) = sweep_overdue_orders(&db, clock.as_ref()).await {
                tracing::error!("Error sweeping overdue orders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Overdue order scheduler started with schedule '{}'", schedule);

    Ok(scheduler)
}

/// Marks every past-due `InProgress` order as `Overdue`.
async fn sweep_overdue_orders(db: &DatabaseConnection, clock: &dyn Clock) -> Result<(), AppError> {
    // System transitions bypass the guard, so the policy has no effect here
    let service = OrderStatusService::new(db, clock, TransitionPolicy::Strict);

    let marked = service.sweep_overdue().await?;
    if marked > 0 {
        tracing::info!("Marked {} order(s) overdue", marked);
    }

    Ok(())
}

use crate::bridge::model::BridgeState;
use crate::workflow::runner::Runner;
use anyhow::Context;
use log::{info, warn};
use outbreakcore::{GeneratedReport, OutbreakRecord};
use serde_json::json;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::{self, JoinHandle};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

pub fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

type SharedState = Arc<RwLock<BridgeState>>;

// Poisoned locks still hold usable state.
fn read_state(state: &SharedState) -> RwLockReadGuard<'_, BridgeState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_state(state: &SharedState) -> RwLockWriteGuard<'_, BridgeState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

async fn list_outbreaks(state: SharedState) -> Result<impl warp::Reply, Infallible> {
    let outbreaks = read_state(&state).outbreaks.clone();
    Ok(warp::reply::json(&outbreaks))
}

async fn latest_report(state: SharedState) -> Result<impl warp::Reply, Infallible> {
    let latest = read_state(&state).latest.clone();
    let reply = match latest {
        Some(report) => warp::reply::with_status(warp::reply::json(&report), StatusCode::OK),
        None => warp::reply::with_status(
            warp::reply::json(&json!({"status": "empty"})),
            StatusCode::NOT_FOUND,
        ),
    };
    Ok(reply)
}

fn unknown_outbreak(id: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({"status": "error", "reason": format!("unknown outbreak {}", id)})),
        StatusCode::NOT_FOUND,
    )
}

async fn get_outbreak(id: String, state: SharedState) -> Result<impl warp::Reply, Infallible> {
    let found = read_state(&state).outbreak(&id).cloned();
    let reply = match found {
        Some(record) => warp::reply::with_status(warp::reply::json(&record), StatusCode::OK),
        None => unknown_outbreak(&id),
    };
    Ok(reply)
}

fn report_reply(
    record: &OutbreakRecord,
    state: &SharedState,
    runner: &Runner,
) -> warp::reply::WithStatus<warp::reply::Json> {
    match runner.generate_one(record) {
        Ok(report) => {
            info!("[bridge] report {} generated", report.id);
            let body = warp::reply::json(&report);
            write_state(state).record_report(report);
            warp::reply::with_status(body, StatusCode::CREATED)
        }
        Err(err) => {
            warn!("[bridge] rejected outbreak {}: {}", record.id, err);
            warp::reply::with_status(
                warp::reply::json(&json!({"status": "error", "reason": err.to_string()})),
                StatusCode::BAD_REQUEST,
            )
        }
    }
}

async fn create_report(
    record: OutbreakRecord,
    state: SharedState,
    runner: Arc<Runner>,
) -> Result<impl warp::Reply, Infallible> {
    Ok(report_reply(&record, &state, &runner))
}

async fn report_on_outbreak(
    id: String,
    state: SharedState,
    runner: Arc<Runner>,
) -> Result<impl warp::Reply, Infallible> {
    let found = read_state(&state).outbreak(&id).cloned();
    let reply = match found {
        Some(record) => report_reply(&record, &state, &runner),
        None => unknown_outbreak(&id),
    };
    Ok(reply)
}

pub fn routes(
    state: SharedState,
    runner: Arc<Runner>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());
    let runner_filter = warp::any().map(move || runner.clone());

    let outbreaks_route = warp::path("outbreaks")
        .and(warp::path::end())
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(list_outbreaks);

    let outbreak_route = warp::path!("outbreaks" / String)
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_outbreak);

    let outbreak_report_route = warp::path!("outbreaks" / String / "reports")
        .and(warp::post())
        .and(state_filter.clone())
        .and(runner_filter.clone())
        .and_then(report_on_outbreak);

    let latest_route = warp::path!("reports" / "latest")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(latest_report);

    let create_route = warp::path("reports")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter)
        .and(runner_filter)
        .and_then(create_report);

    outbreaks_route
        .or(outbreak_route)
        .or(outbreak_report_route)
        .or(latest_route)
        .or(create_route)
}

/// Local HTTP surface over the report runner.
pub struct ReportBridge {
    state: SharedState,
    runner: Arc<Runner>,
}

impl ReportBridge {
    pub fn new(runner: Arc<Runner>, outbreaks: Vec<OutbreakRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BridgeState::new(outbreaks))),
            runner,
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        routes(self.state.clone(), self.runner.clone())
    }

    /// Binds `addr` on the caller's thread, then serves the routes from a
    /// dedicated runtime thread. Returns the bound address.
    pub fn spawn(&self, addr: SocketAddr) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building bridge runtime")?;
        let (bound, server) = {
            let _guard = runtime.enter();
            warp::serve(self.routes())
                .try_bind_ephemeral(addr)
                .with_context(|| format!("binding HTTP bridge to {}", addr))?
        };
        let handle = thread::spawn(move || runtime.block_on(server));
        Ok((bound, handle))
    }

    /// Makes the last report of a batch run visible on `/reports/latest`.
    pub fn publish(&self, reports: &[GeneratedReport]) {
        let mut guard = write_state(&self.state);
        for report in reports {
            guard.record_report(report.clone());
        }
        info!(
            "[bridge] {} outbreaks listed, {} reports published",
            guard.outbreaks.len(),
            guard.reports_served
        );
    }

    pub fn publish_status(&self, message: &str) {
        info!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> BridgeState {
        read_state(&self.state).clone()
    }
}

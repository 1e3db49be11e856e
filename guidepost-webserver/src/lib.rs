#[macro_use]
extern crate log;

use guidepost_core::gateways::{
    feedback_analysis::FeedbackAnalysisGateway, notify::NotificationGateway,
};
use guidepost_db_sqlite::Connections;

mod adapters;
mod web;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
    analysis_gw: Box<dyn FeedbackAnalysisGateway + Send + Sync>,
) {
    web::run(connections.into(), enable_cors, notify_gw, analysis_gw).await;
}

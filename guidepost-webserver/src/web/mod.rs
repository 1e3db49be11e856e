use guidepost_core::gateways::{
    feedback_analysis::FeedbackAnalysisGateway, notify::NotificationGateway,
};

use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) struct Gateways {
    notify: Box<dyn NotificationGateway + Send + Sync>,
    analysis: Box<dyn FeedbackAnalysisGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;
    let Gateways { notify, analysis } = gateways;

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let notify_gw = guards::Notify(notify);
    let analysis_gw = guards::Analysis(analysis);

    let mut instance = r.manage(db).manage(notify_gw).manage(analysis_gw);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    notify: Box<dyn NotificationGateway + Send + Sync>,
    analysis: Box<dyn FeedbackAnalysisGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
    };
    let gateways = Gateways { notify, analysis };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}

use std::error::Error;
use std::rc::Rc;
use std::time::Duration;

use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::console::ConsoleView;
use crate::core::{
    alerts::{AlertFeed, AlertView, FeedError, SharedFeed},
    config::{ConfigManager, Settings},
    monitors::{
        anomaly::AnomalySampler,
        chart::BaselineChart,
        learning::{DataPointCounter, LearningMonitor},
        location::LocationMonitor,
        noise::NoiseMonitor,
        temporal::TemporalMonitor, AlertRequest, Observation, WELCOME,
    },
    scheduler::Scheduler,
};

const DEFAULT_LOG_FILTER: &str = "warn,vigil_watcher=info";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    // Also installs the log -> tracing bridge, so `log::` macros end up here
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Log a monitor reading and forward its alert, if any, to the feed
fn forward<V: AlertView>(
    feed: &SharedFeed<V>,
    source: &'static str,
    observation: Observation,
) -> Result<(), FeedError> {
    log::debug!("{}: {}", source, observation.summary);
    match observation.alert {
        Some(request) => post(feed, request),
        None => Ok(()),
    }
}

fn post<V: AlertView>(feed: &SharedFeed<V>, request: AlertRequest) -> Result<(), FeedError> {
    request.submit_to(&mut *feed.borrow_mut()).map(|_| ())
}

/// Register every producer and the label refresh job against one feed.
pub fn register_tasks<V: AlertView + 'static>(
    scheduler: &mut Scheduler,
    feed: &SharedFeed<V>,
    settings: &Settings,
    on_refresh: impl Fn(&mut AlertFeed<V>) -> Result<(), FeedError> + 'static,
) {
    let periods = &settings.monitors;

    let mut location = LocationMonitor::new(&settings.baseline);
    let shared = Rc::clone(feed);
    scheduler.every(
        "location",
        Duration::from_millis(periods.location_period_ms),
        move || forward(&shared, "location", location.sample(&mut rand::rng())),
    );

    let mut noise = NoiseMonitor::new(settings.baseline.noise_level_db);
    let shared = Rc::clone(feed);
    scheduler.every(
        "noise",
        Duration::from_millis(periods.noise_period_ms),
        move || forward(&shared, "noise", noise.sample(&mut rand::rng())),
    );

    let mut temporal = TemporalMonitor::new();
    let shared = Rc::clone(feed);
    scheduler.every_from_start(
        "temporal",
        Duration::from_millis(periods.temporal_period_ms),
        move || forward(&shared, "temporal", temporal.sample(&mut rand::rng(), Local::now())),
    );

    let mut anomaly = AnomalySampler::new();
    let shared = Rc::clone(feed);
    scheduler.every(
        "anomaly",
        Duration::from_millis(periods.anomaly_period_ms),
        move || forward(&shared, "anomaly", anomaly.sample(&mut rand::rng())),
    );

    let mut chart = BaselineChart::new();
    let shared = Rc::clone(feed);
    scheduler.every(
        "baseline-chart",
        Duration::from_millis(periods.anomaly_period_ms),
        move || forward(&shared, "baseline-chart", chart.sample(&mut rand::rng())),
    );

    let mut learning = LearningMonitor::new();
    let shared = Rc::clone(feed);
    scheduler.every(
        "learning",
        Duration::from_millis(periods.learning_period_ms),
        move || forward(&shared, "learning", learning.sample(&mut rand::rng())),
    );

    let mut data_points = DataPointCounter::new();
    let shared = Rc::clone(feed);
    scheduler.every(
        "data-points",
        Duration::from_millis(periods.data_point_period_ms),
        move || forward(&shared, "data-points", data_points.tick()),
    );

    let shared = Rc::clone(feed);
    scheduler.after(
        "welcome",
        Duration::from_millis(periods.welcome_delay_ms),
        move || post(&shared, WELCOME),
    );

    let shared = Rc::clone(feed);
    scheduler.every("refresh-timestamps", settings.refresh_interval(), move || {
        let mut feed = shared.borrow_mut();
        feed.refresh_timestamps()?;
        on_refresh(&mut *feed)
    });
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_logging();
    log::info!("VIGIL AI - Autonomous Personal Security System");

    let config_manager = ConfigManager::from_env();
    let settings = config_manager.load();
    log::info!("Loaded settings from {:?}", config_manager.path());

    let feed = AlertFeed::new(settings.feed.clone(), ConsoleView::stdout())?.into_shared();
    let mut scheduler = Scheduler::new();
    register_tasks(&mut scheduler, &feed, &settings, |feed| {
        feed.view_mut().render().map_err(FeedError::from)
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(scheduler.run_until(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        log::info!("Shutting down");
    }))?;

    Ok(())
}

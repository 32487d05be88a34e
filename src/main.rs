use tempsense::channel;
use tempsense::config::Config;

fn main() {
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        std::process::exit(1);
    }));

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => panic!("Unable to load config: {:#}", err),
    };

    log::debug!("Using {:#?}", config);

    let mut running = 0;
    for cfg in &config.channels {
        match channel::Controller::from_config(cfg) {
            Ok(mut controller) => {
                spawn(format!("channel-{}", cfg.name), move || controller.run());
                running += 1;
            }
            Err(err) => log::warn!("Skipping channel '{}': {}", cfg.name, err),
        }
    }

    if running == 0 {
        panic!("No channel could be started");
    }

    log::info!("Sampling {} channel(s)", running);
    std::thread::park();
}

fn spawn<F, T>(thread_name: String, handler: F)
where
    F: FnOnce() -> T,
    F: Send + 'static,
    T: Send + 'static,
{
    std::thread::Builder::new()
        .name(thread_name.clone())
        .spawn(handler)
        .unwrap_or_else(|_| panic!("Unable to start thread: {}", thread_name));
}

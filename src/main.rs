use plexus::AppConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting plexus");

    if let Err(e) = plexus::run(AppConfig::new().with_fps_in_title(true)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

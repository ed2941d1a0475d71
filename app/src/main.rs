fn main() {
    let env = env_logger::Env::default()
        .filter_or("DEMO_LOG_LEVEL", "info")
        .write_style_or("DEMO_LOG_STYLE", "auto");

    env_logger::init_from_env(env);

    let stdout = std::io::stdout();
    if let Err(err) = app::run(&mut stdout.lock(), &app::SETTINGS) {
        log::error!("app error: {err}");
    }
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting Kadmin desktop {}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(ui::App);
}

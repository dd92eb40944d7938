//! Sales Dashboard - report and order dialogs GUI application

use sales_dashboard::ui::SalesDashboardApp;

fn title(_app: &SalesDashboardApp) -> String {
    String::from("Sales Dashboard")
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("sales-dashboard starting up");

    iced::application(SalesDashboardApp::new, SalesDashboardApp::update, SalesDashboardApp::view)
        .title(title)
        .window_size(iced::Size::new(1100.0, 760.0))
        .theme(SalesDashboardApp::theme)
        .run()
}

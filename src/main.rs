use std::{net::TcpListener, sync::Arc, time::Duration};

use brandstage::{
    configuration::get_configuration,
    services::{
        preview_engine_handler, LeadGateway, PreviewEvent, PreviewEventSender, PreviewState,
        PreviewStateReceiver, Scout,
    },
    startup::run,
};
use env_logger::Env;
use tokio::sync::{mpsc, watch};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let scout = Scout::new(configuration.enrichment.clone());
    let lead_gateway = LeadGateway::new(configuration.webhook.url);
    let debounce = Duration::from_millis(configuration.enrichment.debounce_ms);

    let (event_sender, event_receiver) = mpsc::unbounded_channel::<PreviewEvent>();
    let (state_sender, state_receiver) = watch::channel(PreviewState::default());

    // Spawn the preview engine, the single writer of the preview state.
    let engine_sender = event_sender.clone();
    tokio::spawn(async move {
        preview_engine_handler(
            Arc::new(scout),
            event_receiver,
            engine_sender,
            state_sender,
            debounce,
        )
        .await
    });

    run(
        listener,
        lead_gateway,
        PreviewEventSender {
            sender: event_sender,
        },
        PreviewStateReceiver {
            receiver: state_receiver,
        },
    )?
    .await
}

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod console;

use console::ConsoleNotifier;
use coordex_client::HttpExtractionClient;
use coordex_core::{AppConfig, FormState};
use coordex_workflow::{EventDispatcher, ExtractionWorkflow, FormEvent};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("coordex_workflow=info".parse().unwrap())
                .add_directive("coordex_client=info".parse().unwrap()),
        )
        .init();

    let mut image_url: Option<String> = None;
    let mut debug = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--debug" => debug = true,
            _ => image_url = Some(arg),
        }
    }

    if image_url.is_none() && !debug {
        eprintln!("usage: coordex [--debug] <image-url>");
        std::process::exit(2);
    }

    let config = AppConfig::from_env();
    let client = Arc::new(
        HttpExtractionClient::new(&config).expect("Failed to construct extraction client"),
    );

    let form = FormState {
        image_reference: image_url,
        ..FormState::default()
    }
    .shared();

    let workflow = Arc::new(ExtractionWorkflow::new(
        form.clone(),
        client,
        Arc::new(ConsoleNotifier),
    ));
    let dispatcher = EventDispatcher::new(workflow.clone());

    let event = if debug {
        FormEvent::DebugRequested
    } else {
        FormEvent::ImageAssigned
    };

    dispatcher
        .dispatch(event)
        .await
        .expect("Extraction task panicked");

    let form = form.read().await;
    if let (Some(lat), Some(lon)) = (form.latitude, form.longitude) {
        println!("latitude: {lat}");
        println!("longitude: {lon}");
    }

    let status = workflow.status().await;
    tracing::info!(
        runs_completed = status.runs_completed,
        last_error = ?status.last_error,
        "Done"
    );
}

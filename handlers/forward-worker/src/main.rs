use relay::config::RelayConfig;
use relay::forwarder::Forwarder;
use relay::handler::handle_event;
use relay::lambda::lambda_runtime::{run, service_fn};
use relay::lambda::{self, sqs};
use relay::tokio;

#[tokio::main]
async fn main() -> Result<(), lambda::Error> {
    lambda::init_tracing();

    let forwarder = &Forwarder::create(RelayConfig::from_env());

    let handler = |event: sqs::SqsEvent| async move { handle_event(forwarder, event).await };

    run(service_fn(handler)).await
}

use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use tracing::error;

use crate::forwarder::Forwarder;
use crate::lambda::response::proxy_response;
use crate::lambda::sqs::{self, SqsEvent};
use crate::lambda::Error;

/// Status reported when any step of the forward fails.
const FAILURE_STATUS: i64 = 400;

/// Forwards the first record of the delivered batch and reflects the
/// downstream response. Failures are logged and surface as a 400 descriptor
/// carrying the error text; the message is not redelivered.
pub async fn handle_event(
    forwarder: &Forwarder,
    event: SqsEvent,
) -> Result<ApiGatewayProxyResponse, Error> {
    let payload = sqs::first_record_body(&event);

    match forwarder.forward(payload).await {
        Ok(response) => Ok(proxy_response(
            i64::from(response.status_code),
            response.body,
        )),
        Err(err) => {
            error!(message = "forward_failed", error = %err);
            Ok(proxy_response(FAILURE_STATUS, err.to_string()))
        }
    }
}

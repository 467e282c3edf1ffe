use aws_lambda_events::event::sqs;
pub use lambda_runtime::Error;
use lambda_runtime::LambdaEvent;

pub type SqsEvent = LambdaEvent<sqs::SqsEvent>;

/// Returns the body of the first record. Records past the first are ignored;
/// a recordless event or a bodiless record violates the delivery contract
/// and panics.
pub fn first_record_body(event: &SqsEvent) -> &str {
    let record = event
        .payload
        .records
        .first()
        .expect("Event should contain at least one record");

    record.body.as_deref().expect("Body should be present")
}

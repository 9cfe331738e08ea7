mod credentials;

use jusibe::{BulkMessageId, JusibeClient, Reply};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JusibeClient::new(credentials::credentials_from_env()?);
    let bulk_id = BulkMessageId::new(credentials::required_env("JUSIBE_BULK_MESSAGE_ID")?)?;

    match client.check_bulk_delivery_status(&bulk_id).await? {
        Reply::Success(batch) => println!(
            "status: {:?}, total: {:?}, valid: {:?}, invalid: {:?}",
            batch.status,
            batch.total_numbers,
            batch.total_valid_numbers,
            batch.total_invalid_numbers
        ),
        Reply::Rejected(err) => println!("rejected ({}): {}", err.field, err.message),
    }

    Ok(())
}

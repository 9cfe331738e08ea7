mod credentials;

use jusibe::{JusibeClient, Reply, SendBulkSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JusibeClient::new(credentials::credentials_from_env()?);
    let phones = credentials::required_env("JUSIBE_PHONES")?;
    let from = std::env::var("JUSIBE_SENDER").unwrap_or_else(|_| "Jusibe".to_owned());
    let message = std::env::var("JUSIBE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the jusibe bulk example.".to_owned());

    let request = SendBulkSms::from_parts(phones, from, message)?;
    match client.send_bulk_sms(&request).await? {
        Reply::Success(batch) => println!(
            "status: {:?}, bulk_message_id: {:?}, request_speed: {:?}",
            batch.status, batch.bulk_message_id, batch.request_speed
        ),
        Reply::Rejected(err) => println!("rejected ({}): {}", err.field, err.message),
    }

    Ok(())
}

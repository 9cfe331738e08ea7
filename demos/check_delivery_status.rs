mod credentials;

use jusibe::{JusibeClient, MessageId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JusibeClient::new(credentials::credentials_from_env()?);
    let message_id = MessageId::new(credentials::required_env("JUSIBE_MESSAGE_ID")?)?;

    let reply = client.check_delivery_status(&message_id).await?;
    println!("{reply:?}");
    println!("raw: {}", client.last_response()?);

    Ok(())
}

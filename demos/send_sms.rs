mod credentials;

use jusibe::{JusibeClient, Reply, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JusibeClient::new(credentials::credentials_from_env()?);
    let to = credentials::required_env("JUSIBE_PHONE")?;
    let from = std::env::var("JUSIBE_SENDER").unwrap_or_else(|_| "Jusibe".to_owned());
    let message = std::env::var("JUSIBE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the jusibe example.".to_owned());

    let request = SendSms::from_parts(to, from, message)?;
    match client.send_sms(&request).await? {
        Reply::Success(sent) => println!(
            "status: {:?}, message_id: {:?}, sms_credits_used: {:?}",
            sent.status, sent.message_id, sent.sms_credits_used
        ),
        Reply::Rejected(err) => println!("rejected ({}): {}", err.field, err.message),
    }

    Ok(())
}

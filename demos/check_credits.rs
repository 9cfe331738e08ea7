mod credentials;

use jusibe::{JusibeClient, Reply};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JusibeClient::new(credentials::credentials_from_env()?);

    match client.check_available_credits().await? {
        Reply::Success(credits) => println!("sms_credits: {:?}", credits.sms_credits),
        Reply::Rejected(err) => println!("rejected ({}): {}", err.field, err.message),
    }

    Ok(())
}

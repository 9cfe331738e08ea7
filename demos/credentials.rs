use std::io;

use jusibe::Credentials;

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

pub fn credentials_from_env() -> Result<Credentials, Box<dyn std::error::Error>> {
    let public_key = required_env("JUSIBE_PUBLIC_KEY")?;
    let access_token = required_env("JUSIBE_ACCESS_TOKEN")?;
    Ok(Credentials::new(public_key, access_token)?)
}

use pqc_bind::{registry, AlgorithmFamily, KemSession, Result};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    println!("Enabled KEMs:");
    println!("{:?}", registry().enabled_names(AlgorithmFamily::Kem));

    let kem_name = "Kyber512";

    let mut client = KemSession::new();
    client.init(kem_name, None)?;
    let client_public_key = client.generate_keypair()?;

    println!("\nKEM details:");
    println!("{:#?}", client.details()?);

    let mut server = KemSession::new();
    server.init(kem_name, None)?;
    let (ciphertext, shared_secret_server) = server.encap_secret(&client_public_key)?;

    let shared_secret_client = client.decap_secret(&ciphertext)?;

    println!(
        "\nClient shared secret:\n{} ... {}",
        hex(&shared_secret_client[..8]),
        hex(&shared_secret_client[shared_secret_client.len() - 8..])
    );
    println!(
        "\nServer shared secret:\n{} ... {}",
        hex(&shared_secret_server[..8]),
        hex(&shared_secret_server[shared_secret_server.len() - 8..])
    );

    println!(
        "\nShared secrets coincide? {}",
        shared_secret_client == shared_secret_server
    );
    Ok(())
}

use pqc_bind::{registry, AlgorithmFamily, Result, SigSession};

fn main() -> Result<()> {
    println!("Enabled signature schemes:");
    println!("{:?}", registry().enabled_names(AlgorithmFamily::Sig));

    let sig_name = "Dilithium2";
    let message = b"This is the message to sign";

    let mut signer = SigSession::new();
    signer.init(sig_name, None)?;
    let public_key = signer.generate_keypair()?;

    println!("\nSignature details:");
    println!("{:#?}", signer.details()?);

    let signature = signer.sign(message)?;
    println!(
        "\nSigned {} bytes, signature is {} bytes (max {})",
        message.len(),
        signature.len(),
        signer.details()?.max_length_signature
    );

    let mut verifier = SigSession::new();
    verifier.init(sig_name, None)?;
    let is_valid = verifier.verify(message, &signature, &public_key)?;

    println!("\nValid signature? {}", is_valid);
    Ok(())
}

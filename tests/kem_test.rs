// tests/kem_test.rs
use pqc_bind::{registry, AlgorithmFamily, Error, KemSession, Result};
use rand::RngCore;

#[test]
fn test_round_trip_all_enabled_kems() -> Result<()> {
    for kem_name in registry().enabled_names(AlgorithmFamily::Kem) {
        println!("{}", kem_name);
        let mut client = KemSession::new();
        let mut server = KemSession::new();
        client.init(kem_name, None)?;
        server.init(kem_name, None)?;

        let client_public_key = client.generate_keypair()?;
        assert_eq!(
            client_public_key.len(),
            client.details()?.length_public_key,
            "public key length wrong for {}",
            kem_name
        );

        let (ciphertext, shared_secret_server) = server.encap_secret(&client_public_key)?;
        assert_eq!(ciphertext.len(), server.details()?.length_ciphertext);
        assert_eq!(
            shared_secret_server.len(),
            server.details()?.length_shared_secret
        );

        let shared_secret_client = client.decap_secret(&ciphertext)?;
        assert_eq!(
            shared_secret_client, shared_secret_server,
            "shared secrets do not coincide for {}",
            kem_name
        );

        client.clean();
        server.clean();
    }
    Ok(())
}

#[test]
fn test_tampered_ciphertext_changes_secret() -> Result<()> {
    let mut rng = rand::thread_rng();
    for kem_name in registry().enabled_names(AlgorithmFamily::Kem) {
        let mut client = KemSession::new();
        let mut server = KemSession::new();
        client.init(kem_name, None)?;
        server.init(kem_name, None)?;

        let public_key = client.generate_keypair()?;
        let (ciphertext, shared_secret) = server.encap_secret(&public_key)?;

        let mut mangled = vec![0u8; ciphertext.len()];
        rng.fill_bytes(&mut mangled);

        // Implicit rejection still produces a secret, just not the right one.
        match client.decap_secret(&mangled) {
            Ok(mangled_secret) => assert_ne!(
                mangled_secret, shared_secret,
                "random ciphertext produced the legitimate secret for {}",
                kem_name
            ),
            Err(Error::DecapsulationFailed) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let mut session = KemSession::new();
    let result = session.init("definitely-not-a-real-algorithm", None);
    assert!(matches!(result, Err(Error::UnsupportedAlgorithm(name)) if name.contains("definitely")));
}

#[test]
fn test_supported_but_unlinked_algorithm_is_disabled() {
    let mut session = KemSession::new();
    let result = session.init("HQC-128", None);
    assert!(matches!(result, Err(Error::DisabledAlgorithm(name)) if name == "HQC-128"));
}

#[test]
fn test_decap_without_secret_key_fails() -> Result<()> {
    let mut holder = KemSession::new();
    holder.init("Kyber512", None)?;
    let public_key = holder.generate_keypair()?;

    let mut keyless = KemSession::new();
    keyless.init("Kyber512", None)?;
    let (ciphertext, _) = keyless.encap_secret(&public_key)?;

    let result = keyless.decap_secret(&ciphertext);
    assert!(matches!(
        result,
        Err(Error::MissingOrInvalidSecretKey { actual: 0, .. })
    ));
    Ok(())
}

#[test]
fn test_wrong_public_key_length_is_rejected() -> Result<()> {
    let mut session = KemSession::new();
    session.init("Kyber512", None)?;
    let expected = session.details()?.length_public_key;

    let result = session.encap_secret(&vec![0u8; expected - 1]);
    assert!(matches!(
        result,
        Err(Error::InvalidPublicKeyLength { actual, .. }) if actual == expected - 1
    ));
    Ok(())
}

#[test]
fn test_wrong_ciphertext_length_is_rejected() -> Result<()> {
    let mut session = KemSession::new();
    session.init("Kyber512", None)?;
    session.generate_keypair()?;

    let result = session.decap_secret(&[0u8; 3]);
    assert!(matches!(
        result,
        Err(Error::InvalidCiphertextLength { actual: 3, .. })
    ));
    Ok(())
}

#[test]
fn test_secret_key_import_round_trip() -> Result<()> {
    let mut original = KemSession::new();
    original.init("Kyber768", None)?;
    let public_key = original.generate_keypair()?;
    let exported = original.export_secret_key().to_vec();
    assert_eq!(exported.len(), original.details()?.length_secret_key);

    let mut encapsulator = KemSession::new();
    encapsulator.init("Kyber768", None)?;
    let (ciphertext, shared_secret) = encapsulator.encap_secret(&public_key)?;

    // A fresh session seeded with the exported key decapsulates the same secret.
    let mut imported = KemSession::new();
    imported.init("Kyber768", Some(&exported))?;
    assert_eq!(imported.decap_secret(&ciphertext)?, shared_secret);
    Ok(())
}

#[test]
fn test_reinit_after_clean() -> Result<()> {
    let mut session = KemSession::new();
    session.init("Kyber512", None)?;
    session.generate_keypair()?;
    session.clean();
    assert!(session.export_secret_key().is_empty());

    session.init("Kyber768", None)?;
    assert_eq!(session.details()?.name, "Kyber768");
    let public_key = session.generate_keypair()?;
    assert_eq!(public_key.len(), session.details()?.length_public_key);
    Ok(())
}

#[test]
fn test_wipe_leaves_zeroed_buffer() {
    use pqc_bind::SecretBuf;

    let mut buf = SecretBuf::from_bytes(&[0xA5; 128]);
    buf.wipe();
    assert_eq!(buf.len(), 128);
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_parallel_independent_sessions() {
    use std::thread;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| -> Result<()> {
                let mut client = KemSession::new();
                let mut server = KemSession::new();
                client.init("Kyber512", None)?;
                server.init("Kyber512", None)?;
                let public_key = client.generate_keypair()?;
                let (ciphertext, shared_secret) = server.encap_secret(&public_key)?;
                assert_eq!(client.decap_secret(&ciphertext)?, shared_secret);
                Ok(())
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("session thread panicked").unwrap();
    }
}

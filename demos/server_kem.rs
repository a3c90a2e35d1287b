use std::env;
use std::net::{TcpListener, TcpStream};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use pqc_bind::{net, KemSession};

static CONNECTION_COUNT: AtomicU64 = AtomicU64::new(0);

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn handle_connection(mut stream: TcpStream, kem_name: &str) {
    let connection = CONNECTION_COUNT.fetch_add(1, Ordering::SeqCst);
    match net::respond(&mut stream, kem_name) {
        Ok(shared_secret) => println!(
            "\nConnection #{} - server shared secret:\n{} ... {}\n",
            connection,
            hex(&shared_secret[..8]),
            hex(&shared_secret[shared_secret.len() - 8..])
        ),
        Err(err) => eprintln!("connection #{} failed: {}", connection, err),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: server-kem <port number> [KEM name (optional)]");
        process::exit(1);
    }
    let port: u16 = match args[1].parse() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("invalid port number: {}", args[1]);
            process::exit(1);
        }
    };
    let kem_name = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "Kyber512".to_string());

    println!("Launching KEM {} server on port {}", kem_name, port);
    {
        // Probe the KEM once so a bad name fails before we start listening.
        let mut probe = KemSession::new();
        if let Err(err) = probe.init(&kem_name, None) {
            eprintln!("{}", err);
            process::exit(1);
        }
        if let Ok(details) = probe.details() {
            println!("{:#?}\n", details);
        }
    }

    let listener = match TcpListener::bind(("0.0.0.0", port)) {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("cannot listen on port {}: {}", port, err);
            process::exit(1);
        }
    };

    // Serve until explicitly stopped; one thread per connection.
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let kem_name = kem_name.clone();
                thread::spawn(move || handle_connection(stream, &kem_name));
            }
            Err(err) => eprintln!("accept failed: {}", err),
        }
    }
}

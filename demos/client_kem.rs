use std::env;
use std::net::TcpStream;
use std::process;

use pqc_bind::{net, Result};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(address: &str, port: &str) -> Result<()> {
    println!("Launching KEM client on {}:{}", address, port);
    let mut stream = TcpStream::connect(format!("{}:{}", address, port))?;

    let (details, shared_secret) = net::initiate(&mut stream)?;

    println!("{:#?}", details);
    println!(
        "\nClient shared secret:\n{} ... {}",
        hex(&shared_secret[..8]),
        hex(&shared_secret[shared_secret.len() - 8..])
    );
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: client-kem <address> <port number>");
        process::exit(1);
    }
    if let Err(err) = run(&args[1], &args[2]) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

use clap::Parser;
use secp256k1_scalarmul::curves::secp256k1::Secp256k1;
use secp256k1_scalarmul::ecdh::agree;
use secp256k1_scalarmul::error::Error;
use tracing::{error, info};

/// Run a two-party ECDH agreement over a fixed-window secp256k1 scalar
/// multiplier and print the shared secret.
#[derive(Parser, Debug)]
#[command(name = "ecdh", version, about)]
struct Args {
    /// Curve to use. Only `secp256k1` is implemented.
    #[arg(long, default_value = "secp256k1")]
    curve: String,

    /// Party A's private scalar, as hex (with or without a `0x` prefix).
    #[arg(long)]
    priv_a: String,

    /// Party B's private scalar, as hex (with or without a `0x` prefix).
    #[arg(long)]
    priv_b: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    std::process::exit(run(args));
}

fn run(args: Args) -> i32 {
    if args.curve != "secp256k1" {
        error!(curve = %args.curve, "unsupported curve");
        return 1;
    }

    match agree::<Secp256k1>(&args.priv_a, &args.priv_b) {
        Ok(secret) => {
            info!("ECDH agreement succeeded");
            println!("{}", secret.to_hex::<Secp256k1>());
            0
        }
        Err(Error::InconsistentResult) => {
            error!("shared-secret cross-check failed");
            2
        }
        Err(err) => {
            error!(%err, "malformed input");
            1
        }
    }
}

use tracing::info;
use tracing_subscriber::EnvFilter;

use toybfv::bfv::{decrypt, decrypts_exactly, encrypt, max_noise};
use toybfv::params::{init_params, DEFAULT_MODULUS, DEFAULT_RING_DEGREE};
use toybfv::ring::Plaintext;

type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = init_params(DEFAULT_MODULUS, DEFAULT_RING_DEGREE)?;
    info!(%params, "running homomorphic walk-through");

    // 1 + 2X + 3X^2 and 2 + X + X^2
    let m1 = Plaintext::new(vec![1, 2, 3], params.ring_degree);
    let m2 = Plaintext::new(vec![2, 1, 1], params.ring_degree);

    println!("Original messages:");
    println!("m1 = {m1}");
    println!("m2 = {m2}");

    let plain_sum = &m1 + &m2;
    let plain_prod = &m1 * &m2;
    println!("\nOperations on plaintexts:");
    println!("m1 + m2 = {plain_sum}");
    println!("m1 * m2 = {plain_prod}");

    let ct1 = encrypt(&m1, &params);
    let ct2 = encrypt(&m2, &params);
    println!("\nEncrypted ciphertexts:");
    println!("ct1 = {ct1}");
    println!("ct2 = {ct2}");

    let ct_add = &ct1 + &ct2;
    let ct_mul = &ct1 * &ct2;
    println!("\nHomomorphic operations:");
    println!("ct1 + ct2 = {ct_add}");
    println!("ct1 * ct2 = {ct_mul}");

    let dec_add = decrypt(&ct_add);
    let dec_mul = decrypt(&ct_mul);
    println!("\nDecrypted results:");
    println!("dec(ct1 + ct2) = {dec_add}");
    println!("dec(ct1 * ct2) = {dec_mul}");

    println!("\nVerification:");
    println!("Direct computation m1 + m2 = {plain_sum}");
    println!("Decryption of homomorphic addition = {dec_add}");
    let verdict = if decrypts_exactly(&plain_sum, &dec_add) {
        "Yes"
    } else {
        "No (due to noise)"
    };
    println!("Are they equal? {verdict}");
    println!(
        "Largest coefficient noise: {}",
        max_noise(&plain_sum, &dec_add, params.modulus)
    );

    Ok(())
}
